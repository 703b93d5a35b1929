//! Builder para `FingerprintGenerator`.
//!
//! La fuente de métricas es obligatoria y se pasa al crear el builder; la
//! fuente visual y el digest son opcionales.
//!
//! ```ignore
//! let generator = FingerprintGenerator::builder(metrics)
//!     .visual(canvas)
//!     .digest(sha256)
//!     .build();
//! ```

use std::sync::Arc;

use crate::config::FingerprintOptions;
use crate::hashing::{DigestProvider, FingerprintHasher};
use crate::source::{MetricsSource, VisualSampleSource};

use super::generator::FingerprintGenerator;

pub struct GeneratorBuilder {
    metrics: Arc<dyn MetricsSource>,
    visual: Option<Arc<dyn VisualSampleSource>>,
    digest: Option<Arc<dyn DigestProvider>>,
    defaults: FingerprintOptions,
}

impl GeneratorBuilder {
    pub fn new(metrics: Arc<dyn MetricsSource>) -> Self {
        Self { metrics,
               visual: None,
               digest: None,
               defaults: FingerprintOptions::default() }
    }

    /// Fuente de la muestra visual. Sin ella `canvas` siempre es `""`.
    #[inline]
    pub fn visual(mut self, source: Arc<dyn VisualSampleSource>) -> Self {
        self.visual = Some(source);
        self
    }

    /// Primitiva de digest del camino primario.
    #[inline]
    pub fn digest(mut self, provider: Arc<dyn DigestProvider>) -> Self {
        self.digest = Some(provider);
        self
    }

    /// Defaults sobre los que se resuelven los overrides de cada llamada.
    #[inline]
    pub fn defaults(mut self, defaults: FingerprintOptions) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn build(self) -> FingerprintGenerator {
        let hasher = match self.digest {
            Some(provider) => FingerprintHasher::new(provider),
            None => FingerprintHasher::fallback_only(),
        };
        FingerprintGenerator::from_parts(self.metrics, self.visual, hasher, self.defaults)
    }
}
