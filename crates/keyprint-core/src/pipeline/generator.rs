//! `FingerprintGenerator`: resuelve opciones, compone, canonicaliza y hashea.
//!
//! No guarda estado entre llamadas; sólo referencias inmutables a las
//! fuentes inyectadas. Llamadas concurrentes son independientes.

use std::sync::Arc;

use log::debug;
use serde_json::Value;

use crate::config::{resolve_options, FingerprintOptions, OptionOverrides};
use crate::hashing::FingerprintHasher;
use crate::model::ComponentSet;
use crate::source::{MetricsSource, VisualSampleSource};
use crate::Fingerprint;

use super::builder::GeneratorBuilder;

pub struct FingerprintGenerator {
    metrics: Arc<dyn MetricsSource>,
    visual: Option<Arc<dyn VisualSampleSource>>,
    hasher: FingerprintHasher,
    defaults: FingerprintOptions,
}

impl FingerprintGenerator {
    pub fn builder(metrics: Arc<dyn MetricsSource>) -> GeneratorBuilder {
        GeneratorBuilder::new(metrics)
    }

    pub(crate) fn from_parts(metrics: Arc<dyn MetricsSource>, visual: Option<Arc<dyn VisualSampleSource>>,
                             hasher: FingerprintHasher, defaults: FingerprintOptions)
                             -> Self {
        Self { metrics,
               visual,
               hasher,
               defaults }
    }

    pub fn defaults(&self) -> &FingerprintOptions {
        &self.defaults
    }

    /// Resuelve un objeto parcial de overrides (ver `resolve_options`).
    pub fn resolve(&self, overrides: Option<&Value>) -> FingerprintOptions {
        resolve_options(&self.defaults, overrides)
    }

    /// Compone el `ComponentSet` para unas opciones ya resueltas.
    pub fn components(&self, options: &FingerprintOptions) -> ComponentSet {
        ComponentSet::compose(options, self.metrics.as_ref(), self.visual.as_deref())
    }

    /// Genera el fingerprint. `overrides` es un objeto JSON parcial con la
    /// opción `useCanvas`; `None` o `{}` usan los defaults.
    pub async fn generate(&self, overrides: Option<&Value>) -> Fingerprint {
        let options = self.resolve(overrides);
        self.generate_resolved(&options).await
    }

    /// Igual que `generate` pero con overrides tipados.
    pub async fn generate_with(&self, overrides: &OptionOverrides) -> Fingerprint {
        let value = overrides.to_value();
        self.generate(Some(&value)).await
    }

    pub async fn generate_resolved(&self, options: &FingerprintOptions) -> Fingerprint {
        let canonical = self.components(options).to_canonical_json();
        debug!("canonical components: {} bytes (use_canvas={})", canonical.len(), options.use_canvas);
        self.hasher.hash(&canonical).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BasicMetrics;
    use crate::source::FixedSample;

    fn generator() -> FingerprintGenerator {
        FingerprintGenerator::builder(Arc::new(BasicMetrics::with_screen(1920, 1080, "en-US", -180, 24)))
            .visual(Arc::new(FixedSample("mocked-canvas-data".into())))
            .build()
    }

    #[test]
    fn components_respect_flag() {
        let g = generator();
        assert_eq!(g.components(&FingerprintOptions { use_canvas: true }).canvas(), "mocked-canvas-data");
        assert_eq!(g.components(&FingerprintOptions { use_canvas: false }).canvas(), "");
    }

    #[test]
    fn fallback_fingerprint_shape() {
        let fp = tokio_test::block_on(generator().generate(None));
        assert_eq!(fp.len(), 16);
    }
}
