//! keyprint
//!
//! Fingerprint de dispositivo estable, sin cookies ni estado de servidor.
//! Este crate une el core (`keyprint-core`) con los adaptadores de host
//! (`keyprint-adapters`):
//! - `generate` calcula el fingerprint del host actual.
//! - `host_generator` expone el `FingerprintGenerator` cableado para quien
//!   quiera reutilizarlo o inspeccionar sus componentes.
//! - `config` lee los defaults y el perfil de host desde variables de
//!   entorno.

pub mod config;
pub mod errors;
pub mod hashing;

use std::sync::Arc;

use serde_json::Value;

pub use keyprint_adapters as adapters;
pub use keyprint_core::{BasicMetrics, ColorScheme, ComponentSet, Fingerprint, FingerprintGenerator,
                        FingerprintOptions, MetricsSource, OptionOverrides, Override, VisualSampleSource};

use keyprint_adapters::{CanvasSampler, HeadlessSurfaceFactory, HostMetricsSource, Sha256Digest};
use crate::config::{AppConfig, DigestMode, CONFIG};

/// Construye el generador de host según `config`.
pub fn host_generator(config: &AppConfig) -> FingerprintGenerator {
    let builder = FingerprintGenerator::builder(Arc::new(HostMetricsSource::with_overrides(&config.host)))
        .visual(Arc::new(CanvasSampler::new(HeadlessSurfaceFactory)))
        .defaults(config.options);
    match config.digest {
        DigestMode::Sha256 => builder.digest(Arc::new(Sha256Digest)).build(),
        DigestMode::Fallback => builder.build(),
    }
}

/// Fingerprint del host actual con la configuración global (`CONFIG`).
///
/// `overrides` es un objeto parcial `{"useCanvas": bool}`; `None` o `{}`
/// usan los defaults. Nunca falla.
pub async fn generate(overrides: Option<&Value>) -> Fingerprint {
    host_generator(&CONFIG).generate(overrides).await
}
