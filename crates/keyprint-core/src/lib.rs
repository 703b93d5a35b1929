//! keyprint-core: composición determinista y hashing de fingerprints.
//!
//! El core no lee el host directamente. Las fuentes de datos (métricas del
//! dispositivo, muestra visual) y la primitiva de digest se inyectan como
//! capacidades (`MetricsSource`, `VisualSampleSource`, `DigestProvider`) al
//! construir el `FingerprintGenerator`.
//!
//! Flujo por llamada: opciones → métricas → muestra visual (opcional) →
//! `ComponentSet` → string canónico → hash.
pub mod config;
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod model;
pub mod pipeline;
pub mod source;

pub use config::{resolve_options, FingerprintOptions, OptionOverrides, Override};
pub use errors::DigestError;
pub use hashing::{fallback_hash, to_canonical_json, DigestProvider, FingerprintHasher, HashStrategy};
pub use model::{BasicMetrics, ColorScheme, ComponentSet};
pub use pipeline::{FingerprintGenerator, GeneratorBuilder};
pub use source::{MetricsSource, VisualSampleSource};

/// Fingerprint final: string hexadecimal en minúsculas.
pub type Fingerprint = String;
