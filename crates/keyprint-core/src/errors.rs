//! Errores internos del core.
//!
//! Ninguno de estos errores llega al caller de `FingerprintGenerator::generate`:
//! el hasher los captura y cae al camino de respaldo.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DigestError {
    #[error("digest primitive unavailable")]
    Unavailable,
    #[error("unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),
    #[error("digest failed: {0}")]
    Failed(String),
}
