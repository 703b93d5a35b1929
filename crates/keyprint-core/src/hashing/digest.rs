//! Contrato de la primitiva de digest del host.

use async_trait::async_trait;

use crate::errors::DigestError;

/// Primitiva criptográfica asíncrona (p.ej. SHA-256 del host).
#[async_trait]
pub trait DigestProvider: Send + Sync {
    /// Sondeo síncrono de disponibilidad; se consulta una vez por llamada a
    /// `FingerprintHasher::hash`.
    fn is_available(&self) -> bool {
        true
    }

    /// Calcula el digest de `data` con el algoritmo indicado.
    async fn digest(&self, algorithm: &str, data: &[u8]) -> Result<Vec<u8>, DigestError>;
}
