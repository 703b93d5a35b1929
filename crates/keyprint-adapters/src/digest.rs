//! SHA-256 como `DigestProvider`.

use async_trait::async_trait;
use keyprint_core::DigestError;
use keyprint_core::DigestProvider;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Digest;

#[async_trait]
impl DigestProvider for Sha256Digest {
    async fn digest(&self, algorithm: &str, data: &[u8]) -> Result<Vec<u8>, DigestError> {
        if !algorithm.eq_ignore_ascii_case("SHA-256") {
            return Err(DigestError::UnsupportedAlgorithm(algorithm.to_string()));
        }
        let mut hasher = Sha256::new();
        hasher.update(data);
        Ok(hasher.finalize().to_vec())
    }
}
