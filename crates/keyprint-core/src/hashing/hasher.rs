//! Punto de entrada único del hashing.
//!
//! Selecciona la estrategia en cada llamada: si hay `DigestProvider` y está
//! disponible se usa el digest; si no existe, no está disponible o falla, se
//! usa el respaldo. El caller sólo puede distinguirlos por la longitud.

use std::sync::Arc;

use log::debug;

use super::digest::DigestProvider;
use super::strategy::{DigestStrategy, FallbackStrategy, HashStrategy};

#[derive(Debug, Clone, Default)]
pub struct FingerprintHasher {
    primary: Option<DigestStrategy>,
    fallback: FallbackStrategy,
}

impl FingerprintHasher {
    /// Hasher que usa `provider` como camino primario.
    pub fn new(provider: Arc<dyn DigestProvider>) -> Self {
        Self { primary: Some(DigestStrategy::new(provider)),
               fallback: FallbackStrategy }
    }

    /// Hasher sin primitiva criptográfica: siempre usa el respaldo.
    pub fn fallback_only() -> Self {
        Self { primary: None,
               fallback: FallbackStrategy }
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    /// Estrategia de esta llamada. La disponibilidad se consulta una vez.
    fn select(&self) -> &dyn HashStrategy {
        match self.primary.as_ref() {
            Some(strategy) if strategy.is_available() => strategy,
            Some(strategy) => {
                debug!("{} strategy unavailable, using fallback", strategy.name());
                &self.fallback
            }
            None => {
                debug!("no digest provider configured, using fallback");
                &self.fallback
            }
        }
    }

    /// Reduce `input` a un fingerprint. No tiene canal de error.
    pub async fn hash(&self, input: &str) -> String {
        let strategy = self.select();
        match strategy.hash(input).await {
            Ok(hex) => hex,
            Err(err) => {
                debug!("{} strategy failed, using fallback: {err}", strategy.name());
                self.fallback.hash_now(input)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DigestError;
    use crate::hashing::strategy::fallback_hash;
    use async_trait::async_trait;

    struct Constant(u8);

    #[async_trait]
    impl DigestProvider for Constant {
        async fn digest(&self, _algorithm: &str, _data: &[u8]) -> Result<Vec<u8>, DigestError> {
            Ok(vec![self.0; 32])
        }
    }

    struct Short;

    #[async_trait]
    impl DigestProvider for Short {
        async fn digest(&self, _algorithm: &str, _data: &[u8]) -> Result<Vec<u8>, DigestError> {
            Ok(vec![0xAB; 20])
        }
    }

    #[tokio::test]
    async fn primary_path_renders_hex() {
        let hasher = FingerprintHasher::new(Arc::new(Constant(0xCD)));
        assert_eq!(hasher.hash("deterministic test").await, "cd".repeat(32));
    }

    #[tokio::test]
    async fn short_digest_falls_back() {
        let hasher = FingerprintHasher::new(Arc::new(Short));
        let h = hasher.hash("x").await;
        assert_eq!(h, fallback_hash("x"));
        assert_eq!(h.len(), 16);
    }

    #[test]
    fn selects_fallback_without_provider() {
        assert_eq!(FingerprintHasher::fallback_only().select().name(), "fallback");
        assert_eq!(FingerprintHasher::new(Arc::new(Constant(1))).select().name(), "digest");
    }

    #[tokio::test]
    async fn without_provider_uses_fallback() {
        let hasher = FingerprintHasher::fallback_only();
        assert!(!hasher.has_primary());
        assert_eq!(hasher.hash("").await, "0");
        assert_eq!(hasher.hash("a").await, "0000000000000061");
    }
}
