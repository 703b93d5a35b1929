//! Estrategias de hash.
//!
//! - `DigestStrategy`: digest criptográfico vía `DigestProvider`, 64 hex.
//! - `FallbackStrategy`: acumulador de 32 bits, determinista y síncrono. No
//!   es criptográfico; sólo garantiza que siempre haya un resultado.

use std::fmt::Write;
use std::sync::Arc;

use async_trait::async_trait;

use super::digest::DigestProvider;
use crate::constants::{DIGEST_ALGORITHM, DIGEST_LEN, FALLBACK_EMPTY, FALLBACK_MIN_WIDTH};
use crate::errors::DigestError;

/// Una forma de reducir el string canónico a un fingerprint.
#[async_trait]
pub trait HashStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn is_available(&self) -> bool {
        true
    }

    async fn hash(&self, input: &str) -> Result<String, DigestError>;
}

/// Camino primario: digest del host sobre los bytes UTF-8 del input.
#[derive(Clone)]
pub struct DigestStrategy {
    provider: Arc<dyn DigestProvider>,
}

impl DigestStrategy {
    pub fn new(provider: Arc<dyn DigestProvider>) -> Self {
        Self { provider }
    }
}

impl std::fmt::Debug for DigestStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DigestStrategy").finish_non_exhaustive()
    }
}

#[async_trait]
impl HashStrategy for DigestStrategy {
    fn name(&self) -> &'static str {
        "digest"
    }

    fn is_available(&self) -> bool {
        self.provider.is_available()
    }

    async fn hash(&self, input: &str) -> Result<String, DigestError> {
        let bytes = self.provider.digest(DIGEST_ALGORITHM, input.as_bytes()).await?;
        if bytes.len() != DIGEST_LEN {
            return Err(DigestError::Failed(format!("expected {DIGEST_LEN} digest bytes, got {}", bytes.len())));
        }
        Ok(to_hex(&bytes))
    }
}

/// Camino de respaldo. Nunca falla.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackStrategy;

impl FallbackStrategy {
    /// Versión infalible de `hash`, para cuando otra estrategia ya falló.
    pub fn hash_now(&self, input: &str) -> String {
        fallback_hash(input)
    }
}

#[async_trait]
impl HashStrategy for FallbackStrategy {
    fn name(&self) -> &'static str {
        "fallback"
    }

    async fn hash(&self, input: &str) -> Result<String, DigestError> {
        Ok(self.hash_now(input))
    }
}

/// Hash de respaldo sobre las unidades UTF-16 del input.
///
/// `acc = acc * 31 + unit` con wraparound de 32 bits; el resultado es el
/// valor absoluto en hex, con padding de ceros a la izquierda hasta 16
/// caracteres. Un input vacío devuelve `"0"` sin padding.
pub fn fallback_hash(input: &str) -> String {
    if input.is_empty() {
        return FALLBACK_EMPTY.to_string();
    }
    let acc = input.encode_utf16()
                   .fold(0i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(i32::from(unit)));
    // unsigned_abs: i32::MIN → 0x80000000, igual que Math.abs sobre un double.
    format!("{:0width$x}", acc.unsigned_abs(), width = FALLBACK_MIN_WIDTH)
}

/// Hex en minúsculas, dos caracteres por byte.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_empty_is_zero() {
        assert_eq!(fallback_hash(""), "0");
    }

    #[test]
    fn fallback_single_char_is_padded() {
        assert_eq!(fallback_hash("a"), "0000000000000061");
    }

    #[test]
    fn fallback_known_values() {
        // "ab" = 97 * 31 + 98 = 3105
        assert_eq!(fallback_hash("ab"), "0000000000000c21");
        // un code unit fuera de ASCII cuenta como un único u16
        assert_eq!(fallback_hash("é"), "00000000000000e9");
    }

    #[test]
    fn fallback_negative_accumulator_uses_absolute_value() {
        // acc = -1184917978
        assert_eq!(fallback_hash("k10000"), "0000000046a069da");
        assert_eq!(fallback_hash("test input"), "000000000f577abc");
    }

    #[test]
    fn fallback_min_accumulator_is_not_truncated() {
        // acc = i32::MIN
        assert_eq!(fallback_hash("k14370700\u{e0d9}"), "0000000080000000");
    }

    #[test]
    fn fallback_surrogate_pair_followed_by_ascii() {
        assert_eq!(fallback_hash("\u{1F511}x"), "0000000003468284");
    }

    #[test]
    fn fallback_counts_utf16_units() {
        // U+1F511 es un par sustituto: 0xD83D, 0xDD11
        let expected = (0xD83Di32).wrapping_mul(31).wrapping_add(0xDD11);
        assert_eq!(fallback_hash("\u{1F511}"), format!("{:016x}", expected.unsigned_abs()));
    }

    #[test]
    fn fallback_never_truncates() {
        let long = "x".repeat(10_000);
        let h = fallback_hash(&long);
        assert_eq!(h.len(), 16);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn to_hex_pads_each_byte() {
        assert_eq!(to_hex(&[0x00, 0x0f, 0xab]), "000fab");
        assert_eq!(to_hex(&[0xAB; 32]), "ab".repeat(32));
    }

    #[test]
    fn fallback_strategy_is_always_available() {
        let s = FallbackStrategy;
        assert!(s.is_available());
        assert_eq!(s.name(), "fallback");
        let h = tokio_test::block_on(s.hash("test input")).unwrap();
        assert_eq!(h, fallback_hash("test input"));
        assert_eq!(s.hash_now("test input"), h);
    }

    struct ShortDigest;

    #[async_trait]
    impl DigestProvider for ShortDigest {
        async fn digest(&self, _algorithm: &str, _data: &[u8]) -> Result<Vec<u8>, DigestError> {
            Ok(vec![0xAB; 20])
        }
    }

    #[test]
    fn digest_strategy_rejects_wrong_length() {
        let s = DigestStrategy::new(Arc::new(ShortDigest));
        let err = tokio_test::block_on(s.hash("x")).unwrap_err();
        assert!(matches!(err, DigestError::Failed(_)));
    }
}
