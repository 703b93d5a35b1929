//! Canonicalización del `ComponentSet` y hashing con dos estrategias.

pub mod canonical_json;
pub mod digest;
pub mod hasher;
pub mod strategy;

pub use canonical_json::{encode_value, to_canonical_json};
pub use digest::DigestProvider;
pub use hasher::FingerprintHasher;
pub use strategy::{fallback_hash, to_hex, DigestStrategy, FallbackStrategy, HashStrategy};
