// Reexport de la implementación única ubicada en `keyprint-core` para que los
// clientes del crate raíz no dependan directamente del core.
pub use keyprint_core::hashing::{fallback_hash, to_canonical_json, to_hex, FingerprintHasher};
