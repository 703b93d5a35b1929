//! Constantes que participan en el string canónico y en el hash.
//!
//! Cambiar cualquiera de estos valores cambia los fingerprints producidos
//! para un mismo host.

/// Clave del `ComponentSet` con las métricas básicas. Siempre va primero.
pub const KEY_BASIC: &str = "basic";

/// Clave del `ComponentSet` con la muestra visual. Siempre va después de `basic`.
pub const KEY_CANVAS: &str = "canvas";

/// Nombre de la única opción reconocida.
pub const OPTION_USE_CANVAS: &str = "useCanvas";

/// Algoritmo que se pide al `DigestProvider` en el camino primario.
pub const DIGEST_ALGORITHM: &str = "SHA-256";

/// Longitud en bytes del digest SHA-256.
pub const DIGEST_LEN: usize = 32;

/// Ancho mínimo (en caracteres hex) del hash de respaldo.
pub const FALLBACK_MIN_WIDTH: usize = 16;

/// Salida del hash de respaldo para un input vacío (sin padding).
pub const FALLBACK_EMPTY: &str = "0";
