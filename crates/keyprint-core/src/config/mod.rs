//! Resolución de opciones de generación.

pub mod merge;
pub mod options;

pub use merge::overlay;
pub use options::{is_truthy, resolve_options, FingerprintOptions, OptionOverrides, Override};
