//! Pipeline de generación: única entrada pública del core.

pub mod builder;
pub mod generator;

pub use builder::GeneratorBuilder;
pub use generator::FingerprintGenerator;
