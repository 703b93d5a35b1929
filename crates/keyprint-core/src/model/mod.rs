//! Modelo de datos de una invocación: métricas básicas y `ComponentSet`.

pub mod components;
pub mod metrics;

pub use components::ComponentSet;
pub use metrics::{BasicMetrics, ColorScheme};
