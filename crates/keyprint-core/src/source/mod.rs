//! Contratos de las fuentes externas de datos.
//!
//! Las implementaciones reales viven fuera del core (ver `keyprint-adapters`);
//! los tests usan implementaciones en memoria.

use std::sync::Arc;

use crate::model::BasicMetrics;

/// Fuente de métricas básicas del host.
///
/// Debe ser barata y no fallar: los campos que el host no puede entregar se
/// dejan ausentes.
pub trait MetricsSource: Send + Sync {
    fn basic_metrics(&self) -> BasicMetrics;
}

/// Fuente de la muestra visual (render).
///
/// Devuelve la muestra opaca o `""` si no hay superficie de dibujo o si el
/// render falla. Nunca propaga un fallo.
pub trait VisualSampleSource: Send + Sync {
    fn sample(&self) -> String;
}

impl MetricsSource for BasicMetrics {
    fn basic_metrics(&self) -> BasicMetrics {
        self.clone()
    }
}

impl<T: MetricsSource + ?Sized> MetricsSource for Arc<T> {
    fn basic_metrics(&self) -> BasicMetrics {
        (**self).basic_metrics()
    }
}

impl<T: VisualSampleSource + ?Sized> VisualSampleSource for Arc<T> {
    fn sample(&self) -> String {
        (**self).sample()
    }
}

/// Muestra visual fija, útil para hosts sin superficie de dibujo o en tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedSample(pub String);

impl VisualSampleSource for FixedSample {
    fn sample(&self) -> String {
        self.0.clone()
    }
}
