//! `ComponentSet`: la estructura de dos claves que se canonicaliza y hashea.

use crate::config::FingerprintOptions;
use crate::hashing::to_canonical_json;
use crate::source::{MetricsSource, VisualSampleSource};

use super::metrics::BasicMetrics;

/// Conjunto de componentes de una invocación. Se construye una vez y no se
/// modifica.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSet {
    basic: BasicMetrics,
    canvas: String,
}

impl ComponentSet {
    pub fn new(basic: BasicMetrics, canvas: impl Into<String>) -> Self {
        Self { basic, canvas: canvas.into() }
    }

    /// Compone el set a partir de las fuentes.
    ///
    /// Las métricas se leen siempre. La fuente visual sólo se invoca si
    /// `options.use_canvas` es verdadero; si no, `canvas` queda como `""`
    /// (la clave nunca se omite).
    pub fn compose(options: &FingerprintOptions, metrics: &dyn MetricsSource,
                   visual: Option<&dyn VisualSampleSource>)
                   -> Self {
        let basic = metrics.basic_metrics();
        let canvas = match visual {
            Some(source) if options.use_canvas => source.sample(),
            _ => String::new(),
        };
        Self { basic, canvas }
    }

    pub fn basic(&self) -> &BasicMetrics {
        &self.basic
    }

    pub fn canvas(&self) -> &str {
        &self.canvas
    }

    pub fn to_canonical_json(&self) -> String {
        to_canonical_json(self)
    }
}
