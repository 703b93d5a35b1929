//! Opciones de generación y su resolución contra los defaults.
//!
//! Contrato (deliberado): una clave presente en los overrides reemplaza al
//! default aunque su valor sea `null`. Por eso `{"useCanvas": null}` NO
//! equivale a `{}`: el flag queda sin valor, se evalúa como falso y la
//! muestra visual se excluye.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::merge::overlay;
use crate::constants::OPTION_USE_CANVAS;

/// Opciones ya resueltas. Inmutables durante una invocación.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FingerprintOptions {
    /// Incluir la muestra visual (canvas) en el `ComponentSet`.
    pub use_canvas: bool,
}

impl Default for FingerprintOptions {
    fn default() -> Self {
        Self { use_canvas: true }
    }
}

impl FingerprintOptions {
    /// Representación JSON usada como base del merge.
    pub fn to_value(&self) -> Value {
        Value::Object(self.to_map())
    }

    fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(OPTION_USE_CANVAS.to_string(), Value::Bool(self.use_canvas));
        map
    }

    fn from_merged(merged: &Map<String, Value>) -> Self {
        Self { use_canvas: merged.get(OPTION_USE_CANVAS).is_some_and(is_truthy) }
    }
}

/// Estado de un override tipado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Override<T> {
    /// La clave no aparece: se usa el default.
    #[default]
    Absent,
    /// La clave aparece sin valor (`null`): reemplaza al default.
    Unset,
    /// La clave aparece con un valor.
    Value(T),
}

/// Overrides tipados; equivalentes a pasar un objeto JSON parcial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionOverrides {
    pub use_canvas: Override<bool>,
}

impl OptionOverrides {
    pub fn use_canvas(value: bool) -> Self {
        Self { use_canvas: Override::Value(value) }
    }

    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        match self.use_canvas {
            Override::Absent => {}
            Override::Unset => {
                map.insert(OPTION_USE_CANVAS.to_string(), Value::Null);
            }
            Override::Value(v) => {
                map.insert(OPTION_USE_CANVAS.to_string(), Value::Bool(v));
            }
        }
        Value::Object(map)
    }
}

/// Resuelve los overrides del caller sobre `defaults`.
///
/// `None` y cualquier valor que no sea objeto (incluido `null`) significan
/// "sin overrides". Nunca falla.
pub fn resolve_options(defaults: &FingerprintOptions, overrides: Option<&Value>) -> FingerprintOptions {
    let mut merged = defaults.to_map();
    if let Some(Value::Object(o)) = overrides {
        overlay(&mut merged, o);
    }
    FingerprintOptions::from_merged(&merged)
}

/// Lectura booleana tolerante de un valor de opción.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
