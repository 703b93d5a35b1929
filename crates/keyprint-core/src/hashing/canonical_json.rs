//! String canónico del `ComponentSet`.
//!
//! A diferencia de un JSON canónico con claves ordenadas, aquí el orden lo
//! fija el modelo: `basic` y luego `canvas` en el nivel superior, y el orden
//! de inserción de `BasicMetrics::to_value` dentro de `basic`. Sin espacios.

use serde_json::Value;

use crate::constants::{KEY_BASIC, KEY_CANVAS};
use crate::model::ComponentSet;

pub fn to_canonical_json(set: &ComponentSet) -> String {
    format!("{{{}:{},{}:{}}}",
            quote(KEY_BASIC),
            encode_value(&set.basic().to_value()),
            quote(KEY_CANVAS),
            quote(set.canvas()))
}

/// Codifica un `Value` respetando el orden de sus objetos.
pub fn encode_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(encode_value).collect();
            format!("[{}]", items.join(","))
        }
        Value::Object(map) => {
            let items: Vec<String> = map.iter()
                                        .map(|(k, v)| format!("{}:{}", quote(k), encode_value(v)))
                                        .collect();
            format!("{{{}}}", items.join(","))
        }
    }
}

fn quote(s: &str) -> String {
    Value::from(s).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BasicMetrics;
    use serde_json::json;

    #[test]
    fn canonical_text_has_fixed_shape() {
        let set = ComponentSet::new(BasicMetrics::with_screen(1920, 1080, "en-US", -180, 24), "mocked-canvas-data");
        assert_eq!(to_canonical_json(&set),
                   concat!(r#"{"basic":{"screenResolution":"1920x1080","language":"en-US","timezoneOffset":-180,"#,
                           r#""colorDepth":24,"userAgent":"","platform":"","vendor":"","colorScheme":"no-preference"},"#,
                           r#""canvas":"mocked-canvas-data"}"#));
    }

    #[test]
    fn empty_canvas_is_kept() {
        let set = ComponentSet::new(BasicMetrics::new("1x1", "en", 0, 8), "");
        assert!(to_canonical_json(&set).ends_with(r#","canvas":""}"#));
    }

    #[test]
    fn strings_are_escaped() {
        assert_eq!(encode_value(&json!(["a\"b", "\n"])), r#"["a\"b","\n"]"#);
    }

    #[test]
    fn object_order_is_preserved() {
        let v = json!({"z": 1, "a": 2});
        assert_eq!(encode_value(&v), r#"{"z":1,"a":2}"#);
    }
}
