//! Merge shallow de opciones.
//!
//! Las claves de `overrides` reemplazan a las de la base aunque su valor sea
//! `null`: una clave presente siempre gana, sólo una clave ausente conserva
//! el valor de la base. Los valores anidados se reemplazan enteros.

use serde_json::{Map, Value};

/// Aplica `overrides` sobre `base`, en el lugar.
///
/// Una clave nueva se agrega al final; una existente conserva su posición.
pub fn overlay(base: &mut Map<String, Value>, overrides: &Map<String, Value>) {
    for (key, value) in overrides {
        base.insert(key.clone(), value.clone());
    }
}
