use thiserror::Error;

/// Errores al leer la configuración de entorno.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Valor booleano inválido en {key}: {value}")]
    InvalidBool { key: String, value: String },
    #[error("Modo de digest desconocido: {0}")]
    UnknownDigest(String),
    #[error("Resolución de pantalla inválida (se espera ANCHOxALTO): {0}")]
    InvalidScreen(String),
    #[error("Valor numérico inválido en {key}: {value}")]
    InvalidNumber { key: String, value: String },
    #[error("Esquema de color desconocido: {0}")]
    InvalidColorScheme(String),
}
