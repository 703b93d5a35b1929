//! Configuración de la aplicación.
//! Carga variables de entorno (.env) una sola vez y expone una estructura
//! inmutable (`CONFIG`) con los defaults del cableado de host y los valores
//! del perfil que el proceso no puede detectar.
use std::env;

use keyprint_adapters::metrics::{parse_list, parse_screen, ProfileOverrides};
use keyprint_core::{ColorScheme, FingerprintOptions};
use log::warn;
use once_cell::sync::Lazy;

use crate::errors::ConfigError;

pub const ENV_USE_CANVAS: &str = "KEYPRINT_USE_CANVAS";
pub const ENV_DIGEST: &str = "KEYPRINT_DIGEST";
pub const ENV_SCREEN: &str = "KEYPRINT_SCREEN";
pub const ENV_COLOR_DEPTH: &str = "KEYPRINT_COLOR_DEPTH";
pub const ENV_LANGUAGE: &str = "KEYPRINT_LANGUAGE";
pub const ENV_VENDOR: &str = "KEYPRINT_VENDOR";
pub const ENV_COLOR_SCHEME: &str = "KEYPRINT_COLOR_SCHEME";
pub const ENV_PLUGINS: &str = "KEYPRINT_PLUGINS";

/// Camino primario del hasher en el cableado de host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigestMode {
    /// SHA-256 (`Sha256Digest`).
    #[default]
    Sha256,
    /// Sin primitiva criptográfica: siempre el hash de respaldo.
    Fallback,
}

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    /// Defaults de las opciones de generación.
    pub options: FingerprintOptions,
    pub digest: DigestMode,
    /// Reemplazos del perfil de host detectado.
    pub host: ProfileOverrides,
}

impl AppConfig {
    /// Lee la configuración de las variables de entorno del proceso.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        let use_canvas = match lookup(ENV_USE_CANVAS) {
            Some(raw) => parse_bool(ENV_USE_CANVAS, &raw)?,
            None => FingerprintOptions::default().use_canvas,
        };
        let digest = match lookup(ENV_DIGEST) {
            Some(raw) => parse_digest(&raw)?,
            None => DigestMode::default(),
        };
        Ok(Self { options: FingerprintOptions { use_canvas },
                  digest,
                  host: host_overrides(&lookup)? })
    }
}

/// Variables `KEYPRINT_*` del perfil. Un valor vacío cuenta como ausente.
fn host_overrides<F>(lookup: &F) -> Result<ProfileOverrides, ConfigError>
    where F: Fn(&str) -> Option<String>
{
    let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let screen = match read(ENV_SCREEN) {
        Some(raw) => Some(parse_screen(&raw).ok_or(ConfigError::InvalidScreen(raw))?),
        None => None,
    };
    let color_depth = match read(ENV_COLOR_DEPTH) {
        Some(raw) => Some(raw.trim().parse::<u32>()
                             .map_err(|_| ConfigError::InvalidNumber { key: ENV_COLOR_DEPTH.to_string(),
                                                                        value: raw.clone() })?),
        None => None,
    };
    let color_scheme = match read(ENV_COLOR_SCHEME) {
        Some(raw) => Some(raw.parse::<ColorScheme>()
                             .map_err(|_| ConfigError::InvalidColorScheme(raw.clone()))?),
        None => None,
    };

    Ok(ProfileOverrides { screen,
                          color_depth,
                          language: read(ENV_LANGUAGE).map(|l| l.trim().to_string()),
                          vendor: read(ENV_VENDOR),
                          color_scheme,
                          plugins: read(ENV_PLUGINS).map(|raw| parse_list(&raw)) })
}

/// Instancia global perezosa de configuración, evaluada una sola vez. Si el
/// entorno es inválido se usan los defaults.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let _ = dotenvy::dotenv(); // ignora error si no existe .env
    AppConfig::from_env().unwrap_or_else(|e| {
        warn!("configuración inválida, usando defaults: {e}");
        AppConfig::default()
    })
});

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool { key: key.to_string(),
                                            value: raw.to_string() }),
    }
}

fn parse_digest(raw: &str) -> Result<DigestMode, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "sha256" | "sha-256" => Ok(DigestMode::Sha256),
        "fallback" | "none" => Ok(DigestMode::Fallback),
        other => Err(ConfigError::UnknownDigest(other.to_string())),
    }
}
