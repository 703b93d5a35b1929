//! Métricas básicas (baratas de obtener) del host.
//!
//! Los campos opcionales se modelan como `Option` y sólo se serializan cuando
//! están presentes; "el host no lo reporta" y "nunca se pudo obtener" producen
//! exactamente el mismo JSON.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

/// Esquema de color preferido por el host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    Light,
    Dark,
    #[default]
    NoPreference,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
            ColorScheme::NoPreference => "no-preference",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            "no-preference" | "" => Ok(ColorScheme::NoPreference),
            other => Err(format!("unknown color scheme: {other}")),
        }
    }
}

/// Métricas básicas tal como las entrega un `MetricsSource`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicMetrics {
    pub screen_resolution: String,
    pub language: String,
    /// Minutos UTC - local (convención del navegador: UTC-3 → 180).
    pub timezone_offset: i32,
    pub color_depth: u32,
    pub user_agent: String,
    pub platform: String,
    pub vendor: String,
    pub color_scheme: ColorScheme,
    pub hardware_concurrency: Option<u32>,
    plugins: Option<Vec<String>>,
}

impl BasicMetrics {
    /// Crea métricas con los campos requeridos; los opcionales quedan ausentes.
    pub fn new(screen_resolution: impl Into<String>, language: impl Into<String>, timezone_offset: i32,
               color_depth: u32)
               -> Self {
        Self { screen_resolution: screen_resolution.into(),
               language: language.into(),
               timezone_offset,
               color_depth,
               user_agent: String::new(),
               platform: String::new(),
               vendor: String::new(),
               color_scheme: ColorScheme::NoPreference,
               hardware_concurrency: None,
               plugins: None }
    }

    pub fn with_screen(width: u32, height: u32, language: impl Into<String>, timezone_offset: i32,
                       color_depth: u32)
                       -> Self {
        Self::new(format!("{width}x{height}"), language, timezone_offset, color_depth)
    }

    pub fn with_agent(mut self, user_agent: impl Into<String>, platform: impl Into<String>,
                      vendor: impl Into<String>)
                      -> Self {
        self.user_agent = user_agent.into();
        self.platform = platform.into();
        self.vendor = vendor.into();
        self
    }

    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = scheme;
        self
    }

    pub fn with_hardware_concurrency(mut self, cores: Option<u32>) -> Self {
        self.hardware_concurrency = cores;
        self
    }

    /// Lista de plugins en orden. Una lista vacía cuenta como ausente.
    pub fn with_plugins<I, S>(mut self, plugins: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        let list: Vec<String> = plugins.into_iter().map(Into::into).collect();
        self.plugins = if list.is_empty() { None } else { Some(list) };
        self
    }

    pub fn plugins(&self) -> Option<&[String]> {
        self.plugins.as_deref()
    }

    /// Objeto JSON con orden de claves fijo: requeridos primero, luego los
    /// opcionales presentes.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("screenResolution".into(), Value::from(self.screen_resolution.as_str()));
        map.insert("language".into(), Value::from(self.language.as_str()));
        map.insert("timezoneOffset".into(), Value::from(self.timezone_offset));
        map.insert("colorDepth".into(), Value::from(self.color_depth));
        map.insert("userAgent".into(), Value::from(self.user_agent.as_str()));
        map.insert("platform".into(), Value::from(self.platform.as_str()));
        map.insert("vendor".into(), Value::from(self.vendor.as_str()));
        map.insert("colorScheme".into(), Value::from(self.color_scheme.as_str()));
        if let Some(cores) = self.hardware_concurrency {
            map.insert("hardwareConcurrency".into(), Value::from(cores));
        }
        if let Some(plugins) = &self.plugins {
            map.insert("plugins".into(), Value::from(plugins.clone()));
        }
        Value::Object(map)
    }
}
