//! Métricas básicas del host.
//!
//! Un proceso nativo no conoce todo lo que un navegador expone (pantalla,
//! vendor, esquema de color). `HostProfile::detect` sólo lee lo que el host
//! sí revela (zona horaria, núcleos lógicos, locale, sistema operativo) y deja
//! el resto en valores neutros; `ProfileOverrides` completa esos huecos desde
//! la configuración.
//!
//! El perfil se captura una vez al construir `HostMetricsSource`; las
//! llamadas posteriores devuelven siempre las mismas métricas.

use std::env;

use chrono::{Local, Offset};
use keyprint_core::{BasicMetrics, ColorScheme, MetricsSource};

const DEFAULT_COLOR_DEPTH: u32 = 24;
const DEFAULT_LANGUAGE: &str = "en-US";

/// Valores crudos del host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostProfile {
    pub screen_width: u32,
    pub screen_height: u32,
    pub color_depth: u32,
    pub language: String,
    pub timezone_offset: i32,
    pub user_agent: String,
    pub platform: String,
    pub vendor: String,
    pub color_scheme: ColorScheme,
    pub hardware_concurrency: Option<u32>,
    pub plugins: Vec<String>,
}

/// Valores que reemplazan a los detectados. `None` conserva el del host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileOverrides {
    pub screen: Option<(u32, u32)>,
    pub color_depth: Option<u32>,
    pub language: Option<String>,
    pub vendor: Option<String>,
    pub color_scheme: Option<ColorScheme>,
    pub plugins: Option<Vec<String>>,
}

impl ProfileOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl HostProfile {
    /// Detecta el perfil del host actual.
    pub fn detect() -> Self {
        let language = locale_language().unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        let hardware_concurrency = std::thread::available_parallelism().ok()
                                                                       .and_then(|n| u32::try_from(n.get()).ok());

        Self { screen_width: 0,
               screen_height: 0,
               color_depth: DEFAULT_COLOR_DEPTH,
               language,
               timezone_offset: local_timezone_offset(),
               user_agent: default_user_agent(),
               platform: default_platform(),
               vendor: String::new(),
               color_scheme: ColorScheme::NoPreference,
               hardware_concurrency,
               plugins: Vec::new() }
    }

    /// Aplica `overrides` sobre el perfil.
    pub fn with_overrides(mut self, overrides: &ProfileOverrides) -> Self {
        if let Some((w, h)) = overrides.screen {
            self.screen_width = w;
            self.screen_height = h;
        }
        if let Some(depth) = overrides.color_depth {
            self.color_depth = depth;
        }
        if let Some(language) = &overrides.language {
            self.language = language.clone();
        }
        if let Some(vendor) = &overrides.vendor {
            self.vendor = vendor.clone();
        }
        if let Some(scheme) = overrides.color_scheme {
            self.color_scheme = scheme;
        }
        if let Some(plugins) = &overrides.plugins {
            self.plugins = plugins.clone();
        }
        self
    }

    pub fn to_metrics(&self) -> BasicMetrics {
        BasicMetrics::with_screen(self.screen_width, self.screen_height, self.language.clone(),
                                  self.timezone_offset, self.color_depth)
            .with_agent(self.user_agent.clone(), self.platform.clone(), self.vendor.clone())
            .with_color_scheme(self.color_scheme)
            .with_hardware_concurrency(self.hardware_concurrency)
            .with_plugins(self.plugins.iter().cloned())
    }
}

#[derive(Debug, Clone)]
pub struct HostMetricsSource {
    profile: HostProfile,
}

impl HostMetricsSource {
    pub fn new(profile: HostProfile) -> Self {
        Self { profile }
    }

    pub fn detect() -> Self {
        Self::new(HostProfile::detect())
    }

    /// Perfil detectado con `overrides` aplicados.
    pub fn with_overrides(overrides: &ProfileOverrides) -> Self {
        Self::new(HostProfile::detect().with_overrides(overrides))
    }

    pub fn profile(&self) -> &HostProfile {
        &self.profile
    }
}

impl MetricsSource for HostMetricsSource {
    fn basic_metrics(&self) -> BasicMetrics {
        self.profile.to_metrics()
    }
}

/// `"1920x1080"` → `(1920, 1080)`.
pub fn parse_screen(raw: &str) -> Option<(u32, u32)> {
    let (w, h) = raw.trim().split_once(['x', 'X'])?;
    Some((w.trim().parse().ok()?, h.trim().parse().ok()?))
}

/// Locale POSIX a etiqueta de idioma: `es_MX.UTF-8` → `es-MX`. `C` y `POSIX`
/// no identifican un idioma.
pub fn language_from_locale(raw: &str) -> Option<String> {
    let base = raw.split(['.', '@']).next()?.trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}

fn locale_language() -> Option<String> {
    ["LC_ALL", "LANG"].iter()
                      .find_map(|key| env::var(key).ok().and_then(|v| language_from_locale(&v)))
}

/// Lista separada por comas; los elementos vacíos se descartan.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
}

/// Minutos UTC - local, como `Date.getTimezoneOffset`.
pub fn local_timezone_offset() -> i32 {
    let seconds = Local::now().offset().fix().local_minus_utc();
    -(seconds / 60)
}

fn default_user_agent() -> String {
    format!("keyprint/{} ({}; {})", env!("CARGO_PKG_VERSION"), env::consts::OS, env::consts::ARCH)
}

fn default_platform() -> String {
    format!("{} {}", env::consts::OS, env::consts::ARCH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_parsing() {
        assert_eq!(parse_screen("1920x1080"), Some((1920, 1080)));
        assert_eq!(parse_screen(" 800 X 600 "), Some((800, 600)));
        assert_eq!(parse_screen("1920"), None);
        assert_eq!(parse_screen("axb"), None);
    }

    #[test]
    fn locale_to_language_tag() {
        assert_eq!(language_from_locale("es_MX.UTF-8").as_deref(), Some("es-MX"));
        assert_eq!(language_from_locale("de_DE@euro").as_deref(), Some("de-DE"));
        assert_eq!(language_from_locale("C.UTF-8"), None);
        assert_eq!(language_from_locale("POSIX"), None);
    }

    #[test]
    fn plugin_list_parsing() {
        assert_eq!(parse_list("PDF Viewer, Chrome PDF Viewer ,,"), vec!["PDF Viewer", "Chrome PDF Viewer"]);
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn overrides_replace_only_what_they_name() {
        let detected = HostProfile::detect();
        let overrides = ProfileOverrides { screen: Some((1280, 720)),
                                           color_scheme: Some(ColorScheme::Light),
                                           ..ProfileOverrides::default() };
        let p = detected.clone().with_overrides(&overrides);

        assert_eq!((p.screen_width, p.screen_height), (1280, 720));
        assert_eq!(p.color_scheme, ColorScheme::Light);
        assert_eq!(p.language, detected.language);
        assert_eq!(p.vendor, detected.vendor);
        assert!(!overrides.is_empty());
        assert_eq!(detected.clone().with_overrides(&ProfileOverrides::default()), detected);
    }

    #[test]
    fn timezone_offset_is_whole_minutes_within_a_day() {
        let offset = local_timezone_offset();
        assert!(offset.abs() <= 24 * 60);
    }
}
