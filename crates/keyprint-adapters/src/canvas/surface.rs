//! Abstracción mínima de una superficie de dibujo 2D.
//!
//! Sigue la forma de un contexto 2D de canvas: el estado (estilos, fuente)
//! se fija con setters y las operaciones de dibujo no fallan. Sólo la
//! finalización (`to_data_url`) puede fallar.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("drawing context unavailable")]
    NoContext,
    #[error("security error: {0}")]
    Security(String),
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Alphabetic,
    Bottom,
}

impl TextBaseline {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextBaseline::Top => "top",
            TextBaseline::Middle => "middle",
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Bottom => "bottom",
        }
    }
}

/// Gradiente lineal entre (x0, y0) y (x1, y1).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub stops: Vec<(f64, String)>,
}

impl LinearGradient {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1, stops: Vec::new() }
    }

    pub fn add_color_stop(mut self, offset: f64, color: impl Into<String>) -> Self {
        self.stops.push((offset, color.into()));
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FillStyle {
    Color(String),
    Gradient(LinearGradient),
}

impl From<&str> for FillStyle {
    fn from(color: &str) -> Self {
        FillStyle::Color(color.to_string())
    }
}

pub trait Surface2d {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn set_fill_style(&mut self, style: FillStyle);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &str);
    fn set_text_baseline(&mut self, baseline: TextBaseline);

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
    fn begin_path(&mut self);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64, counter_clockwise: bool);
    fn move_to(&mut self, x: f64, y: f64);
    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64);
    fn fill(&mut self);
    fn stroke(&mut self);

    /// Finaliza la superficie como data URL del formato pedido.
    fn to_data_url(&self, mime: &str) -> Result<String, SurfaceError>;
}

/// Crea superficies privadas (no visibles) por llamada.
pub trait SurfaceFactory: Send + Sync {
    /// `None` si el host no puede entregar un contexto de dibujo.
    fn create(&self, width: u32, height: u32) -> Option<Box<dyn Surface2d>>;
}
