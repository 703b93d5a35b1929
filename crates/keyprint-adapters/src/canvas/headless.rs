//! Superficie de software determinista.
//!
//! No rasteriza: registra cada operación en un log textual y la finalización
//! devuelve el SHA-256 de ese log. Dos hosts con la misma secuencia de
//! operaciones producen la misma muestra.

use sha2::{Digest, Sha256};

use super::surface::{FillStyle, Surface2d, SurfaceError, SurfaceFactory, TextBaseline};

const SUPPORTED_MIME: &str = "image/png";

#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    width: u32,
    height: u32,
    commands: Vec<String>,
}

impl HeadlessSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, commands: Vec::new() }
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    fn record(&mut self, command: String) {
        self.commands.push(command);
    }
}

impl Surface2d for HeadlessSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_fill_style(&mut self, style: FillStyle) {
        let cmd = match style {
            FillStyle::Color(c) => format!("fillStyle {c}"),
            FillStyle::Gradient(g) => {
                let stops: Vec<String> = g.stops.iter().map(|(o, c)| format!("{o}:{c}")).collect();
                format!("fillStyle linear({} {} {} {}) [{}]", g.x0, g.y0, g.x1, g.y1, stops.join(","))
            }
        };
        self.record(cmd);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.record(format!("strokeStyle {color}"));
    }

    fn set_line_width(&mut self, width: f64) {
        self.record(format!("lineWidth {width}"));
    }

    fn set_font(&mut self, font: &str) {
        self.record(format!("font {font}"));
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.record(format!("textBaseline {}", baseline.as_str()));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.record(format!("fillRect {x} {y} {w} {h}"));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.record(format!("fillText {text:?} {x} {y}"));
    }

    fn begin_path(&mut self) {
        self.record("beginPath".to_string());
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64, counter_clockwise: bool) {
        self.record(format!("arc {x} {y} {radius} {start_angle} {end_angle} {counter_clockwise}"));
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.record(format!("moveTo {x} {y}"));
    }

    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
        self.record(format!("bezierCurveTo {cp1x} {cp1y} {cp2x} {cp2y} {x} {y}"));
    }

    fn fill(&mut self) {
        self.record("fill".to_string());
    }

    fn stroke(&mut self) {
        self.record("stroke".to_string());
    }

    fn to_data_url(&self, mime: &str) -> Result<String, SurfaceError> {
        if mime != SUPPORTED_MIME {
            return Err(SurfaceError::UnsupportedFormat(mime.to_string()));
        }
        let mut hasher = Sha256::new();
        hasher.update(format!("{}x{}\n", self.width, self.height).as_bytes());
        for cmd in &self.commands {
            hasher.update(cmd.as_bytes());
            hasher.update(b"\n");
        }
        Ok(format!("data:{mime};trace-sha256,{:x}", hasher.finalize()))
    }
}

/// Fábrica de `HeadlessSurface`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessSurfaceFactory;

impl SurfaceFactory for HeadlessSurfaceFactory {
    fn create(&self, width: u32, height: u32) -> Option<Box<dyn Surface2d>> {
        Some(Box::new(HeadlessSurface::new(width, height)))
    }
}
