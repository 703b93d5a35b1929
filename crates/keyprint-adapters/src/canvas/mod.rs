//! Muestra visual basada en render.
//!
//! `CanvasSampler` crea una superficie privada por llamada, dibuja la escena
//! de referencia y la finaliza como data URL PNG. La superficie se descarta
//! antes de devolver. Cualquier fallo degrada a `""`.

mod headless;
mod surface;

use keyprint_core::VisualSampleSource;
use log::debug;

pub use headless::{HeadlessSurface, HeadlessSurfaceFactory};
pub use surface::{FillStyle, LinearGradient, Surface2d, SurfaceError, SurfaceFactory, TextBaseline};

pub const SURFACE_WIDTH: u32 = 300;
pub const SURFACE_HEIGHT: u32 = 150;
pub const SAMPLE_MIME: &str = "image/png";

const HEADING: &str = "IdentiqJS Canvas Fingerprint";
const EMOJI: &str = "\u{1F511}\u{1F446}";

/// Dibuja la escena de referencia. Texto, emoji, alpha, gradiente y curvas
/// varían con fuentes, drivers y GPU del host.
pub fn draw_reference_scene(ctx: &mut dyn Surface2d) {
    let (w, h) = (f64::from(ctx.width()), f64::from(ctx.height()));

    ctx.set_fill_style("#f8f8f8".into());
    ctx.fill_rect(0.0, 0.0, w, h);

    ctx.set_fill_style("#36c".into());
    ctx.set_font("18px Arial");
    ctx.set_text_baseline(TextBaseline::Top);
    ctx.fill_text(HEADING, 10.0, 10.0);

    ctx.begin_path();
    ctx.arc(50.0, 80.0, 25.0, 0.0, std::f64::consts::PI * 2.0, true);
    ctx.set_fill_style("rgba(255, 0, 0, 0.7)".into());
    ctx.fill();

    let gradient = LinearGradient::new(0.0, 0.0, w, 0.0).add_color_stop(0.0, "blue")
                                                        .add_color_stop(1.0, "green");
    ctx.set_fill_style(FillStyle::Gradient(gradient));
    ctx.fill_rect(100.0, 80.0, 150.0, 40.0);

    ctx.set_fill_style("#000".into());
    ctx.set_font("24px Arial");
    ctx.fill_text(EMOJI, 260.0, 120.0);

    ctx.begin_path();
    ctx.move_to(10.0, 140.0);
    ctx.bezier_curve_to(50.0, 100.0, 150.0, 120.0, 290.0, 140.0);
    ctx.set_stroke_style("purple");
    ctx.set_line_width(2.0);
    ctx.stroke();
}

/// `VisualSampleSource` sobre una `SurfaceFactory`.
#[derive(Debug, Clone, Default)]
pub struct CanvasSampler<F: SurfaceFactory> {
    factory: F,
}

impl<F: SurfaceFactory> CanvasSampler<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Igual que `sample` pero exponiendo el motivo del fallo.
    pub fn try_sample(&self) -> Result<String, SurfaceError> {
        let mut surface = self.factory
                              .create(SURFACE_WIDTH, SURFACE_HEIGHT)
                              .ok_or(SurfaceError::NoContext)?;
        draw_reference_scene(surface.as_mut());
        surface.to_data_url(SAMPLE_MIME)
    }
}

impl<F: SurfaceFactory> VisualSampleSource for CanvasSampler<F> {
    fn sample(&self) -> String {
        match self.try_sample() {
            Ok(url) => url,
            Err(err) => {
                debug!("canvas sample unavailable: {err}");
                String::new()
            }
        }
    }
}
