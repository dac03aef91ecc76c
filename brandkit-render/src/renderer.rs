use crate::error::RenderError;
use crate::gradient::{ColorStop, Gradient};
use crate::logo::Logo;
use crate::surface::Surface;
use brandkit_core::{Color, Palette};
use image::imageops::{self, FilterType};
use std::fmt;

const DOT_SPACING: usize = 50;
const DOT_RADIUS: f32 = 20.0;
const DOT_OPACITY: f32 = 0.1;

const LINE_SPACING: usize = 100;
const LINE_SLANT: f32 = 50.0;
const LINE_OPACITY: f32 = 0.05;
const LINE_WIDTH: f32 = 1.0;

const LOGO_MARGIN: f32 = 40.0;
const LOGO_OPACITY: f32 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Banner,
    Background,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderSpec {
    pub width: u32,
    pub height: u32,
    pub theme: Theme,
}

impl RenderSpec {
    pub const fn new(width: u32, height: u32, theme: Theme) -> Self {
        Self { width, height, theme }
    }
}

/// A rendered PNG.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Draws branding images onto a single reusable surface.
#[derive(Debug, Default)]
pub struct Renderer {
    surface: Surface,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        kind: AssetKind,
        spec: RenderSpec,
        palette: &Palette,
        logo: Option<&Logo>,
    ) -> Result<EncodedImage, RenderError> {
        self.surface.reset(spec.width, spec.height)?;

        match kind {
            AssetKind::Banner => paint_banner(&mut self.surface, spec.theme, palette, logo),
            AssetKind::Background => paint_background(&mut self.surface, spec.theme, palette),
        }

        let bytes = self.surface.encode_png()?;
        log::debug!(
            "rendered {:?} {}x{} ({}) into {} bytes",
            kind,
            spec.width,
            spec.height,
            spec.theme,
            bytes.len()
        );

        Ok(EncodedImage {
            width: spec.width,
            height: spec.height,
            bytes,
        })
    }

    /// The surface as left by the last render.
    #[cfg(test)]
    pub(crate) fn surface(&self) -> &Surface {
        &self.surface
    }
}

fn paint_banner(surface: &mut Surface, theme: Theme, palette: &Palette, logo: Option<&Logo>) {
    let (width, height) = (surface.width() as f32, surface.height() as f32);

    // Corner to corner, so the colors shift down the banner as well as across it.
    surface.fill_gradient(&Gradient::linear((0.0, 0.0), (width, height), banner_stops(theme, palette)));

    let dot = match theme {
        Theme::Light => Color::rgb(0xff, 0xff, 0xff),
        Theme::Dark => Color::rgb(0x00, 0x00, 0x00),
    }
    .to_srgba(DOT_OPACITY);
    for x in (0..surface.width()).step_by(DOT_SPACING) {
        for y in (0..surface.height()).step_by(DOT_SPACING) {
            surface.fill_circle(x as f32, y as f32, DOT_RADIUS, dot);
        }
    }

    if let Some(logo) = logo {
        let size = (width * 0.2).min(height * 0.6);
        let x = width - size - LOGO_MARGIN;
        let y = (height - size) / 2.0;
        let side = size.round().max(1.0) as u32;

        let scaled = imageops::resize(logo.image(), side, side, FilterType::Triangle);
        surface.draw_image(&scaled, x.round() as i64, y.round() as i64, LOGO_OPACITY);
    }
}

fn banner_stops(theme: Theme, palette: &Palette) -> [ColorStop; 3] {
    match theme {
        Theme::Light => [
            ColorStop::opaque(0.0, palette.primary),
            ColorStop::opaque(0.5, palette.secondary),
            ColorStop::opaque(1.0, palette.primary_light),
        ],
        Theme::Dark => [
            ColorStop::opaque(0.0, palette.primary_dark),
            ColorStop::opaque(0.5, palette.primary),
            ColorStop::opaque(1.0, palette.secondary),
        ],
    }
}

/// Radial wash centered on the surface. The radius is the longer edge, so
/// the outermost stop lies past every corner and only shapes the falloff.
fn background_gradient(theme: Theme, palette: &Palette, width: f32, height: f32) -> Gradient {
    let stops = match theme {
        Theme::Light => [
            ColorStop::opaque(0.0, palette.background),
            ColorStop::with_alpha(0.7, palette.primary_light, 0x20),
            ColorStop::with_alpha(1.0, palette.primary, 0x10),
        ],
        Theme::Dark => [
            ColorStop::opaque(0.0, palette.background_dark),
            ColorStop::with_alpha(0.7, palette.primary, 0x30),
            ColorStop::with_alpha(1.0, palette.primary_dark, 0x20),
        ],
    };
    Gradient::radial((width / 2.0, height / 2.0), width.max(height), stops)
}

fn line_color(theme: Theme, palette: &Palette) -> Color {
    match theme {
        Theme::Light => palette.primary,
        Theme::Dark => palette.primary_light,
    }
}

fn paint_background(surface: &mut Surface, theme: Theme, palette: &Palette) {
    let (width, height) = (surface.width() as f32, surface.height() as f32);
    surface.fill_gradient(&background_gradient(theme, palette, width, height));

    let stroke = line_color(theme, palette).to_srgba(LINE_OPACITY);
    for x in (0..surface.width()).step_by(LINE_SPACING) {
        let x = x as f32;
        surface.stroke_line((x, 0.0), (x + LINE_SLANT, height), LINE_WIDTH, stroke);
    }
    for y in (0..surface.height()).step_by(LINE_SPACING) {
        let y = y as f32;
        surface.stroke_line((0.0, y), (width, y + LINE_SLANT), LINE_WIDTH, stroke);
    }
}
