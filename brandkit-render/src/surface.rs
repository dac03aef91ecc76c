use crate::error::RenderError;
use crate::gradient::Gradient;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};
use palette::Srgba;

/// Largest edge a surface may have.
pub const MAX_DIMENSION: u32 = 16_384;

/// An RGBA raster that drawing operations composite onto (source-over).
///
/// A surface is reused between renders, so every render must start with
/// [`Surface::reset`], which resizes it and clears it to transparent.
#[derive(Debug, Clone)]
pub struct Surface {
    pixels: RgbaImage,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            pixels: RgbaImage::new(0, 0),
        }
    }
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let mut surface = Self::default();
        surface.reset(width, height)?;
        Ok(surface)
    }

    pub fn reset(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(RenderError::SurfaceAllocation { width, height });
        }

        if self.pixels.dimensions() == (width, height) {
            for pixel in self.pixels.pixels_mut() {
                *pixel = Rgba([0, 0, 0, 0]);
            }
        } else {
            self.pixels = RgbaImage::new(width, height);
        }
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Paints the whole surface with a gradient sampled at pixel centers.
    pub fn fill_gradient(&mut self, gradient: &Gradient) {
        for (x, y, pixel) in self.pixels.enumerate_pixels_mut() {
            composite(pixel, gradient.color_at(x as f32 + 0.5, y as f32 + 0.5));
        }
    }

    /// Fills an anti-aliased circle.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Srgba<f32>) {
        let reach = radius + 1.0;
        let Some((x0, x1, y0, y1)) = self.clip(cx - reach, cx + reach, cy - reach, cy + reach) else {
            return;
        };

        for y in y0..y1 {
            for x in x0..x1 {
                let d = (x as f32 + 0.5 - cx).hypot(y as f32 + 0.5 - cy);
                let coverage = (radius + 0.5 - d).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    composite(self.pixels.get_pixel_mut(x, y), scale_alpha(color, coverage));
                }
            }
        }
    }

    /// Strokes an anti-aliased straight segment of the given width.
    pub fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Srgba<f32>) {
        let half = width / 2.0;
        let reach = half + 1.0;
        let Some((x0, x1, y0, y1)) = self.clip(
            from.0.min(to.0) - reach,
            from.0.max(to.0) + reach,
            from.1.min(to.1) - reach,
            from.1.max(to.1) + reach,
        ) else {
            return;
        };

        for y in y0..y1 {
            for x in x0..x1 {
                let d = distance_to_segment((x as f32 + 0.5, y as f32 + 0.5), from, to);
                let coverage = (half + 0.5 - d).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    composite(self.pixels.get_pixel_mut(x, y), scale_alpha(color, coverage));
                }
            }
        }
    }

    /// Composites `image` with its top-left corner at `(x, y)`.
    pub fn draw_image(&mut self, image: &RgbaImage, x: i64, y: i64, opacity: f32) {
        let (width, height) = (i64::from(self.width()), i64::from(self.height()));
        for (sx, sy, src) in image.enumerate_pixels() {
            let (dx, dy) = (x + i64::from(sx), y + i64::from(sy));
            if dx < 0 || dy < 0 || dx >= width || dy >= height {
                continue;
            }
            let color = Srgba::new(
                f32::from(src[0]) / 255.0,
                f32::from(src[1]) / 255.0,
                f32::from(src[2]) / 255.0,
                f32::from(src[3]) / 255.0 * opacity,
            );
            composite(self.pixels.get_pixel_mut(dx as u32, dy as u32), color);
        }
    }

    /// Encodes the current contents as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes).write_image(
            self.pixels.as_raw(),
            self.width(),
            self.height(),
            ExtendedColorType::Rgba8,
        )?;
        Ok(bytes)
    }

    /// Intersects a float bounding box with the surface, as half-open pixel ranges.
    fn clip(&self, left: f32, right: f32, top: f32, bottom: f32) -> Option<(u32, u32, u32, u32)> {
        let x0 = left.floor().max(0.0) as u32;
        let y0 = top.floor().max(0.0) as u32;
        let x1 = (right.ceil().max(0.0) as u32).min(self.width());
        let y1 = (bottom.ceil().max(0.0) as u32).min(self.height());
        (x0 < x1 && y0 < y1).then_some((x0, x1, y0, y1))
    }
}

fn scale_alpha(color: Srgba<f32>, factor: f32) -> Srgba<f32> {
    Srgba::new(color.red, color.green, color.blue, color.alpha * factor)
}

fn distance_to_segment(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let length_sq = dx * dx + dy * dy;
    let t = if length_sq <= f32::EPSILON {
        0.0
    } else {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / length_sq).clamp(0.0, 1.0)
    };
    (p.0 - (a.0 + t * dx)).hypot(p.1 - (a.1 + t * dy))
}

/// Source-over in straight alpha.
fn composite(dst: &mut Rgba<u8>, src: Srgba<f32>) {
    let sa = src.alpha.clamp(0.0, 1.0);
    if sa <= 0.0 {
        return;
    }
    let da = f32::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    let channel = |s: f32, d: u8| {
        let d = f32::from(d) / 255.0;
        to_byte((s * sa + d * da * (1.0 - sa)) / out_a)
    };

    *dst = Rgba([
        channel(src.red, dst[0]),
        channel(src.green, dst[1]),
        channel(src.blue, dst[2]),
        to_byte(out_a),
    ]);
}

fn to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
