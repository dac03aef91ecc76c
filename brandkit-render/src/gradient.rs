use brandkit_core::Color;
use palette::{Mix, Srgba};

/// A color at a position along a gradient, `offset` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Srgba<f32>,
}

impl ColorStop {
    pub fn opaque(offset: f32, color: Color) -> Self {
        Self {
            offset,
            color: color.to_srgba(1.0),
        }
    }

    /// Stop with an explicit alpha byte, as in `#rrggbbaa`.
    pub fn with_alpha(offset: f32, color: Color, alpha: u8) -> Self {
        Self {
            offset,
            color: color.to_srgba(f32::from(alpha) / 255.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Geometry {
    Linear { start: (f32, f32), end: (f32, f32) },
    Radial { center: (f32, f32), radius: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    geometry: Geometry,
    stops: Vec<ColorStop>,
}

impl Gradient {
    pub fn linear(start: (f32, f32), end: (f32, f32), stops: impl IntoIterator<Item = ColorStop>) -> Self {
        Self::with_geometry(Geometry::Linear { start, end }, stops)
    }

    /// Radial gradient growing from a zero-radius circle at `center`.
    pub fn radial(center: (f32, f32), radius: f32, stops: impl IntoIterator<Item = ColorStop>) -> Self {
        Self::with_geometry(Geometry::Radial { center, radius }, stops)
    }

    fn with_geometry(geometry: Geometry, stops: impl IntoIterator<Item = ColorStop>) -> Self {
        let mut stops: Vec<ColorStop> = stops.into_iter().collect();
        stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        Self { geometry, stops }
    }

    /// Color at a point in surface coordinates.
    pub fn color_at(&self, x: f32, y: f32) -> Srgba<f32> {
        self.sample(self.position(x, y))
    }

    fn position(&self, x: f32, y: f32) -> f32 {
        match self.geometry {
            Geometry::Linear { start, end } => {
                let (dx, dy) = (end.0 - start.0, end.1 - start.1);
                let length_sq = dx * dx + dy * dy;
                if length_sq <= f32::EPSILON {
                    return 0.0;
                }
                ((x - start.0) * dx + (y - start.1) * dy) / length_sq
            }
            Geometry::Radial { center, radius } => {
                if radius <= f32::EPSILON {
                    return 1.0;
                }
                (x - center.0).hypot(y - center.1) / radius
            }
        }
    }

    /// Samples the stops at `t`, padding with the end colors outside them.
    /// Interpolation runs on premultiplied color so transparent stops do not
    /// darken their neighbors.
    pub fn sample(&self, t: f32) -> Srgba<f32> {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Srgba::new(0.0, 0.0, 0.0, 0.0),
        };

        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (from, to) = (&pair[0], &pair[1]);
            if t > to.offset {
                continue;
            }
            let span = to.offset - from.offset;
            if span <= f32::EPSILON {
                return to.color;
            }
            let factor = (t - from.offset) / span;
            return unpremultiply(premultiply(from.color).mix(premultiply(to.color), factor));
        }

        last.color
    }
}

fn premultiply(c: Srgba<f32>) -> Srgba<f32> {
    Srgba::new(c.red * c.alpha, c.green * c.alpha, c.blue * c.alpha, c.alpha)
}

fn unpremultiply(c: Srgba<f32>) -> Srgba<f32> {
    if c.alpha <= 0.0 {
        return Srgba::new(0.0, 0.0, 0.0, 0.0);
    }
    Srgba::new(c.red / c.alpha, c.green / c.alpha, c.blue / c.alpha, c.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    fn close(a: Srgba<f32>, b: Srgba<f32>) -> bool {
        let d = [a.red - b.red, a.green - b.green, a.blue - b.blue, a.alpha - b.alpha];
        d.iter().all(|v| v.abs() < 1e-4)
    }

    #[test]
    fn pads_outside_the_stops() {
        let g = Gradient::linear((0.0, 0.0), (100.0, 0.0), [ColorStop::opaque(0.2, RED), ColorStop::opaque(0.8, BLUE)]);
        assert!(close(g.sample(-1.0), RED.to_srgba(1.0)));
        assert!(close(g.sample(0.1), RED.to_srgba(1.0)));
        assert!(close(g.sample(0.9), BLUE.to_srgba(1.0)));
        assert!(close(g.sample(5.0), BLUE.to_srgba(1.0)));
    }

    #[test]
    fn interpolates_between_stops() {
        let g = Gradient::linear((0.0, 0.0), (100.0, 0.0), [ColorStop::opaque(0.0, RED), ColorStop::opaque(1.0, BLUE)]);
        let mid = g.color_at(50.0, 30.0);
        assert!(close(mid, Srgba::new(0.5, 0.0, 0.5, 1.0)));
    }

    #[test]
    fn unsorted_stops_are_ordered() {
        let g = Gradient::linear((0.0, 0.0), (1.0, 0.0), [ColorStop::opaque(1.0, BLUE), ColorStop::opaque(0.0, RED)]);
        assert!(close(g.sample(0.0), RED.to_srgba(1.0)));
    }

    #[test]
    fn transparent_stop_does_not_darken() {
        let clear = ColorStop::with_alpha(0.0, Color::rgb(0, 0, 0), 0);
        let g = Gradient::linear((0.0, 0.0), (1.0, 0.0), [clear, ColorStop::opaque(1.0, RED)]);
        assert!(close(g.sample(0.5), Srgba::new(1.0, 0.0, 0.0, 0.5)));
    }

    #[test]
    fn radial_position_is_distance_over_radius() {
        let g = Gradient::radial((50.0, 50.0), 100.0, [ColorStop::opaque(0.0, RED), ColorStop::opaque(1.0, BLUE)]);
        assert!(close(g.color_at(50.0, 50.0), RED.to_srgba(1.0)));
        assert!(close(g.color_at(150.0, 50.0), BLUE.to_srgba(1.0)));
        assert!(close(g.color_at(50.0, 100.0), Srgba::new(0.5, 0.0, 0.5, 1.0)));
    }

    #[test]
    fn alpha_byte_maps_to_fraction() {
        let stop = ColorStop::with_alpha(0.7, RED, 0x20);
        assert!((stop.color.alpha - 32.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn no_stops_is_transparent() {
        let g = Gradient::linear((0.0, 0.0), (1.0, 0.0), Vec::<ColorStop>::new());
        assert_eq!(g.sample(0.5).alpha, 0.0);
    }
}
