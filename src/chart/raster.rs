//! Software raster surface.
//!
//! A fixed-size RGBA pixel buffer implementing [`Surface`]. Coverage is
//! decided per pixel centre (no anti-aliasing) and colors are composited
//! with straight-alpha source-over blending, so output depends only on the
//! drawing calls since the last [`Surface::clear`].

use super::{Path, Point, Rgba, Surface};

/// RGBA pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterSurface {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl RasterSurface {
    /// Creates a cleared surface of `width` x `height` pixels.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; width * height],
        }
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the pixel at `(x, y)`, or transparent outside the surface.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x]
        } else {
            Rgba::TRANSPARENT
        }
    }

    /// Raw RGBA bytes, row-major.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| [p.r, p.g, p.b, p.a])
            .collect()
    }

    /// Averages the pixels of the half-open box `[x0, x1) x [y0, y1)`.
    ///
    /// Color channels are alpha-weighted so transparent pixels do not darken
    /// the result.
    #[must_use]
    pub fn average(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> Rgba {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return Rgba::TRANSPARENT;
        }

        let (mut r, mut g, mut b, mut a) = (0u64, 0u64, 0u64, 0u64);
        for y in y0..y1 {
            for pixel in &self.pixels[y * self.width + x0..y * self.width + x1] {
                let alpha = u64::from(pixel.a);
                r += u64::from(pixel.r) * alpha;
                g += u64::from(pixel.g) * alpha;
                b += u64::from(pixel.b) * alpha;
                a += alpha;
            }
        }
        if a == 0 {
            return Rgba::TRANSPARENT;
        }
        let count = ((x1 - x0) * (y1 - y0)) as u64;
        Rgba::new(
            div_round(r, a),
            div_round(g, a),
            div_round(b, a),
            div_round(a, count),
        )
    }

    /// Clamped pixel range covering `[min, max]` along an axis of `len`.
    fn pixel_range(min: f64, max: f64, len: usize) -> std::ops::Range<usize> {
        let start = min.floor().max(0.0) as usize;
        let end = (max.ceil().max(0.0) as usize).min(len);
        start.min(end)..end
    }

    fn blend(&mut self, x: usize, y: usize, color: Rgba) {
        let index = y * self.width + x;
        self.pixels[index] = source_over(color, self.pixels[index]);
    }
}

impl Surface for RasterSurface {
    fn size(&self) -> (f64, f64) {
        (self.width as f64, self.height as f64)
    }

    fn clear(&mut self) {
        self.pixels.fill(Rgba::TRANSPARENT);
    }

    fn stroke_path(&mut self, path: &Path, color: Rgba, width: f64) {
        let segments = path.segments();
        if segments.is_empty() || width <= 0.0 {
            return;
        }
        let half = width / 2.0;

        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for (a, b) in &segments {
            min_x = min_x.min(a.x).min(b.x);
            min_y = min_y.min(a.y).min(b.y);
            max_x = max_x.max(a.x).max(b.x);
            max_y = max_y.max(a.y).max(b.y);
        }

        for y in Self::pixel_range(min_y - half, max_y + half, self.height) {
            for x in Self::pixel_range(min_x - half, max_x + half, self.width) {
                let centre = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                let covered = segments
                    .iter()
                    .any(|(a, b)| distance_to_segment(centre, *a, *b) <= half);
                if covered {
                    self.blend(x, y, color);
                }
            }
        }
    }

    fn fill_path(&mut self, path: &Path, color: Rgba) {
        let edges = path.fill_edges();
        if edges.is_empty() {
            return;
        }

        let min_y = edges
            .iter()
            .map(|(a, b)| a.y.min(b.y))
            .fold(f64::INFINITY, f64::min);
        let max_y = edges
            .iter()
            .map(|(a, b)| a.y.max(b.y))
            .fold(f64::NEG_INFINITY, f64::max);

        let mut crossings: Vec<(f64, i32)> = Vec::new();
        for y in Self::pixel_range(min_y, max_y, self.height) {
            let scan_y = y as f64 + 0.5;
            crossings.clear();
            for (a, b) in &edges {
                let (upper, lower, direction) = if a.y < b.y { (a, b, 1) } else { (b, a, -1) };
                if upper.y <= scan_y && scan_y < lower.y {
                    let t = (scan_y - upper.y) / (lower.y - upper.y);
                    crossings.push((upper.x + t * (lower.x - upper.x), direction));
                }
            }
            crossings.sort_by(|l, r| l.0.total_cmp(&r.0));

            // Nonzero winding rule.
            let mut winding = 0;
            for pair in crossings.windows(2) {
                winding += pair[0].1;
                if winding == 0 {
                    continue;
                }
                let start = (pair[0].0 - 0.5).ceil().max(0.0) as usize;
                let end = ((pair[1].0 - 0.5).ceil().max(0.0) as usize).min(self.width);
                for x in start..end {
                    self.blend(x, y, color);
                }
            }
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        if radius <= 0.0 {
            return;
        }
        for y in Self::pixel_range(center.y - radius, center.y + radius, self.height) {
            for x in Self::pixel_range(center.x - radius, center.x + radius, self.width) {
                let dx = x as f64 + 0.5 - center.x;
                let dy = y as f64 + 0.5 - center.y;
                if dx * dx + dy * dy <= radius * radius {
                    self.blend(x, y, color);
                }
            }
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn div_round(numerator: u64, denominator: u64) -> u8 {
    ((numerator + denominator / 2) / denominator).min(255) as u8
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let length_sq = dx * dx + dy * dy;
    let t = if length_sq == 0.0 {
        0.0
    } else {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / length_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.x + t * dx, a.y + t * dy);
    ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt()
}

/// Straight-alpha source-over compositing.
fn source_over(src: Rgba, dst: Rgba) -> Rgba {
    let sa = src.opacity();
    let da = dst.opacity();
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba::TRANSPARENT;
    }
    let channel = |s: u8, d: u8| -> u8 {
        let value = (f64::from(s) * sa + f64::from(d) * da * (1.0 - sa)) / out_a;
        value.round().clamp(0.0, 255.0) as u8
    };
    Rgba::new(
        channel(src.r, dst.r),
        channel(src.g, dst.g),
        channel(src.b, dst.b),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{
        CHART_HEIGHT, CHART_WIDTH, FILL_COLOR, LINE_COLOR, draw_history_chart,
    };

    fn chart_surface() -> RasterSurface {
        RasterSurface::new(CHART_WIDTH, CHART_HEIGHT)
    }

    #[test]
    fn test_new_surface_is_transparent() {
        let surface = RasterSurface::new(4, 3);
        assert_eq!(surface.to_bytes(), vec![0; 4 * 3 * 4]);
        assert_eq!(surface.pixel(10, 10), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_redraw_is_byte_identical() {
        let values = [505.5, 505.5, 505.5, 505.5, 508.77, 505.5];
        let mut surface = chart_surface();

        draw_history_chart(&mut surface, &values);
        let first = surface.to_bytes();
        draw_history_chart(&mut surface, &values);
        draw_history_chart(&mut surface, &values);

        assert_eq!(surface.to_bytes(), first);
    }

    #[test]
    fn test_redraw_replaces_previous_chart() {
        let mut fresh = chart_surface();
        draw_history_chart(&mut fresh, &[1.0, 2.0, 3.0]);

        let mut reused = chart_surface();
        draw_history_chart(&mut reused, &[9.0, 1.0, 4.0, 4.0]);
        draw_history_chart(&mut reused, &[1.0, 2.0, 3.0]);

        assert_eq!(reused, fresh);
    }

    #[test]
    fn test_flat_series_draws_centred_line() {
        let mut surface = chart_surface();
        draw_history_chart(&mut surface, &[42.0; 6]);

        // Line of width 2 centred on y = 100.
        assert_eq!(surface.pixel(250, 99), LINE_COLOR);
        assert_eq!(surface.pixel(250, 100), LINE_COLOR);
        // Area below the line is filled, area above is empty.
        assert_eq!(surface.pixel(250, 150), FILL_COLOR);
        assert_eq!(surface.pixel(250, 50), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_markers_are_drawn_at_points() {
        let mut surface = chart_surface();
        draw_history_chart(&mut surface, &[42.0; 6]);

        // Marker at x = 100 extends 4px above the line.
        assert_eq!(surface.pixel(100, 97), LINE_COLOR);
        assert_eq!(surface.pixel(150, 97), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_fill_rectangle() {
        let mut surface = RasterSurface::new(10, 10);
        let mut path = Path::new();
        path.move_to(2.0, 2.0)
            .line_to(6.0, 2.0)
            .line_to(6.0, 5.0)
            .line_to(2.0, 5.0)
            .close();
        surface.fill_path(&path, Rgba::rgb(255, 0, 0));

        let filled = surface.to_bytes().chunks(4).filter(|px| px[3] == 255).count();
        assert_eq!(filled, 4 * 3);
        assert_eq!(surface.pixel(2, 2), Rgba::rgb(255, 0, 0));
        assert_eq!(surface.pixel(6, 2), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_source_over_blending() {
        let translucent = Rgba::new(0, 0, 255, 51);
        assert_eq!(source_over(translucent, Rgba::TRANSPARENT), translucent);
        assert_eq!(
            source_over(translucent, Rgba::rgb(0, 0, 255)),
            Rgba::rgb(0, 0, 255)
        );
        assert_eq!(
            source_over(Rgba::rgb(1, 2, 3), Rgba::rgb(200, 200, 200)),
            Rgba::rgb(1, 2, 3)
        );
    }

    #[test]
    fn test_average_weights_by_alpha() {
        let mut surface = RasterSurface::new(2, 1);
        surface.fill_circle(Point::new(0.5, 0.5), 0.5, Rgba::rgb(200, 100, 0));

        assert_eq!(surface.average(0, 0, 2, 1), Rgba::new(200, 100, 0, 128));
        assert_eq!(surface.average(1, 0, 2, 1), Rgba::TRANSPARENT);
        assert_eq!(surface.average(5, 5, 6, 6), Rgba::TRANSPARENT);
    }
}
