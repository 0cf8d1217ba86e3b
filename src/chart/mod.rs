//! Line/area chart of a rate history.
//!
//! The chart is drawn through the small immediate-mode [`Surface`] API so the
//! same routine feeds the terminal raster ([`RasterSurface`]) and the SVG
//! export ([`SvgSurface`]).
//!
//! # Geometry
//!
//! Values are placed left to right in chronological order. The vertical
//! range is padded by one unit on both ends (`min - 1 ..= max + 1`), so the
//! span is at least 2 and extremes never touch the surface edge.

pub mod path;
pub mod raster;
pub mod svg;

pub use path::{Path, Point};
pub use raster::RasterSurface;
pub use svg::SvgSurface;

// ============================================================================
// Constants
// ============================================================================

/// Logical width of the chart surface.
pub const CHART_WIDTH: usize = 500;

/// Logical height of the chart surface.
pub const CHART_HEIGHT: usize = 200;

/// Line and marker color (`#3b82f6`).
pub const LINE_COLOR: Rgba = Rgba::rgb(59, 130, 246);

/// Area fill color (`rgba(59, 130, 246, 0.2)`).
pub const FILL_COLOR: Rgba = Rgba::new(59, 130, 246, 51);

/// Stroke width of the line.
pub const LINE_WIDTH: f64 = 2.0;

/// Radius of the point markers.
pub const MARKER_RADIUS: f64 = 4.0;

/// Padding added below the minimum and above the maximum value.
const VALUE_PADDING: f64 = 1.0;

// ============================================================================
// Color
// ============================================================================

/// Straight (non-premultiplied) RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, the cleared surface color.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Hex notation without alpha (`#3b82f6`).
    #[must_use]
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a fraction in `0.0..=1.0`.
    #[must_use]
    pub fn opacity(self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

// ============================================================================
// Surface
// ============================================================================

/// Minimal 2D immediate-mode drawing API required by the chart.
pub trait Surface {
    /// Surface dimensions `(width, height)` in surface units.
    fn size(&self) -> (f64, f64);

    /// Clears the whole surface to transparent.
    fn clear(&mut self);

    /// Strokes every segment of `path` with `color` at `width`.
    fn stroke_path(&mut self, path: &Path, color: Rgba, width: f64);

    /// Fills the area enclosed by `path` with `color`.
    fn fill_path(&mut self, path: &Path, color: Rgba);

    /// Fills a circle centred on `center`.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);
}

// ============================================================================
// Chart Drawing
// ============================================================================

/// Maps chronological values to surface coordinates.
///
/// Returns an empty vector for empty input. A single value is placed at
/// `x = 0`.
#[must_use]
pub fn chart_points(values: &[f64], width: f64, height: f64) -> Vec<Point> {
    let Some(min) = values.iter().copied().reduce(f64::min) else {
        return Vec::new();
    };
    let max = values.iter().copied().fold(min, f64::max);
    let min = min - VALUE_PADDING;
    let max = max + VALUE_PADDING;
    let span = max - min;
    let steps = values.len().saturating_sub(1).max(1) as f64;

    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let x = index as f64 / steps * width;
            let y = height - (value - min) / span * height;
            Point::new(x, y)
        })
        .collect()
}

/// Draws the line/area chart of `values` (oldest first) onto `surface`.
///
/// The surface is cleared first, so redrawing the same values produces the
/// same output.
pub fn draw_history_chart<S: Surface + ?Sized>(surface: &mut S, values: &[f64]) {
    surface.clear();

    let (width, height) = surface.size();
    let points = chart_points(values, width, height);
    let Some((first, rest)) = points.split_first() else {
        return;
    };

    let mut path = Path::new();
    path.move_to(first.x, first.y);
    for point in rest {
        path.line_to(point.x, point.y);
    }
    surface.stroke_path(&path, LINE_COLOR, LINE_WIDTH);

    path.line_to(width, height).line_to(0.0, height).close();
    surface.fill_path(&path, FILL_COLOR);

    for point in &points {
        surface.fill_circle(*point, MARKER_RADIUS, LINE_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records drawing calls for assertions.
    #[derive(Debug, Default)]
    struct RecordingSurface {
        calls: Vec<String>,
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> (f64, f64) {
            (500.0, 200.0)
        }

        fn clear(&mut self) {
            self.calls.push("clear".to_string());
        }

        fn stroke_path(&mut self, path: &Path, color: Rgba, width: f64) {
            self.calls.push(format!(
                "stroke {} segments {} {width}",
                path.segments().len(),
                color.hex()
            ));
        }

        fn fill_path(&mut self, path: &Path, color: Rgba) {
            self.calls
                .push(format!("fill {} edges a={}", path.fill_edges().len(), color.a));
        }

        fn fill_circle(&mut self, center: Point, radius: f64, _color: Rgba) {
            self.calls
                .push(format!("dot {:.1},{:.1} r={radius}", center.x, center.y));
        }
    }

    #[test]
    fn test_chart_points_span_full_width() {
        let points = chart_points(&[1.0, 2.0, 3.0], 500.0, 200.0);
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 250.0, 500.0]);
    }

    #[test]
    fn test_chart_points_pad_extremes() {
        // min - 1 = 0, max + 1 = 4
        let points = chart_points(&[1.0, 3.0], 500.0, 200.0);
        assert_eq!(points[0].y, 150.0);
        assert_eq!(points[1].y, 50.0);
    }

    #[test]
    fn test_flat_series_is_centred() {
        let points = chart_points(&[505.5; 6], 500.0, 200.0);
        assert!(points.iter().all(|p| p.y == 100.0));
        assert!(points.iter().all(|p| p.y.is_finite()));
    }

    #[test]
    fn test_empty_and_single_value() {
        assert!(chart_points(&[], 500.0, 200.0).is_empty());
        let single = chart_points(&[7.0], 500.0, 200.0);
        assert_eq!(single, vec![Point::new(0.0, 100.0)]);
    }

    #[test]
    fn test_draw_call_sequence() {
        let mut surface = RecordingSurface::default();
        draw_history_chart(&mut surface, &[1.0, 3.0]);

        assert_eq!(
            surface.calls,
            vec![
                "clear",
                "stroke 1 segments #3b82f6 2",
                "fill 4 edges a=51",
                "dot 0.0,150.0 r=4",
                "dot 500.0,50.0 r=4",
            ]
        );
    }

    #[test]
    fn test_draw_empty_only_clears() {
        let mut surface = RecordingSurface::default();
        draw_history_chart(&mut surface, &[]);
        assert_eq!(surface.calls, vec!["clear"]);
    }

    #[test]
    fn test_color_helpers() {
        assert_eq!(LINE_COLOR.hex(), "#3b82f6");
        assert!((FILL_COLOR.opacity() - 0.2).abs() < 1e-9);
    }
}
