//! Half-block rendering of a [`RasterSurface`].
//!
//! Each terminal cell shows two vertically stacked pixels through the `▀`
//! glyph: the foreground is the top half, the background the bottom half.
//! Every half averages the block of surface pixels it covers and is
//! composited over an opaque background color.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    widgets::Widget,
};

use crate::chart::{RasterSurface, Rgba};

/// Upper half block.
const HALF_BLOCK: &str = "▀";

/// Widget drawing a raster surface scaled to its area.
#[derive(Debug, Clone, Copy)]
pub struct RasterImage<'a> {
    surface: &'a RasterSurface,
    background: (u8, u8, u8),
}

impl<'a> RasterImage<'a> {
    #[must_use]
    pub const fn new(surface: &'a RasterSurface) -> Self {
        Self {
            surface,
            background: (0, 0, 0),
        }
    }

    /// Color transparent pixels resolve to.
    #[must_use]
    pub const fn background(mut self, r: u8, g: u8, b: u8) -> Self {
        self.background = (r, g, b);
        self
    }

    /// Composites `color` over the background.
    fn flatten(&self, color: Rgba) -> Color {
        let alpha = u32::from(color.a);
        let mix = |fg: u8, bg: u8| -> u8 {
            let value = (u32::from(fg) * alpha + u32::from(bg) * (255 - alpha) + 127) / 255;
            value.min(255) as u8
        };
        let (r, g, b) = self.background;
        Color::Rgb(mix(color.r, r), mix(color.g, g), mix(color.b, b))
    }
}

/// Pixel span `[start, end)` covered by slot `index` of `slots` over `len`.
fn span(index: usize, slots: usize, len: usize) -> (usize, usize) {
    let start = index * len / slots;
    let end = ((index + 1) * len / slots).max(start + 1);
    (start, end)
}

impl Widget for RasterImage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        let columns = usize::from(area.width);
        let half_rows = usize::from(area.height) * 2;
        let (width, height) = (self.surface.width(), self.surface.height());

        for row in 0..area.height {
            let top = usize::from(row) * 2;
            let (y0, y1) = span(top, half_rows, height);
            let (y2, y3) = span(top + 1, half_rows, height);

            for column in 0..area.width {
                let (x0, x1) = span(usize::from(column), columns, width);
                let upper = self.flatten(self.surface.average(x0, y0, x1, y1));
                let lower = self.flatten(self.surface.average(x0, y2, x1, y3));

                buf[(area.x + column, area.y + row)]
                    .set_symbol(HALF_BLOCK)
                    .set_fg(upper)
                    .set_bg(lower);
            }
        }
    }
}
