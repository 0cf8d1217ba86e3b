//! SVG surface used for chart export.

use std::fmt::Write as _;

use super::{Path, Point, Rgba, Surface};

/// Background behind exported charts (Tokyo Night).
const BG_COLOR: &str = "#1a1b26";

/// Title text color.
const TEXT_COLOR: &str = "#c0caf5";

/// Height reserved above the plot for the title.
const TITLE_HEIGHT: f64 = 28.0;

/// Surface that records drawing calls as SVG elements.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    title: Option<String>,
    elements: Vec<String>,
}

impl SvgSurface {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: None,
            elements: Vec::new(),
        }
    }

    /// Adds a title line above the plot.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[cfg(test)]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Renders a standalone SVG document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let offset = if self.title.is_some() { TITLE_HEIGHT } else { 0.0 };
        let total_height = self.height + offset;

        let mut svg = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">
<rect width="100%" height="100%" fill="{BG_COLOR}"/>
"#,
            w = fmt_num(self.width),
            h = fmt_num(total_height),
        );

        if let Some(title) = &self.title {
            let _ = writeln!(
                svg,
                r#"<text x="8" y="19" fill="{TEXT_COLOR}" font-family="monospace" font-size="14">{}</text>"#,
                escape_xml(title)
            );
        }

        let _ = writeln!(svg, r#"<g transform="translate(0 {})">"#, fmt_num(offset));
        for element in &self.elements {
            svg.push_str(element);
            svg.push('\n');
        }
        svg.push_str("</g>\n</svg>\n");
        svg
    }
}

impl Surface for SvgSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.elements.clear();
    }

    fn stroke_path(&mut self, path: &Path, color: Rgba, width: f64) {
        if path.is_empty() {
            return;
        }
        self.elements.push(format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}" stroke-linejoin="round"/>"#,
            path_data(path),
            color.hex(),
            fmt_num(color.opacity()),
            fmt_num(width)
        ));
    }

    fn fill_path(&mut self, path: &Path, color: Rgba) {
        if path.is_empty() {
            return;
        }
        self.elements.push(format!(
            r#"<path d="{}" fill="{}" fill-opacity="{}"/>"#,
            path_data(path),
            color.hex(),
            fmt_num(color.opacity())
        ));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.elements.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" fill-opacity="{}"/>"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(radius),
            color.hex(),
            fmt_num(color.opacity())
        ));
    }
}

fn path_data(path: &Path) -> String {
    let mut data = String::new();
    for subpath in path.subpaths() {
        for (index, point) in subpath.points.iter().enumerate() {
            let command = if index == 0 { 'M' } else { 'L' };
            if !data.is_empty() {
                data.push(' ');
            }
            let _ = write!(data, "{command}{} {}", fmt_num(point.x), fmt_num(point.y));
        }
        if subpath.closed {
            data.push_str(" Z");
        }
    }
    data
}

/// Formats a coordinate with at most two decimals and no trailing zeros.
fn fmt_num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
