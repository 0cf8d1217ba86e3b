//! Path construction for chart surfaces.

/// A point on a drawing surface, in surface units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One connected run of points started by [`Path::move_to`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubPath {
    pub points: Vec<Point>,
    pub closed: bool,
}

/// A sequence of sub-paths built with move-to / line-to commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    subpaths: Vec<SubPath>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new sub-path at `(x, y)`.
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.subpaths.push(SubPath {
            points: vec![Point::new(x, y)],
            closed: false,
        });
        self
    }

    /// Extends the current sub-path with a straight segment to `(x, y)`.
    ///
    /// Without a current sub-path this behaves like [`Path::move_to`].
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        match self.subpaths.last_mut() {
            Some(subpath) if !subpath.closed => subpath.points.push(Point::new(x, y)),
            _ => {
                self.move_to(x, y);
            }
        }
        self
    }

    /// Closes the current sub-path back to its first point.
    pub fn close(&mut self) -> &mut Self {
        if let Some(subpath) = self.subpaths.last_mut() {
            subpath.closed = true;
        }
        self
    }

    #[must_use]
    pub fn subpaths(&self) -> &[SubPath] {
        &self.subpaths
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    /// Straight segments of every sub-path, including closing segments.
    #[must_use]
    pub fn segments(&self) -> Vec<(Point, Point)> {
        let mut segments = Vec::new();
        for subpath in &self.subpaths {
            for pair in subpath.points.windows(2) {
                segments.push((pair[0], pair[1]));
            }
            if subpath.closed
                && let (Some(first), Some(last)) = (subpath.points.first(), subpath.points.last())
                && subpath.points.len() > 2
            {
                segments.push((*last, *first));
            }
        }
        segments
    }

    /// Edges used for filling: every sub-path is implicitly closed.
    #[must_use]
    pub fn fill_edges(&self) -> Vec<(Point, Point)> {
        let mut edges = Vec::new();
        for subpath in &self.subpaths {
            for pair in subpath.points.windows(2) {
                edges.push((pair[0], pair[1]));
            }
            if let (Some(first), Some(last)) = (subpath.points.first(), subpath.points.last())
                && subpath.points.len() > 2
            {
                edges.push((*last, *first));
            }
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_path_segments() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0).line_to(10.0, 0.0).line_to(10.0, 5.0);

        assert_eq!(path.segments().len(), 2);
        // Fill closes implicitly.
        assert_eq!(path.fill_edges().len(), 3);
    }

    #[test]
    fn test_closed_path_adds_closing_segment() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0)
            .line_to(10.0, 0.0)
            .line_to(10.0, 5.0)
            .close();

        let segments = path.segments();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[2], (Point::new(10.0, 5.0), Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_line_to_without_move_starts_subpath() {
        let mut path = Path::new();
        path.line_to(3.0, 4.0);
        assert_eq!(path.subpaths().len(), 1);
        assert!(path.segments().is_empty());
    }

    #[test]
    fn test_line_to_after_close_starts_new_subpath() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0).line_to(1.0, 1.0).close().line_to(2.0, 2.0);
        assert_eq!(path.subpaths().len(), 2);
    }
}
