//! Polygonal paths built with canvas-style commands.

/// Number of line segments used to flatten one cubic bezier.
const BEZIER_STEPS: usize = 12;

/// A sequence of subpaths made of straight segments.
///
/// Curves are flattened as they are added, so a path is always a list of
/// polylines that [`Surface`](crate::Surface) can fill or stroke.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    subpaths: Vec<Subpath>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Subpath {
    pub(crate) points: Vec<(f64, f64)>,
    pub(crate) closed: bool,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new subpath at `(x, y)`.
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.subpaths.push(Subpath {
            points: vec![(x, y)],
            closed: false,
        });
        self
    }

    /// Add a straight segment. Starts a subpath if none is open.
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        if let Some(sub) = self.subpaths.last_mut().filter(|sub| !sub.closed) {
            sub.points.push((x, y));
            return self;
        }
        self.move_to(x, y)
    }

    /// Add a cubic bezier from the current point.
    pub fn bezier_curve_to(
        &mut self,
        c1: (f64, f64),
        c2: (f64, f64),
        end: (f64, f64),
    ) -> &mut Self {
        let Some(&start) = self.current_point() else {
            return self.move_to(end.0, end.1);
        };
        for step in 1..=BEZIER_STEPS {
            let t = step as f64 / BEZIER_STEPS as f64;
            let mt = 1.0 - t;
            let a = mt * mt * mt;
            let b = 3.0 * mt * mt * t;
            let c = 3.0 * mt * t * t;
            let d = t * t * t;
            let x = a * start.0 + b * c1.0 + c * c2.0 + d * end.0;
            let y = a * start.1 + b * c1.1 + c * c2.1 + d * end.1;
            self.line_to(x, y);
        }
        self
    }

    /// Close the current subpath back to its first point.
    pub fn close(&mut self) -> &mut Self {
        if let Some(sub) = self.subpaths.last_mut() {
            sub.closed = true;
        }
        self
    }

    /// Build a closed polygon from a point list.
    pub fn polygon(points: &[(f64, f64)]) -> Self {
        let mut path = Self::new();
        let mut iter = points.iter();
        if let Some(&(x, y)) = iter.next() {
            path.move_to(x, y);
            for &(x, y) in iter {
                path.line_to(x, y);
            }
            path.close();
        }
        path
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.iter().all(|sub| sub.points.len() < 2)
    }

    fn current_point(&self) -> Option<&(f64, f64)> {
        self.subpaths
            .last()
            .filter(|sub| !sub.closed)
            .and_then(|sub| sub.points.last())
    }

    pub(crate) fn subpaths(&self) -> &[Subpath] {
        &self.subpaths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_to_without_move_starts_subpath() {
        let mut path = Path::new();
        path.line_to(1.0, 1.0).line_to(2.0, 2.0);
        assert_eq!(path.subpaths().len(), 1);
        assert_eq!(path.subpaths()[0].points.len(), 2);
    }

    #[test]
    fn test_bezier_ends_at_endpoint() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0)
            .bezier_curve_to((0.0, 10.0), (10.0, 10.0), (10.0, 0.0));
        let last = *path.subpaths()[0].points.last().unwrap();
        assert!((last.0 - 10.0).abs() < 1e-9);
        assert!(last.1.abs() < 1e-9);
        assert_eq!(path.subpaths()[0].points.len(), BEZIER_STEPS + 1);
    }

    #[test]
    fn test_polygon_is_closed() {
        let path = Path::polygon(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)]);
        assert!(path.subpaths()[0].closed);
        assert!(!path.is_empty());
        assert!(Path::new().is_empty());
    }
}
