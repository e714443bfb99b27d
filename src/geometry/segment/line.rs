use crate::config::QueryConfig;
use crate::math::distance_2d::{closest_on_line, ClosestPoint};
use crate::math::eval_2d::line_point;
use crate::math::Point2;

use super::Segment2;

/// A straight segment from `begin` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    points: [Point2; 2],
}

impl LineSegment {
    /// Creates a new line segment.
    #[must_use]
    pub fn new(begin: Point2, end: Point2) -> Self {
        Self {
            points: [begin, end],
        }
    }

    /// Returns whether both endpoints coincide exactly.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.points[0] == self.points[1]
    }
}

impl Segment2 for LineSegment {
    fn evaluate(&self, t: f64) -> Point2 {
        line_point(&self.points[0], &self.points[1], t)
    }

    fn control_points(&self) -> &[Point2] {
        &self.points
    }

    fn closest_point_with(&self, query: &Point2, _config: &QueryConfig) -> ClosestPoint {
        closest_on_line(query, &self.points[0], &self.points[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn degenerate_line_is_point_distance() {
        let b = Point2::new(2.0, -1.0);
        let seg = LineSegment::new(b, b);
        assert!(seg.is_degenerate());
        let q = Point2::new(5.0, 3.0);
        assert_relative_eq!(seg.distance(&q), 5.0);
        assert_eq!(seg.distance(&q), nalgebra::distance(&q, &b));
    }

    #[test]
    fn closest_point_reports_projection() {
        let seg = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0));
        let cp = seg.closest_point(&Point2::new(1.0, -2.0));
        assert_relative_eq!(cp.parameter, 0.25);
        assert_eq!(cp.point, Point2::new(1.0, 0.0));
        assert_relative_eq!(cp.distance, 2.0);
    }
}
