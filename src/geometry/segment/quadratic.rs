use crate::config::QueryConfig;
use crate::math::distance_2d::{closest_on_quadratic, ClosestPoint};
use crate::math::eval_2d::quadratic_point;
use crate::math::Point2;

use super::Segment2;

/// A quadratic Bézier segment `begin, ctrl, end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticSegment {
    points: [Point2; 3],
}

impl QuadraticSegment {
    /// Creates a new quadratic segment.
    #[must_use]
    pub fn new(begin: Point2, ctrl: Point2, end: Point2) -> Self {
        Self {
            points: [begin, ctrl, end],
        }
    }

    /// Returns the control point.
    #[must_use]
    pub fn ctrl(&self) -> &Point2 {
        &self.points[1]
    }
}

impl Segment2 for QuadraticSegment {
    fn evaluate(&self, t: f64) -> Point2 {
        let [begin, ctrl, end] = &self.points;
        quadratic_point(begin, ctrl, end, t)
    }

    fn control_points(&self) -> &[Point2] {
        &self.points
    }

    fn closest_point_with(&self, query: &Point2, config: &QueryConfig) -> ClosestPoint {
        let [begin, ctrl, end] = &self.points;
        closest_on_quadratic(query, begin, ctrl, end, config)
    }
}
