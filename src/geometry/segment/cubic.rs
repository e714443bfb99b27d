use crate::config::QueryConfig;
use crate::math::distance_2d::{closest_on_cubic, ClosestPoint};
use crate::math::eval_2d::cubic_point;
use crate::math::Point2;

use super::Segment2;

/// A cubic Bézier segment `begin, ctrl1, ctrl2, end`.
///
/// Closest-point queries isolate the stationary points of the squared
/// distance with Bézier clipping, see [`crate::math::bernstein`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    points: [Point2; 4],
}

impl CubicSegment {
    /// Creates a new cubic segment.
    #[must_use]
    pub fn new(begin: Point2, ctrl1: Point2, ctrl2: Point2, end: Point2) -> Self {
        Self {
            points: [begin, ctrl1, ctrl2, end],
        }
    }

    /// Returns the two inner control points.
    #[must_use]
    pub fn ctrls(&self) -> (&Point2, &Point2) {
        (&self.points[1], &self.points[2])
    }
}

impl Segment2 for CubicSegment {
    fn evaluate(&self, t: f64) -> Point2 {
        let [begin, ctrl1, ctrl2, end] = &self.points;
        cubic_point(begin, ctrl1, ctrl2, end, t)
    }

    fn control_points(&self) -> &[Point2] {
        &self.points
    }

    fn closest_point_with(&self, query: &Point2, config: &QueryConfig) -> ClosestPoint {
        let [begin, ctrl1, ctrl2, end] = &self.points;
        closest_on_cubic(query, begin, ctrl1, ctrl2, end, config)
    }
}
