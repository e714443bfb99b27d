mod cubic;
mod line;
mod quadratic;

pub use cubic::CubicSegment;
pub use line::LineSegment;
pub use quadratic::QuadraticSegment;

use crate::config::QueryConfig;
use crate::error::{GeometryError, Result};
use crate::math::distance_2d::ClosestPoint;
use crate::math::Point2;

/// Trait for parametric 2D segments defined over `t ∈ [0, 1]`.
pub trait Segment2 {
    /// Evaluates the segment at parameter `t`. Values outside `[0, 1]`
    /// extrapolate.
    fn evaluate(&self, t: f64) -> Point2;

    /// Returns the control points, start point first.
    fn control_points(&self) -> &[Point2];

    /// Finds the best candidate point for `query` under `config`.
    fn closest_point_with(&self, query: &Point2, config: &QueryConfig) -> ClosestPoint;

    /// Returns the start point.
    fn start(&self) -> Point2 {
        self.control_points()[0]
    }

    /// Returns the end point.
    fn end(&self) -> Point2 {
        let points = self.control_points();
        points[points.len() - 1]
    }

    /// Finds the closest point with the default configuration.
    fn closest_point(&self, query: &Point2) -> ClosestPoint {
        self.closest_point_with(query, &QueryConfig::default())
    }

    /// Returns the minimum distance from `query` to the segment.
    fn distance(&self, query: &Point2) -> f64 {
        self.closest_point(query).distance
    }

    /// Returns whether `query` is within `tolerance` of the segment
    /// (inclusive).
    fn near(&self, query: &Point2, tolerance: f64) -> bool {
        self.distance(query) <= tolerance
    }
}

/// Any of the three segment kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line(LineSegment),
    Quadratic(QuadraticSegment),
    Cubic(CubicSegment),
}

impl Segment {
    /// Builds a segment from 2, 3 or 4 control points.
    ///
    /// # Errors
    ///
    /// Returns an error for any other number of points.
    pub fn from_points(points: &[Point2]) -> Result<Self> {
        match *points {
            [begin, end] => Ok(Self::Line(LineSegment::new(begin, end))),
            [begin, ctrl, end] => Ok(Self::Quadratic(QuadraticSegment::new(begin, ctrl, end))),
            [begin, ctrl1, ctrl2, end] => {
                Ok(Self::Cubic(CubicSegment::new(begin, ctrl1, ctrl2, end)))
            }
            _ => Err(GeometryError::InvalidControlPointCount {
                found: points.len(),
            }
            .into()),
        }
    }

    fn as_dyn(&self) -> &dyn Segment2 {
        match self {
            Self::Line(s) => s,
            Self::Quadratic(s) => s,
            Self::Cubic(s) => s,
        }
    }
}

impl Segment2 for Segment {
    fn evaluate(&self, t: f64) -> Point2 {
        self.as_dyn().evaluate(t)
    }

    fn control_points(&self) -> &[Point2] {
        self.as_dyn().control_points()
    }

    fn closest_point_with(&self, query: &Point2, config: &QueryConfig) -> ClosestPoint {
        self.as_dyn().closest_point_with(query, config)
    }
}

impl From<LineSegment> for Segment {
    fn from(s: LineSegment) -> Self {
        Self::Line(s)
    }
}

impl From<QuadraticSegment> for Segment {
    fn from(s: QuadraticSegment) -> Self {
        Self::Quadratic(s)
    }
}

impl From<CubicSegment> for Segment {
    fn from(s: CubicSegment) -> Self {
        Self::Cubic(s)
    }
}
