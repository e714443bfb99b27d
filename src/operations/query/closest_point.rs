use crate::config::QueryConfig;
use crate::geometry::segment::Segment2;
use crate::math::distance_2d::ClosestPoint;
use crate::math::Point2;

/// Finds the closest point on a segment to a given point.
pub struct ClosestPointOnSegment<'a, S: Segment2 + ?Sized> {
    segment: &'a S,
    point: Point2,
    config: QueryConfig,
}

impl<'a, S: Segment2 + ?Sized> ClosestPointOnSegment<'a, S> {
    /// Creates a new `ClosestPointOnSegment` query with the default config.
    #[must_use]
    pub fn new(segment: &'a S, point: Point2) -> Self {
        Self {
            segment,
            point,
            config: QueryConfig::default(),
        }
    }

    /// Uses `config` instead of the default.
    #[must_use]
    pub fn with_config(mut self, config: QueryConfig) -> Self {
        self.config = config;
        self
    }

    /// Executes the query.
    ///
    /// Lines project and clamp; quadratics solve a cubic in closed form;
    /// cubics isolate candidates by Bézier clipping.
    #[must_use]
    pub fn execute(&self) -> ClosestPoint {
        self.segment.closest_point_with(&self.point, &self.config)
    }
}
