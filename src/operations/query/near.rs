use crate::config::QueryConfig;
use crate::geometry::segment::Segment2;
use crate::math::Point2;

/// Tests whether a point lies within a tolerance of a segment.
///
/// The comparison is inclusive: a point exactly `tolerance` away is near.
pub struct Near<'a, S: Segment2 + ?Sized> {
    segment: &'a S,
    point: Point2,
    tolerance: f64,
    config: QueryConfig,
}

impl<'a, S: Segment2 + ?Sized> Near<'a, S> {
    /// Creates a new `Near` query with the default config.
    #[must_use]
    pub fn new(segment: &'a S, point: Point2, tolerance: f64) -> Self {
        Self {
            segment,
            point,
            tolerance,
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
    #[must_use]
    pub fn execute(&self) -> bool {
        self.segment
            .closest_point_with(&self.point, &self.config)
            .distance
            <= self.tolerance
    }
}
