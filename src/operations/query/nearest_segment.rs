use tracing::trace;

use crate::config::QueryConfig;
use crate::geometry::segment::Segment2;
use crate::math::distance_2d::ClosestPoint;
use crate::math::Point2;

/// Picks the segment closest to a point among a list of segments.
///
/// Ties keep the earliest segment. With a tolerance set, segments farther
/// than the tolerance are ignored.
pub struct NearestSegment<'a, S: Segment2> {
    segments: &'a [S],
    point: Point2,
    tolerance: Option<f64>,
    config: QueryConfig,
}

impl<'a, S: Segment2> NearestSegment<'a, S> {
    /// Creates a new `NearestSegment` query with no tolerance.
    #[must_use]
    pub fn new(segments: &'a [S], point: Point2) -> Self {
        Self {
            segments,
            point,
            tolerance: None,
            config: QueryConfig::default(),
        }
    }

    /// Only accepts segments within `tolerance` (inclusive).
    #[must_use]
    pub fn within(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Uses `config` instead of the default.
    #[must_use]
    pub fn with_config(mut self, config: QueryConfig) -> Self {
        self.config = config;
        self
    }

    /// Executes the query, returning the index of the winning segment and
    /// its closest point.
    #[must_use]
    pub fn execute(&self) -> Option<(usize, ClosestPoint)> {
        let mut best: Option<(usize, ClosestPoint)> = None;
        for (index, segment) in self.segments.iter().enumerate() {
            let candidate = segment.closest_point_with(&self.point, &self.config);
            if self.tolerance.is_some_and(|tol| candidate.distance > tol) {
                continue;
            }
            match best {
                Some((_, current)) if current.distance <= candidate.distance => {}
                _ => best = Some((index, candidate)),
            }
        }
        if let Some((index, cp)) = &best {
            trace!(index, distance = cp.distance, "nearest segment");
        }
        best
    }
}
