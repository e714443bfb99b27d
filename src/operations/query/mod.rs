mod closest_point;
mod near;
mod nearest_segment;

pub use closest_point::ClosestPointOnSegment;
pub use near::Near;
pub use nearest_segment::NearestSegment;

pub use crate::math::distance_2d::ClosestPoint as ClosestPointResult;
