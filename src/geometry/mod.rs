pub mod segment;

pub use segment::{CubicSegment, LineSegment, QuadraticSegment, Segment, Segment2};
