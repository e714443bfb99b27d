pub mod bernstein;
pub mod distance_2d;
pub mod eval_2d;
pub mod roots;

pub use bernstein::{find_roots, ControlPolygon};
pub use roots::{solve_cubic, solve_quadratic, RootSet};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;
