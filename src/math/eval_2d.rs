//! Point evaluation for line, quadratic and cubic Bézier segments.
//!
//! None of these validate `t`; values outside `[0, 1]` extrapolate the
//! curve.

use super::Point2;

/// Linear interpolation: `begin + (end - begin) * t`.
#[must_use]
pub fn line_point(begin: &Point2, end: &Point2, t: f64) -> Point2 {
    begin + (end - begin) * t
}

/// Quadratic Bézier point: `begin*(1-t)² + ctrl*2t(1-t) + end*t²`.
#[must_use]
pub fn quadratic_point(begin: &Point2, ctrl: &Point2, end: &Point2, t: f64) -> Point2 {
    let mt = 1.0 - t;
    let f0 = mt * mt;
    let f1 = 2.0 * t * mt;
    let f2 = t * t;
    Point2::from(begin.coords * f0 + ctrl.coords * f1 + end.coords * f2)
}

/// Cubic Bézier point with Bernstein weights `(1-t)³, 3t(1-t)², 3t²(1-t), t³`.
#[must_use]
pub fn cubic_point(begin: &Point2, ctrl1: &Point2, ctrl2: &Point2, end: &Point2, t: f64) -> Point2 {
    let mt = 1.0 - t;
    let f0 = mt * mt * mt;
    let f1 = 3.0 * t * mt * mt;
    let f2 = 3.0 * t * t * mt;
    let f3 = t * t * t;
    Point2::from(begin.coords * f0 + ctrl1.coords * f1 + ctrl2.coords * f2 + end.coords * f3)
}
