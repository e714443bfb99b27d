use tracing::debug;

use super::bernstein::{cubic_distance_polygon, find_roots};
use super::eval_2d::{cubic_point, quadratic_point};
use super::roots::solve_cubic;
use super::Point2;
use crate::config::QueryConfig;

/// Best candidate found by a closest-point search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPoint {
    /// The point on the curve.
    pub point: Point2,
    /// The curve parameter that produced `point`.
    pub parameter: f64,
    /// Distance from the query point to `point`.
    pub distance: f64,
}

impl ClosestPoint {
    fn at(query: &Point2, point: Point2, parameter: f64) -> Self {
        Self {
            point,
            parameter,
            distance: nalgebra::distance(query, &point),
        }
    }

    /// Keeps `other` if it is strictly closer.
    fn keep_closer(&mut self, other: Self) {
        if other.distance < self.distance {
            *self = other;
        }
    }
}

/// Returns the distance between two points.
#[must_use]
pub fn point_to_point_dist(query: &Point2, pt: &Point2) -> f64 {
    nalgebra::distance(query, pt)
}

/// Closest point on the segment `begin → end`.
///
/// The projection parameter is clamped to the segment. A zero-length
/// segment (squared length exactly zero) answers with the nearer of its
/// coincident endpoints.
#[must_use]
pub fn closest_on_line(query: &Point2, begin: &Point2, end: &Point2) -> ClosestPoint {
    let delta = end - begin;
    let len_sq = delta.norm_squared();

    if len_sq > 0.0 {
        let ratio = (query - begin).dot(&delta) / len_sq;
        if ratio < 0.0 {
            ClosestPoint::at(query, *begin, 0.0)
        } else if ratio > 1.0 {
            ClosestPoint::at(query, *end, 1.0)
        } else {
            ClosestPoint::at(query, begin + delta * ratio, ratio)
        }
    } else {
        let from_begin = ClosestPoint::at(query, *begin, 0.0);
        let from_end = ClosestPoint::at(query, *end, 1.0);
        if from_begin.distance < from_end.distance {
            from_begin
        } else {
            from_end
        }
    }
}

/// Closest point on the quadratic Bézier `begin, ctrl, end`.
///
/// Stationary points of the squared distance are the real roots of
/// `|B|²t³ + 3(A·B)t² + (2|A|² + C·B)t + C·A` with `A = ctrl - begin`,
/// `B = begin - 2ctrl + end` and `C = begin - query`. Every root is
/// evaluated; without clamping, roots outside `[0, 1]` land on the curve's
/// extension.
#[must_use]
pub fn closest_on_quadratic(
    query: &Point2,
    begin: &Point2,
    ctrl: &Point2,
    end: &Point2,
    config: &QueryConfig,
) -> ClosestPoint {
    let a = ctrl - begin;
    let b = (begin - ctrl) + (end - ctrl);
    let c = begin - query;

    let roots = solve_cubic(
        b.norm_squared(),
        3.0 * a.dot(&b),
        2.0 * a.norm_squared() + c.dot(&b),
        c.dot(&a),
    );

    let from_begin = ClosestPoint::at(query, *begin, 0.0);
    let from_end = ClosestPoint::at(query, *end, 1.0);

    let Some((&first, rest)) = roots.split_first() else {
        debug!("no stationary point on quadratic, using endpoints");
        return if from_end.distance < from_begin.distance {
            from_end
        } else {
            from_begin
        };
    };

    let eval = |t: f64| {
        let t = if config.clamp_parameters {
            t.clamp(0.0, 1.0)
        } else {
            t
        };
        ClosestPoint::at(query, quadratic_point(begin, ctrl, end, t), t)
    };

    let mut best = eval(first);
    for &t in rest {
        best.keep_closer(eval(t));
    }
    if config.clamp_parameters {
        best.keep_closer(from_begin);
        best.keep_closer(from_end);
    }
    best
}

/// Closest point on the cubic Bézier `begin, ctrl1, ctrl2, end`.
///
/// Candidates are the roots of the degree-5 distance polynomial, isolated
/// by Bézier clipping, plus the end point. The start point joins the
/// candidates only when `config.clamp_parameters` is set.
#[must_use]
pub fn closest_on_cubic(
    query: &Point2,
    begin: &Point2,
    ctrl1: &Point2,
    ctrl2: &Point2,
    end: &Point2,
    config: &QueryConfig,
) -> ClosestPoint {
    let polygon = cubic_distance_polygon(begin, ctrl1, ctrl2, end, query);
    let roots = find_roots(&polygon, &config.clip);

    let mut best = ClosestPoint::at(query, *end, 1.0);
    for &t in &roots {
        let t = if config.clamp_parameters {
            t.clamp(0.0, 1.0)
        } else {
            t
        };
        best.keep_closer(ClosestPoint::at(
            query,
            cubic_point(begin, ctrl1, ctrl2, end, t),
            t,
        ));
    }
    if config.clamp_parameters {
        best.keep_closer(ClosestPoint::at(query, *begin, 0.0));
    }
    best
}

/// Returns the minimum distance from `query` to the segment `begin → end`.
#[must_use]
pub fn point_to_line_dist(query: &Point2, begin: &Point2, end: &Point2) -> f64 {
    closest_on_line(query, begin, end).distance
}

/// Returns the minimum distance from `query` to a quadratic Bézier.
#[must_use]
pub fn point_to_quadratic_dist(query: &Point2, begin: &Point2, ctrl: &Point2, end: &Point2) -> f64 {
    closest_on_quadratic(query, begin, ctrl, end, &QueryConfig::default()).distance
}

/// Returns the minimum distance from `query` to a cubic Bézier.
#[must_use]
pub fn point_to_cubic_dist(
    query: &Point2,
    begin: &Point2,
    ctrl1: &Point2,
    ctrl2: &Point2,
    end: &Point2,
) -> f64 {
    closest_on_cubic(query, begin, ctrl1, ctrl2, end, &QueryConfig::default()).distance
}

/// Returns whether `query` lies within `tolerance` of `pt` (inclusive).
#[must_use]
pub fn near_point(query: &Point2, pt: &Point2, tolerance: f64) -> bool {
    point_to_point_dist(query, pt) <= tolerance
}

/// Returns whether `query` lies within `tolerance` of the segment
/// `begin → end` (inclusive).
#[must_use]
pub fn near_line(query: &Point2, begin: &Point2, end: &Point2, tolerance: f64) -> bool {
    point_to_line_dist(query, begin, end) <= tolerance
}

/// Returns whether `query` lies within `tolerance` of a quadratic Bézier
/// (inclusive).
#[must_use]
pub fn near_quadratic(
    query: &Point2,
    begin: &Point2,
    ctrl: &Point2,
    end: &Point2,
    tolerance: f64,
) -> bool {
    point_to_quadratic_dist(query, begin, ctrl, end) <= tolerance
}

/// Returns whether `query` lies within `tolerance` of a cubic Bézier
/// (inclusive).
#[must_use]
pub fn near_cubic(
    query: &Point2,
    begin: &Point2,
    ctrl1: &Point2,
    ctrl2: &Point2,
    end: &Point2,
    tolerance: f64,
) -> bool {
    point_to_cubic_dist(query, begin, ctrl1, ctrl2, end) <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    // ── line ──

    #[test]
    fn line_dist_perpendicular_projection() {
        // Point (1, 1) to segment (0,0)→(2,0). Closest at (1,0), dist = 1.
        let cp = closest_on_line(&p(1.0, 1.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert!((cp.distance - 1.0).abs() < TOL, "d={}", cp.distance);
        assert_relative_eq!(cp.parameter, 0.5);
    }

    #[test]
    fn line_dist_uses_both_axes() {
        // Vertical segment: the projection depends on y alone.
        let d = point_to_line_dist(&p(3.0, 5.0), &p(0.0, 0.0), &p(0.0, 10.0));
        assert!((d - 3.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn line_dist_endpoint_closest() {
        let cp = closest_on_line(&p(-1.0, 0.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert!((cp.distance - 1.0).abs() < TOL);
        assert_eq!(cp.parameter, 0.0);
        let cp = closest_on_line(&p(5.0, 4.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert!((cp.distance - 5.0).abs() < TOL);
        assert_eq!(cp.parameter, 1.0);
    }

    #[test]
    fn line_dist_on_segment() {
        let d = point_to_line_dist(&p(1.0, 0.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert!(d.abs() < TOL, "d={d}");
    }

    #[test]
    fn line_dist_degenerate_is_point_distance() {
        for q in [p(3.0, 4.0), p(-1.5, 0.25), p(0.0, 0.0)] {
            let b = p(0.5, -0.5);
            assert_eq!(point_to_line_dist(&q, &b, &b), point_to_point_dist(&q, &b));
        }
    }

    // ── quadratic ──

    #[test]
    fn quadratic_apex_distance() {
        // (0,0) (1,2) (2,0) peaks at (1,1).
        let cp = closest_on_quadratic(
            &p(1.0, 3.0),
            &p(0.0, 0.0),
            &p(1.0, 2.0),
            &p(2.0, 0.0),
            &QueryConfig::default(),
        );
        assert_relative_eq!(cp.distance, 2.0, epsilon = 1e-9);
        assert_relative_eq!(cp.parameter, 0.5, epsilon = 1e-9);
        assert_relative_eq!(cp.point.x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(cp.point.y, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn quadratic_point_on_curve_is_zero() {
        let (a, c, b) = (p(0.0, 0.0), p(1.0, 2.0), p(2.0, 0.0));
        let on = quadratic_point(&a, &c, &b, 0.3);
        assert!(point_to_quadratic_dist(&on, &a, &c, &b) < 1e-8);
    }

    #[test]
    fn straight_quadratic_matches_line() {
        // Control at the midpoint: B = 0, the equation is linear.
        let d = point_to_quadratic_dist(&p(1.0, 2.0), &p(0.0, 0.0), &p(1.0, 0.0), &p(2.0, 0.0));
        assert_relative_eq!(d, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn coincident_quadratic_falls_back_to_endpoints() {
        let a = p(1.0, 1.0);
        let q = p(4.0, 5.0);
        let cp = closest_on_quadratic(&q, &a, &a, &a, &QueryConfig::default());
        assert_eq!(cp.distance, 5.0);
        assert_eq!(cp.parameter, 0.0);
    }

    #[test]
    fn quadratic_extension_root_is_evaluated_unclamped() {
        // Straight quadratic along the x axis; the query projects past the end.
        let (a, c, b) = (p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0));
        let q = p(3.0, 1.0);
        let open = closest_on_quadratic(&q, &a, &c, &b, &QueryConfig::default());
        assert_relative_eq!(open.parameter, 1.5, epsilon = 1e-12);
        assert_relative_eq!(open.distance, 1.0, epsilon = 1e-12);

        let bounded = closest_on_quadratic(&q, &a, &c, &b, &QueryConfig::clamped());
        assert_relative_eq!(bounded.parameter, 1.0);
        assert_relative_eq!(bounded.distance, 2.0_f64.sqrt(), epsilon = 1e-12);
        assert!(bounded.distance >= open.distance);
    }

    // ── cubic ──

    #[test]
    fn cubic_arch_apex() {
        let (a, c1, c2, b) = (p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0));
        let q = p(0.5, 0.5);
        let cp = closest_on_cubic(&q, &a, &c1, &c2, &b, &QueryConfig::default());

        assert_relative_eq!(cp.distance, 0.25, epsilon = 1e-9);
        assert!(cp.distance < point_to_point_dist(&q, &a));
        assert!(cp.distance < point_to_point_dist(&q, &b));

        let at_parameter = point_to_point_dist(&q, &cubic_point(&a, &c1, &c2, &b, cp.parameter));
        assert_relative_eq!(cp.distance, at_parameter, epsilon = 1e-12);
    }

    #[test]
    fn cubic_point_on_curve_is_zero() {
        let (a, c1, c2, b) = (p(0.0, 0.0), p(1.0, 3.0), p(3.0, -1.0), p(4.0, 2.0));
        for t in [0.2, 0.45, 0.8] {
            let on = cubic_point(&a, &c1, &c2, &b, t);
            let d = point_to_cubic_dist(&on, &a, &c1, &c2, &b);
            assert!(d < 1e-7, "t={t} d={d}");
        }
    }

    #[test]
    fn cubic_end_point_is_always_a_candidate() {
        let (a, c1, c2, b) = (p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0));
        let cp = closest_on_cubic(&p(4.0, 0.0), &a, &c1, &c2, &b, &QueryConfig::default());
        assert_relative_eq!(cp.distance, 1.0);
        assert_eq!(cp.parameter, 1.0);
    }

    #[test]
    fn cubic_start_point_needs_clamped_config() {
        // Beyond the start of a straight cubic the distance polynomial has no
        // root, so only the end point is a default candidate.
        let (a, c1, c2, b) = (p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0));
        let q = p(-1.0, 0.0);
        let open = closest_on_cubic(&q, &a, &c1, &c2, &b, &QueryConfig::default());
        assert_relative_eq!(open.distance, 4.0);

        let bounded = closest_on_cubic(&q, &a, &c1, &c2, &b, &QueryConfig::clamped());
        assert_relative_eq!(bounded.distance, 1.0);
        assert_eq!(bounded.parameter, 0.0);
    }

    // ── near ──

    #[test]
    fn near_is_inclusive() {
        let (a, b) = (p(0.0, 0.0), p(2.0, 0.0));
        assert!(near_line(&p(1.0, 1.0), &a, &b, 1.0));
        assert!(!near_line(&p(1.0, 1.0), &a, &b, 0.999));
        assert!(near_point(&p(3.0, 4.0), &a, 5.0));
        assert!(!near_point(&p(3.0, 4.0), &a, 4.999));
    }

    #[test]
    fn near_agrees_with_distance() {
        let (a, c1, c2, b) = (p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0));
        let queries = [p(0.5, 0.5), p(2.0, 2.0), p(-0.3, 0.1), p(0.5, 0.75)];
        for q in queries {
            let dq = point_to_quadratic_dist(&q, &a, &c1, &b);
            let dc = point_to_cubic_dist(&q, &a, &c1, &c2, &b);
            assert!(dq >= 0.0 && dc >= 0.0);
            for tol in [0.0, 0.1, 0.5, 1.0, 3.0] {
                assert_eq!(near_quadratic(&q, &a, &c1, &b, tol), dq <= tol);
                assert_eq!(near_cubic(&q, &a, &c1, &c2, &b, tol), dc <= tol);
            }
        }
    }

    #[test]
    fn repeated_queries_are_bit_identical() {
        let (a, c1, c2, b) = (p(0.1, 0.9), p(2.3, -1.4), p(-0.7, 3.3), p(4.4, 0.2));
        let q = p(1.7, 0.6);
        let first = closest_on_cubic(&q, &a, &c1, &c2, &b, &QueryConfig::default());
        let second = closest_on_cubic(&q, &a, &c1, &c2, &b, &QueryConfig::default());
        assert_eq!(first.distance.to_bits(), second.distance.to_bits());
        assert_eq!(first.parameter.to_bits(), second.parameter.to_bits());

        let first = point_to_quadratic_dist(&q, &a, &c1, &b);
        let second = point_to_quadratic_dist(&q, &a, &c1, &b);
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
