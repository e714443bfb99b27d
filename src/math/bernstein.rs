//! Degree-5 Bernstein polynomials and Bézier-clipping root isolation.
//!
//! The closest point on a cubic Bézier to a query point is where
//! `(B(t) - P) · B'(t)` vanishes. That product is a degree-5 polynomial;
//! here it is kept in Bernstein form as a control polygon of six
//! `(t, value)` points and its roots are isolated by sign-change counting
//! and de Casteljau bisection.

use tracing::trace;

use super::roots::RootSet;
use super::Point2;
use crate::config::ClipParams;

/// Degree of the distance polynomial for cubic segments.
pub const DEGREE: usize = 5;

/// Control polygon of a degree-5 Bernstein polynomial.
///
/// `x` holds the parameter abscissa, `y` the Bernstein coefficient.
pub type ControlPolygon = [Point2; DEGREE + 1];

/// Weights combining `D[i] · C[j]` products into Bernstein coefficients:
/// `C(3,j) * C(2,i) / C(5,i+j)`.
const PRODUCT_WEIGHTS: [[f64; 4]; 3] = [
    [1.0, 0.6, 0.3, 0.1],
    [0.4, 0.6, 0.6, 0.4],
    [0.1, 0.3, 0.6, 1.0],
];

/// Builds the control polygon of `(B(t) - query) · B'(t)` for the cubic
/// `begin, ctrl1, ctrl2, end`.
#[must_use]
pub fn cubic_distance_polygon(
    begin: &Point2,
    ctrl1: &Point2,
    ctrl2: &Point2,
    end: &Point2,
    query: &Point2,
) -> ControlPolygon {
    let to_query = [begin - query, ctrl1 - query, ctrl2 - query, end - query];
    let derivative = [
        (ctrl1 - begin) * 3.0,
        (ctrl2 - ctrl1) * 3.0,
        (end - ctrl2) * 3.0,
    ];

    let mut products = [[0.0; 4]; 3];
    for (i, d) in derivative.iter().enumerate() {
        for (j, c) in to_query.iter().enumerate() {
            products[i][j] = d.dot(c);
        }
    }

    let mut polygon = [Point2::origin(); DEGREE + 1];
    for (k, w) in polygon.iter_mut().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let x = k as f64 / DEGREE as f64;
        let lo = k.saturating_sub(2);
        let hi = k.min(3);
        let y: f64 = (lo..=hi)
            .map(|j| products[k - j][j] * PRODUCT_WEIGHTS[k - j][j])
            .sum();
        *w = Point2::new(x, y);
    }
    polygon
}

/// Counts sign changes along the control values, treating zero as
/// non-negative.
#[must_use]
pub fn sign_changes(polygon: &ControlPolygon) -> usize {
    polygon
        .windows(2)
        .filter(|pair| (pair[0].y < 0.0) != (pair[1].y < 0.0))
        .count()
}

/// Splits the polygon at its parameter midpoint by de Casteljau averaging.
///
/// Both halves keep six control points and cover half the parameter range
/// of the input.
#[must_use]
pub fn subdivide(polygon: &ControlPolygon) -> (ControlPolygon, ControlPolygon) {
    let mut left = *polygon;
    let mut right = *polygon;
    let mut row = *polygon;

    for level in 1..=DEGREE {
        for j in 0..=DEGREE - level {
            row[j] = nalgebra::center(&row[j], &row[j + 1]);
        }
        left[level] = row[0];
        right[DEGREE - level] = row[DEGREE - level];
    }
    (left, right)
}

/// Returns the x-intercept of the chord if the polygon is flat enough to
/// stand in for the polynomial.
///
/// The inner control points' signed squared distances to the chord bound
/// the curve between two lines parallel to it; when those lines cross
/// `y = 0` within `epsilon` of each other, the chord's own intercept is
/// returned.
fn flat_chord_root(polygon: &ControlPolygon, epsilon: f64) -> Option<f64> {
    let first = polygon[0];
    let last = polygon[DEGREE];

    // Implicit chord: a·x + b·y + c = 0.
    let a = first.y - last.y;
    let b = last.x - first.x;
    let c = first.x * last.y - last.x * first.y;
    let ab_squared = a * a + b * b;

    let mut above = 0.0_f64;
    let mut below = 0.0_f64;
    for w in &polygon[1..DEGREE] {
        let d = a * w.x + b * w.y + c;
        let signed = d * d.abs() / ab_squared;
        above = above.max(signed);
        below = below.min(signed);
    }

    // Intercepts of the bounding lines with y = 0 are (c + offset) / -a.
    let spread = 0.5 * (above - below) / a.abs();
    if spread < epsilon {
        let dx = last.x - first.x;
        let dy = last.y - first.y;
        Some(first.x - first.y * dx / dy)
    } else {
        None
    }
}

/// Finds the parameters where the Bernstein polynomial crosses zero.
///
/// Roots come back in ascending parameter order, since left halves are
/// searched before right halves. A polygon without sign changes returns
/// immediately.
#[must_use]
pub fn find_roots(polygon: &ControlPolygon, params: &ClipParams) -> RootSet {
    find_roots_at(polygon, params, 0)
}

fn find_roots_at(polygon: &ControlPolygon, params: &ClipParams, depth: u32) -> RootSet {
    let mut roots = RootSet::new();
    let crossings = sign_changes(polygon);
    if crossings == 0 {
        return roots;
    }

    if depth >= params.max_depth {
        let t = (polygon[0].x + polygon[DEGREE].x) * 0.5;
        trace!(depth, t, crossings, "clip depth cap reached, using midpoint");
        roots.push(t);
        return roots;
    }

    if crossings == 1 {
        if let Some(t) = flat_chord_root(polygon, params.flatness_epsilon) {
            trace!(depth, t, "control polygon flat, using chord intercept");
            roots.push(t);
            return roots;
        }
    }

    let (left, right) = subdivide(polygon);
    roots.extend_from(&find_roots_at(&left, params, depth + 1));
    roots.extend_from(&find_roots_at(&right, params, depth + 1));
    roots
}
