//! Closed-form real root solving for cubic, quadratic and linear equations.
//!
//! Zero tests on coefficients and discriminants are exact comparisons.
//! Nearly-degenerate inputs go through the regular branches and may lose
//! precision; they are not snapped to the degenerate ones.

#![allow(clippy::float_cmp)]

use std::f64::consts::PI;
use std::ops::Deref;

use tracing::{debug, warn};

/// Maximum number of roots any solver in this crate reports.
pub const MAX_ROOTS: usize = 5;

/// Small fixed-capacity list of real roots.
///
/// The solvers make no ordering promise; callers scan all of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootSet {
    values: [f64; MAX_ROOTS],
    len: usize,
}

impl RootSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: [0.0; MAX_ROOTS],
            len: 0,
        }
    }

    /// Appends a root. Returns `false` and drops the value when full.
    pub fn push(&mut self, value: f64) -> bool {
        if self.len == MAX_ROOTS {
            warn!(value, "root set full, dropping root");
            return false;
        }
        self.values[self.len] = value;
        self.len += 1;
        true
    }

    /// Appends every root of `other`, in order.
    pub fn extend_from(&mut self, other: &RootSet) {
        for &value in other.iter() {
            self.push(value);
        }
    }

    /// Returns the roots as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values[..self.len]
    }
}

impl Default for RootSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for RootSet {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        self.as_slice()
    }
}

impl<'a> IntoIterator for &'a RootSet {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl FromIterator<f64> for RootSet {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.push(value);
        }
        set
    }
}

/// Real cube root that keeps the sign of `x`.
fn signed_cbrt(x: f64) -> f64 {
    if x >= 0.0 {
        x.powf(1.0 / 3.0)
    } else {
        -(-x).powf(1.0 / 3.0)
    }
}

/// Solves `a·x³ + b·x² + c·x + d = 0`.
///
/// Degrades to [`solve_quadratic`] when `a` is exactly zero. When the
/// discriminant of the depressed cubic is exactly zero, two values are
/// returned (the simple root and the double root, which coincide for a
/// triple root).
#[must_use]
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> RootSet {
    if a == 0.0 {
        return solve_quadratic(b, c, d);
    }

    // Normalise to x³ + a·x² + b·x + c and substitute x = y - a/3.
    let (a, b, c) = (b / a, c / a, d / a);
    let p = b - a * a / 3.0;
    let q = a * (2.0 * a * a - 9.0 * b) / 27.0 + c;
    let p3 = p * p * p;
    let disc = q * q + 4.0 * p3 / 27.0;
    let offset = -a / 3.0;

    let mut roots = RootSet::new();
    if disc == 0.0 {
        let u = if q < 0.0 {
            (-q / 2.0).powf(1.0 / 3.0)
        } else {
            -(q / 2.0).powf(1.0 / 3.0)
        };
        roots.push(2.0 * u + offset);
        roots.push(-u + offset);
    } else if disc > 0.0 {
        let z = disc.sqrt();
        let u = signed_cbrt((-q + z) / 2.0);
        let v = signed_cbrt((-q - z) / 2.0);
        roots.push(u + v + offset);
    } else {
        // Three distinct real roots; p < 0 here so both square roots are real.
        let u = 2.0 * (-p / 3.0).sqrt();
        let v = (-(-27.0 / p3).sqrt() * q / 2.0).acos() / 3.0;
        roots.push(u * v.cos() + offset);
        roots.push(u * (v + 2.0 * PI / 3.0).cos() + offset);
        roots.push(u * (v + 4.0 * PI / 3.0).cos() + offset);
    }
    roots
}

/// Solves `a·x² + b·x + c = 0`, degrading to the linear equation when `a`
/// is exactly zero.
///
/// A vanishing linear term yields no roots. This includes the all-zero
/// equation, which constrains nothing; callers must not read an empty
/// result there as "every x is a root".
#[must_use]
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> RootSet {
    let mut roots = RootSet::new();
    if a == 0.0 {
        if b == 0.0 {
            debug!(c, "equation has no variable term, no roots");
            return roots;
        }
        roots.push(-c / b);
        return roots;
    }

    let disc = b * b - 4.0 * a * c;
    if disc == 0.0 {
        roots.push(-b / (2.0 * a));
    } else if disc > 0.0 {
        let z = disc.sqrt();
        roots.push((-b - z) / (2.0 * a));
        roots.push((-b + z) / (2.0 * a));
    }
    roots
}
