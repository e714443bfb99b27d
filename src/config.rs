//! Tuning knobs for distance queries.
//!
//! The defaults reproduce the reference behaviour exactly; every other
//! setting is an explicit opt-in.

use crate::error::GeometryError;

/// Default recursion cap for the Bézier-clipping root finder.
pub const DEFAULT_MAX_DEPTH: u32 = 64;

/// Parameters for the Bézier-clipping root finder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipParams {
    /// Subdivision depth at which a bracketed root is approximated by the
    /// midpoint of the current parameter interval.
    pub max_depth: u32,
    /// Half-width below which a single-crossing control polygon is treated
    /// as a straight chord.
    pub flatness_epsilon: f64,
}

impl ClipParams {
    /// Creates validated clipping parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_depth` is zero or `flatness_epsilon` is
    /// negative or not finite.
    pub fn new(max_depth: u32, flatness_epsilon: f64) -> Result<Self, GeometryError> {
        if max_depth == 0 {
            return Err(GeometryError::InvalidParameter {
                parameter: "max_depth",
                value: 0.0,
            });
        }
        if !flatness_epsilon.is_finite() || flatness_epsilon < 0.0 {
            return Err(GeometryError::InvalidParameter {
                parameter: "flatness_epsilon",
                value: flatness_epsilon,
            });
        }
        Ok(Self {
            max_depth,
            flatness_epsilon,
        })
    }
}

impl Default for ClipParams {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            flatness_epsilon: f64::EPSILON,
        }
    }
}

/// Per-query configuration shared by the distance kernels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct QueryConfig {
    /// Root-finder parameters for cubic segments.
    pub clip: ClipParams,
    /// Clamp candidate parameters to `[0, 1]` before evaluating them.
    ///
    /// Off by default: roots of the quadratic-segment equation that fall
    /// outside the segment are evaluated on the curve's extension, which
    /// can report distances shorter than the bounded segment allows.
    /// Turning this on also adds both endpoints as candidates.
    pub clamp_parameters: bool,
}

impl QueryConfig {
    /// Returns a config with parameter clamping enabled.
    #[must_use]
    pub fn clamped() -> Self {
        Self {
            clamp_parameters: true,
            ..Self::default()
        }
    }

    /// Replaces the clipping parameters.
    #[must_use]
    pub fn with_clip(mut self, clip: ClipParams) -> Self {
        self.clip = clip;
        self
    }
}
