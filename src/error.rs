use thiserror::Error;

/// Top-level error type for the sketchgeom engine.
#[derive(Debug, Error)]
pub enum SketchgeomError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised while building segments or solver parameters.
///
/// Numerical degeneracy (coincident points, vanishing coefficients) is
/// never an error; those cases have defined fallback answers.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("a segment needs 2 to 4 control points, got {found}")]
    InvalidControlPointCount { found: usize },

    #[error("invalid value for {parameter}: {value}")]
    InvalidParameter { parameter: &'static str, value: f64 },
}

/// Convenience type alias for results using [`SketchgeomError`].
pub type Result<T> = std::result::Result<T, SketchgeomError>;
