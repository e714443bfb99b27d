pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use config::{ClipParams, QueryConfig};
pub use error::{GeometryError, Result, SketchgeomError};
