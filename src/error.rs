//! Error types for u-orienteering.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for solver and I/O operations.
pub type Result<T> = std::result::Result<T, OrienteeringError>;

/// Errors that stop a single solve.
///
/// Malformed problem files are not errors: the parser reports them as
/// [`ParseWarning`](crate::parser::ParseWarning)s and keeps going.
#[derive(Error, Debug)]
pub enum OrienteeringError {
    /// Solver parameters out of range
    #[error("Invalid ACO configuration: {0}")]
    InvalidConfig(String),

    /// Instance without a depot
    #[error("Instance has no nodes (a depot is required)")]
    EmptyInstance,

    /// Problem file could not be read
    #[error("IO error on {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}
