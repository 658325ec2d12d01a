//! Error types for eigenqr.
use thiserror::Error;

use crate::math::ShapeError;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, EigenError>;

/// Failures raised at the boundaries of the solver.
///
/// The numerical core itself never fails once its inputs are allocated; it
/// only loses precision on ill-conditioned matrices.
#[derive(Error, Debug)]
pub enum EigenError {
    /// Storage for a matrix could not be reserved.
    #[error("Memory allocation error: cannot allocate a {rows}x{cols} matrix")]
    OutOfMemory { rows: usize, cols: usize },

    /// The input stream did not describe a valid square matrix.
    #[error("Invalid data in input: {0}")]
    InvalidData(String),

    /// A buffer did not match the requested shape.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Reading or writing a stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EigenError {
    pub fn invalid_data(reason: impl Into<String>) -> Self {
        Self::InvalidData(reason.into())
    }
}
