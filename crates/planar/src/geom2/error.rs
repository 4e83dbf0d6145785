//! Failure signals raised by the 2D kernel.

use std::fmt;

/// Errors raised synchronously at the point of violation.
#[derive(Clone, Debug, PartialEq)]
pub enum GeomError {
    /// Input is structurally unusable for the requested object
    /// (too few vertices, empty point set, null direction, ...).
    Construction(String),
    /// A value could not be coerced to a pair of floats.
    Conversion(String),
    /// Affine inversion attempted on a (near) singular linear part.
    TransformNotInvertible { det: f64 },
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::Construction(msg) => write!(f, "construction error: {msg}"),
            GeomError::Conversion(msg) => write!(f, "conversion error: {msg}"),
            GeomError::TransformNotInvertible { det } => {
                write!(f, "transform not invertible (determinant {det:e})")
            }
        }
    }
}

impl std::error::Error for GeomError {}

/// Kernel result alias.
pub type Result<T> = std::result::Result<T, GeomError>;

impl GeomError {
    pub(crate) fn construction(msg: impl Into<String>) -> Self {
        GeomError::Construction(msg.into())
    }
    pub(crate) fn conversion(msg: impl Into<String>) -> Self {
        GeomError::Conversion(msg.into())
    }
}
