//! Error types for wafer map field computation.

use std::fmt;

use crate::render::RenderError;

/// Result type for wafer map operations.
pub type WaferMapResult<T> = Result<T, WaferMapError>;

/// Errors that can occur while computing a wafer map field.
#[derive(Debug, Clone)]
pub enum WaferMapError {
    /// An input precondition was violated: mismatched sequence lengths,
    /// empty sample set, or a non-positive wafer size.
    InvalidInput {
        parameter: &'static str,
        message: String,
    },

    /// The scattered-data fit is numerically singular or ill-conditioned.
    Interpolation { message: String },

    /// The external renderer failed; carried through unmodified.
    Render(RenderError),
}

impl fmt::Display for WaferMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { parameter, message } => {
                write!(f, "Invalid input '{}': {}", parameter, message)
            }
            Self::Interpolation { message } => {
                write!(f, "Interpolation failed: {}", message)
            }
            Self::Render(err) => {
                write!(f, "Render failed: {}", err)
            }
        }
    }
}

impl std::error::Error for WaferMapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RenderError> for WaferMapError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}
