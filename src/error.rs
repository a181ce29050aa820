//! Error types for simdray operations.
//!
//! The numeric kernels (vector batches, colour conversion) are total over
//! their floating-point inputs and never fail. Errors only arise at the
//! edges: writing text to a sink and validating image dimensions.

use std::fmt;

/// Errors that can occur while emitting colours or images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimdrayError {
    /// Writing to the output sink failed.
    Io {
        /// Kind reported by the underlying I/O error.
        kind: std::io::ErrorKind,
        /// Human-readable error message.
        message: String,
    },
    /// Input validation error.
    Validation {
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for SimdrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimdrayError::Io { kind, message } => {
                write!(f, "Output error: {message} ({kind:?})")
            }
            SimdrayError::Validation { message } => {
                write!(f, "Validation error: {message}")
            }
        }
    }
}

impl std::error::Error for SimdrayError {}

impl From<std::io::Error> for SimdrayError {
    fn from(error: std::io::Error) -> Self {
        io_error(error.kind(), error.to_string())
    }
}

/// Result type alias for simdray operations.
pub type Result<T> = std::result::Result<T, SimdrayError>;

/// Creates an output error.
pub fn io_error(kind: std::io::ErrorKind, message: impl Into<String>) -> SimdrayError {
    SimdrayError::Io {
        kind,
        message: message.into(),
    }
}

/// Creates a validation error.
pub fn validation_error(message: impl Into<String>) -> SimdrayError {
    SimdrayError::Validation {
        message: message.into(),
    }
}
