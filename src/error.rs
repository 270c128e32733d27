//! Error types for table generation and emission

use crate::NumBits;
use thiserror::Error;

/// Errors that can occur while generating or emitting Hilbert tables
#[derive(Debug, Error)]
pub enum Error {
    /// Requested dimension is outside of the supported range
    #[error("Invalid dimension {dimension}: expected a value between 1 and {max}")]
    InvalidDimension {
        /// Dimension that was requested
        dimension: NumBits,
        /// Highest supported dimension
        max: NumBits,
    },

    /// Include guard is not usable as a C preprocessor identifier
    #[error("Invalid header guard {0:?}: expected a C identifier")]
    InvalidHeaderGuard(String),

    /// Generated tables failed a consistency check
    #[error("Tables of dimension {dimension} violate an invariant: {message}")]
    InvariantViolation {
        /// Dimension of the faulty table set
        dimension: NumBits,
        /// Description of the violated invariant
        message: String,
    },

    /// Output could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an InvariantViolation error
    pub fn invariant(dimension: NumBits, message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            dimension,
            message: message.into(),
        }
    }
}

/// Result type for fallible operations of this crate
pub type Result<T> = std::result::Result<T, Error>;
