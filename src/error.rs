//! Error types for the williamson library.
//!
//! This module provides error handling using the `thiserror` crate, with
//! specific variants for parameter validation, search exhaustion, and
//! dimension checks.

use thiserror::Error;

/// The main error type for the williamson library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============ Parameter Validation Errors ============
    /// Invalid search parameters.
    #[error("invalid parameters: {message}")]
    InvalidParams {
        /// Description of what is invalid.
        message: String,
    },

    /// The requested block size exceeds the supported maximum.
    #[error("block size {block_size} exceeds maximum {max}")]
    BlockSizeTooLarge {
        /// The requested block size.
        block_size: usize,
        /// The maximum supported block size.
        max: usize,
    },

    // ============ Search Errors ============
    /// The attempt budget ran out before a satisfying quadruple was found.
    ///
    /// This is an expected outcome for block sizes where no quadruple of
    /// random circulant blocks can satisfy the quadratic constraint.
    #[error(
        "exhausted {attempts} attempts without finding a Williamson quadruple for block size {block_size}"
    )]
    SearchExhausted {
        /// How many attempts were made.
        attempts: usize,
        /// The block size that was searched.
        block_size: usize,
    },

    // ============ Dimension Errors ============
    /// Matrix dimensions are inconsistent.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension description.
        expected: String,
        /// Actual dimension description.
        actual: String,
    },
}

/// A specialized `Result` type for williamson operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a new `InvalidParams` error.
    #[must_use]
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::BlockSizeTooLarge {
            block_size: 300,
            max: 255,
        };
        assert!(err.to_string().contains("300"));
        assert!(err.to_string().contains("255"));

        let err = Error::SearchExhausted {
            attempts: 1000,
            block_size: 2,
        };
        assert!(err.to_string().contains("1000"));
        assert!(err.to_string().contains("block size 2"));

        let err = Error::invalid_params("block size must be at least 1");
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn test_error_equality() {
        let err1 = Error::SearchExhausted {
            attempts: 10,
            block_size: 3,
        };
        let err2 = Error::SearchExhausted {
            attempts: 10,
            block_size: 3,
        };
        let err3 = Error::SearchExhausted {
            attempts: 11,
            block_size: 3,
        };

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
