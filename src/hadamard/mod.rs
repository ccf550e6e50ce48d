//! The assembled Hadamard matrix type and its validation.
//!
//! This module provides the fundamental data structure for the search
//! result: a square `±1` matrix of order `4K`, together with an
//! orthogonality check that confirms (or refutes) the Hadamard property.
//!
//! ## Overview
//!
//! - [`Hadamard`]: the final `4K×4K` sign matrix
//! - [`verify_hadamard`]: row-orthogonality validation with a detailed report
//!
//! A matrix is Hadamard when every pair of distinct rows has dot product 0
//! (equivalently `H·Hᵀ = n·I`). Validation failure is a reportable outcome,
//! not a fatal condition: it indicates a defect in the search or assembly
//! logic rather than user error.

mod verify;

pub use verify::{verify_hadamard, VerificationIssue, VerificationResult};

use std::fmt;

use ndarray::Array2;

use crate::error::{Error, Result};

/// A candidate Hadamard matrix: a square matrix of `±1` entries.
///
/// Produced by [`assemble`](crate::assemble::assemble) from four circulant
/// blocks; immutable after construction. Use [`Hadamard::verify`] to confirm
/// the orthogonality property.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hadamard {
    data: Array2<i32>,
}

impl Hadamard {
    /// Create a Hadamard candidate from matrix data.
    ///
    /// # Panics
    ///
    /// Panics if the data is not square.
    #[must_use]
    pub fn new(data: Array2<i32>) -> Self {
        assert_eq!(
            data.nrows(),
            data.ncols(),
            "matrix must be square, got {}x{}",
            data.nrows(),
            data.ncols()
        );
        Self { data }
    }

    /// Create a Hadamard candidate, validating that the data is square.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is not square.
    pub fn try_new(data: Array2<i32>) -> Result<Self> {
        if data.nrows() != data.ncols() {
            return Err(Error::DimensionMismatch {
                expected: format!("{0}x{0} square matrix", data.nrows()),
                actual: format!("{}x{}", data.nrows(), data.ncols()),
            });
        }
        Ok(Self { data })
    }

    /// Get the matrix order (side length).
    #[must_use]
    pub fn order(&self) -> usize {
        self.data.nrows()
    }

    /// Get the entry at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.data[[row, col]]
    }

    /// Get a row of the matrix.
    #[must_use]
    pub fn row(&self, idx: usize) -> ndarray::ArrayView1<'_, i32> {
        self.data.row(idx)
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = ndarray::ArrayView1<'_, i32>> {
        self.data.rows().into_iter()
    }

    /// Get a reference to the underlying data.
    #[must_use]
    pub fn data(&self) -> &Array2<i32> {
        &self.data
    }

    /// Consume the matrix and return the underlying data.
    #[must_use]
    pub fn into_data(self) -> Array2<i32> {
        self.data
    }

    /// Check the Hadamard property: all distinct row pairs orthogonal,
    /// every entry `±1`, every row of squared norm equal to the order.
    #[must_use]
    pub fn verify(&self) -> VerificationResult {
        verify_hadamard(self)
    }
}

impl fmt::Debug for Hadamard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hadamard(order {}) with data {:?}", self.order(), self.data)
    }
}

impl fmt::Display for Hadamard {
    /// Render as space-separated entries, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.rows() {
            let row_str: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(f, "{}", row_str.join(" "))?;
        }
        Ok(())
    }
}
