//! Orthogonality validation for candidate Hadamard matrices.
//!
//! The checks mirror the defining property `H·Hᵀ = n·I`: every unordered
//! pair of distinct rows must have dot product exactly 0, every entry must
//! be `±1`, and every row's squared norm must equal the order.

use super::Hadamard;

/// Result of validating a candidate Hadamard matrix.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerificationResult {
    /// Whether the matrix passes all checks.
    pub is_valid: bool,
    /// The matrix order that was checked.
    pub order: usize,
    /// Details about any issues found.
    pub issues: Vec<VerificationIssue>,
}

/// A specific issue found during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerificationIssue {
    /// An entry is not `+1` or `-1`.
    NonSignEntry {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
        /// The offending value.
        value: i32,
    },
    /// Two distinct rows have a nonzero dot product.
    NonOrthogonalRows {
        /// First row of the pair.
        row_a: usize,
        /// Second row of the pair.
        row_b: usize,
        /// Their dot product.
        dot: i32,
    },
    /// A row's squared norm differs from the matrix order.
    WrongRowNorm {
        /// The offending row.
        row: usize,
        /// The computed squared norm.
        norm: i32,
        /// The expected squared norm (the order).
        expected: i32,
    },
}

/// Validate the Hadamard property of a candidate matrix.
///
/// Checks, in order:
/// 1. Every entry is `+1` or `-1`.
/// 2. Every unordered pair of distinct rows has dot product exactly 0.
/// 3. Every row's squared norm equals the order (implied by 1 when the
///    entries check passes, asserted anyway as a defense against assembly
///    defects).
///
/// A failed check never raises an error; it is reported through
/// [`VerificationResult::issues`].
#[must_use]
pub fn verify_hadamard(matrix: &Hadamard) -> VerificationResult {
    let n = matrix.order();
    let mut issues = Vec::new();

    for row in 0..n {
        for col in 0..n {
            let value = matrix.get(row, col);
            if value != 1 && value != -1 {
                issues.push(VerificationIssue::NonSignEntry { row, col, value });
            }
        }
    }

    for row_a in 0..n {
        for row_b in (row_a + 1)..n {
            let dot: i32 = (0..n).map(|c| matrix.get(row_a, c) * matrix.get(row_b, c)).sum();
            if dot != 0 {
                issues.push(VerificationIssue::NonOrthogonalRows { row_a, row_b, dot });
            }
        }
    }

    let expected = n as i32;
    for row in 0..n {
        let norm: i32 = (0..n).map(|c| matrix.get(row, c).pow(2)).sum();
        if norm != expected {
            issues.push(VerificationIssue::WrongRowNorm {
                row,
                norm,
                expected,
            });
        }
    }

    VerificationResult {
        is_valid: issues.is_empty(),
        order: n,
        issues,
    }
}
