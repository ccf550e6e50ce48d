//! Random sign rows and the circulant blocks built from them.
//!
//! A Williamson candidate starts from a row of `K` values in `{+1, -1}`
//! whose first entry is fixed at `+1`. The row is expanded into a `K×K`
//! circulant matrix where each row is the previous row cyclically shifted
//! one position to the right:
//!
//! ```text
//! row:   [ 1 -1  1 ]
//!
//! block: [ 1 -1  1 ]
//!        [ 1  1 -1 ]
//!        [-1  1  1 ]
//! ```
//!
//! Both the raw block (needed for final assembly) and its matrix square
//! (needed for the combination search) are available; squaring never
//! mutates the raw block.

use std::ops::Index;

use ndarray::Array2;
use rand::Rng;

use crate::error::{Error, Result};

/// A row of `K` signed unit values with a fixed `+1` first entry.
///
/// The number of `-1` entries among indices `1..K` is drawn uniformly from
/// `[0, K-1)` and their positions are a uniform random subset of
/// `{1, ..., K-1}` chosen without replacement. For `K = 1` the row is the
/// degenerate `[+1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignRow {
    values: Vec<i32>,
}

impl SignRow {
    /// Generate a random sign row of length `k`.
    ///
    /// # Panics
    ///
    /// Panics if `k` is 0.
    pub fn random<R: Rng + ?Sized>(k: usize, rng: &mut R) -> Self {
        assert!(k >= 1, "sign row length must be at least 1");

        // The draw range is [0, k-1): a row can never be negative at every
        // index past 0.
        let negatives = if k >= 2 { rng.gen_range(0..k - 1) } else { 0 };

        let mut values = vec![1i32; k];
        for idx in rand::seq::index::sample(rng, k - 1, negatives) {
            values[idx + 1] = -1;
        }

        Self { values }
    }

    /// Create a sign row from explicit values.
    ///
    /// # Errors
    ///
    /// Returns an error if `values` is empty, the first entry is not `+1`,
    /// or any entry is not `±1`.
    pub fn from_values(values: Vec<i32>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::invalid_params("sign row must not be empty"));
        }
        if values[0] != 1 {
            return Err(Error::invalid_params(format!(
                "sign row must start with +1, got {}",
                values[0]
            )));
        }
        if let Some(&bad) = values.iter().find(|&&v| v != 1 && v != -1) {
            return Err(Error::invalid_params(format!(
                "sign row entries must be +1 or -1, got {bad}"
            )));
        }

        Ok(Self { values })
    }

    /// Get the row length `K`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row is empty. Always false for a constructed row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Count the `-1` entries.
    #[must_use]
    pub fn negatives(&self) -> usize {
        self.values.iter().filter(|&&v| v == -1).count()
    }

    /// View the row values as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }
}

impl Index<usize> for SignRow {
    type Output = i32;

    fn index(&self, idx: usize) -> &i32 {
        &self.values[idx]
    }
}

/// A `K×K` circulant sign matrix derived from one [`SignRow`].
///
/// Row `r` is the sign row cyclically shifted: `block[r][c] = row[(c - r) mod K]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CirculantBlock {
    data: Array2<i32>,
}

impl CirculantBlock {
    /// Expand a sign row into its circulant block.
    #[must_use]
    pub fn from_row(row: &SignRow) -> Self {
        let k = row.len();
        let data = Array2::from_shape_fn((k, k), |(r, c)| row[(c + k - r) % k]);
        Self { data }
    }

    /// Get the block order `K`.
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

    /// Get a reference to the underlying matrix.
    #[must_use]
    pub fn data(&self) -> &Array2<i32> {
        &self.data
    }

    /// Compute the block's matrix square, `block · block`.
    ///
    /// Returns a fresh matrix; the raw block is left untouched so it stays
    /// available for final assembly.
    #[must_use]
    pub fn squared(&self) -> Array2<i32> {
        self.data.dot(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sign_row_invariants() {
        let mut rng = StdRng::seed_from_u64(0xC1BC);

        for k in 1..=20 {
            for _ in 0..50 {
                let row = SignRow::random(k, &mut rng);
                assert_eq!(row.len(), k);
                assert_eq!(row[0], 1, "first entry must be +1");
                assert!(row.as_slice().iter().all(|&v| v == 1 || v == -1));

                // negatives drawn from [0, k-1)
                if k == 1 {
                    assert_eq!(row.negatives(), 0);
                } else {
                    assert!(row.negatives() < k - 1);
                }
            }
        }
    }

    #[test]
    fn test_sign_row_degenerate() {
        let mut rng = StdRng::seed_from_u64(1);
        let row = SignRow::random(1, &mut rng);
        assert_eq!(row.as_slice(), &[1]);
    }

    #[test]
    fn test_sign_row_k2_never_negative() {
        // For K = 2 the draw range [0, 1) forces zero negatives, so every
        // row is [1, 1].
        let mut rng = StdRng::seed_from_u64(0xB0B);
        for _ in 0..200 {
            let row = SignRow::random(2, &mut rng);
            assert_eq!(row.as_slice(), &[1, 1]);
        }
    }

    #[test]
    fn test_sign_row_negative_counts_vary() {
        // For K = 5 the draw range is {0, 1, 2, 3}; with enough samples
        // every count should show up.
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..500 {
            let row = SignRow::random(5, &mut rng);
            seen[row.negatives()] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn test_sign_row_from_values() {
        let row = SignRow::from_values(vec![1, -1, -1]).unwrap();
        assert_eq!(row.negatives(), 2);

        assert!(SignRow::from_values(vec![]).is_err());
        assert!(SignRow::from_values(vec![-1, 1]).is_err());
        assert!(SignRow::from_values(vec![1, 0, 1]).is_err());
    }

    #[test]
    fn test_circulant_invariant() {
        let mut rng = StdRng::seed_from_u64(0x516E);
        for k in 1..=12 {
            let row = SignRow::random(k, &mut rng);
            let block = CirculantBlock::from_row(&row);

            assert_eq!(block.order(), k);
            for r in 0..k {
                for c in 0..k {
                    assert_eq!(block.get(r, c), row[(c + k - r) % k]);
                }
            }
        }
    }

    #[test]
    fn test_circulant_rows_rotate_right() {
        // Each row is the previous row with its last element moved to the front.
        let row = SignRow::from_values(vec![1, -1, 1, 1, -1]).unwrap();
        let block = CirculantBlock::from_row(&row);

        for r in 1..5 {
            let prev: Vec<i32> = (0..5).map(|c| block.get(r - 1, c)).collect();
            let mut rotated = vec![prev[4]];
            rotated.extend_from_slice(&prev[..4]);
            let current: Vec<i32> = (0..5).map(|c| block.get(r, c)).collect();
            assert_eq!(current, rotated);
        }
    }

    #[test]
    fn test_squared_is_circular_autocorrelation() {
        // For row [1, -1, -1] the square is the circulant of [3, -1, -1].
        let row = SignRow::from_values(vec![1, -1, -1]).unwrap();
        let block = CirculantBlock::from_row(&row);
        let square = block.squared();

        let expected_row = [3, -1, -1];
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(square[[r, c]], expected_row[(c + 3 - r) % 3]);
            }
        }
    }

    #[test]
    fn test_squared_diagonal_is_order() {
        // Every diagonal entry of the square is the row's squared norm, K.
        let mut rng = StdRng::seed_from_u64(99);
        for k in 1..=10 {
            let block = CirculantBlock::from_row(&SignRow::random(k, &mut rng));
            let square = block.squared();
            for r in 0..k {
                assert_eq!(square[[r, r]], k as i32);
            }
        }
    }

    #[test]
    fn test_squared_does_not_mutate_block() {
        let row = SignRow::from_values(vec![1, -1, 1, -1, 1]).unwrap();
        let block = CirculantBlock::from_row(&row);
        let before = block.data().clone();

        let _square = block.squared();
        assert_eq!(block.data(), &before);
    }

    #[test]
    fn test_one_by_one_block() {
        let row = SignRow::from_values(vec![1]).unwrap();
        let block = CirculantBlock::from_row(&row);
        assert_eq!(block.get(0, 0), 1);
        assert_eq!(block.squared()[[0, 0]], 1);
    }
}
