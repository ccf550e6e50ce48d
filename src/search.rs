//! Randomized search for Williamson block quadruples.
//!
//! Each attempt generates four independent circulant blocks and enumerates
//! all 35 non-decreasing index quadruples over them, testing whether the
//! selected blocks' squares sum to the target matrix `4K·I`. On a match the
//! four raw blocks are assembled into the Williamson array and validated
//! once; otherwise the attempt is discarded and the search retries with
//! entirely fresh randomness, up to a configurable attempt budget.
//!
//! ## Example
//!
//! ```
//! use williamson::WilliamsonSearch;
//!
//! // K = 1 succeeds on the first attempt: the order-4 pattern.
//! let outcome = WilliamsonSearch::new(1)
//!     .unwrap()
//!     .run_seeded(42)
//!     .unwrap();
//!
//! assert_eq!(outcome.hadamard().order(), 4);
//! assert_eq!(outcome.attempts(), 1);
//! assert!(outcome.is_valid());
//! ```
//!
//! Termination is probabilistic: for some block sizes no quadruple can ever
//! satisfy the constraint under this generation scheme, so the budget is the
//! only guarantee the search returns.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::assemble::assemble;
use crate::block::{CirculantBlock, SignRow};
use crate::error::{Error, Result};
use crate::hadamard::{Hadamard, VerificationResult};
use crate::utils::multiset_combinations;

/// Maximum supported block size (the original parameter was an 8-bit count).
pub const MAX_BLOCK_SIZE: usize = 255;

/// Default attempt budget for [`WilliamsonSearch`].
pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;

/// Build the target matrix for block size `k`: diagonal `4K`, zero elsewhere.
///
/// Constant for a given `k`; the quadratic constraint compares against it
/// exactly.
#[must_use]
pub fn target_matrix(k: usize) -> Array2<i32> {
    Array2::from_shape_fn((k, k), |(r, c)| if r == c { 4 * k as i32 } else { 0 })
}

/// Four independently generated circulant blocks with their cached squares.
///
/// A fresh set is drawn per attempt; nothing is shared between attempts.
#[derive(Debug, Clone)]
pub struct BlockSet {
    blocks: [CirculantBlock; 4],
    squares: [Array2<i32>; 4],
}

impl BlockSet {
    /// Generate four random blocks of order `k` and cache their squares.
    ///
    /// # Panics
    ///
    /// Panics if `k` is 0.
    pub fn random<R: Rng + ?Sized>(k: usize, rng: &mut R) -> Self {
        let blocks =
            std::array::from_fn(|_| CirculantBlock::from_row(&SignRow::random(k, rng)));
        let squares = std::array::from_fn(|i| blocks[i].squared());
        Self { blocks, squares }
    }

    /// Get one of the four raw (un-squared) blocks.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not in `0..4`.
    #[must_use]
    pub fn block(&self, idx: usize) -> &CirculantBlock {
        &self.blocks[idx]
    }

    /// Get the four cached squared blocks.
    #[must_use]
    pub fn squares(&self) -> &[Array2<i32>; 4] {
        &self.squares
    }
}

/// Find the first index quadruple whose squared blocks sum to `target`.
///
/// Enumerates all non-decreasing quadruples `0 ≤ i ≤ j ≤ k ≤ l ≤ 3` (35
/// combinations) in lexicographic order and returns the first whose
/// entrywise sum equals the target exactly. No further combinations are
/// tried after a match.
#[must_use]
pub fn find_quadruple(
    squares: &[Array2<i32>; 4],
    target: &Array2<i32>,
) -> Option<[usize; 4]> {
    for combo in multiset_combinations(4, 4) {
        let mut sum = squares[combo[0]].clone();
        for &idx in &combo[1..] {
            sum += &squares[idx];
        }
        if sum == *target {
            return Some([combo[0], combo[1], combo[2], combo[3]]);
        }
    }
    None
}

/// A successful search: the assembled matrix plus how it was found.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    hadamard: Hadamard,
    quadruple: [usize; 4],
    attempts: usize,
    verification: VerificationResult,
}

impl SearchOutcome {
    pub(crate) fn from_attempt(
        set: &BlockSet,
        quadruple: [usize; 4],
        attempts: usize,
    ) -> Self {
        let hadamard = assemble(quadruple.map(|i| set.block(i)));
        let verification = hadamard.verify();
        Self {
            hadamard,
            quadruple,
            attempts,
            verification,
        }
    }

    /// The assembled `4K×4K` matrix.
    #[must_use]
    pub fn hadamard(&self) -> &Hadamard {
        &self.hadamard
    }

    /// Consume the outcome and return the matrix.
    #[must_use]
    pub fn into_hadamard(self) -> Hadamard {
        self.hadamard
    }

    /// The winning index quadruple, non-decreasing over `0..4`.
    #[must_use]
    pub fn quadruple(&self) -> [usize; 4] {
        self.quadruple
    }

    /// How many attempts the search took, counting the successful one.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// The orthogonality validation report for the assembled matrix.
    #[must_use]
    pub fn verification(&self) -> &VerificationResult {
        &self.verification
    }

    /// Whether the assembled matrix passed orthogonality validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.verification.is_valid
    }
}

/// Randomized search driver for a Hadamard matrix of order `4K`.
///
/// Repeats generate-and-test attempts with fresh randomness until a
/// satisfying quadruple is found or the attempt budget runs out. Each
/// attempt is independent; the only state carried across attempts is the
/// caller's random number generator.
///
/// # Example
///
/// ```
/// use williamson::{Error, WilliamsonSearch};
///
/// // For K = 2 every generated row is all +1s, so no quadruple can match
/// // the target and the budget is always exhausted.
/// let result = WilliamsonSearch::new(2)
///     .unwrap()
///     .with_max_attempts(16)
///     .run_seeded(7);
///
/// assert!(matches!(result, Err(Error::SearchExhausted { attempts: 16, .. })));
/// ```
#[derive(Debug, Clone)]
pub struct WilliamsonSearch {
    k: usize,
    max_attempts: usize,
}

impl WilliamsonSearch {
    /// Create a search driver for block size `k` (final order `4k`).
    ///
    /// # Errors
    ///
    /// Returns an error if `k` is 0 or exceeds [`MAX_BLOCK_SIZE`].
    pub fn new(k: usize) -> Result<Self> {
        if k == 0 {
            return Err(Error::invalid_params("block size must be at least 1"));
        }
        if k > MAX_BLOCK_SIZE {
            return Err(Error::BlockSizeTooLarge {
                block_size: k,
                max: MAX_BLOCK_SIZE,
            });
        }

        Ok(Self {
            k,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        })
    }

    /// Set the attempt budget.
    ///
    /// The search gives up with [`Error::SearchExhausted`] after this many
    /// attempts rather than looping forever.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Get the block size `K`.
    #[must_use]
    pub fn block_size(&self) -> usize {
        self.k
    }

    /// Get the order of the matrix being searched for, `4K`.
    #[must_use]
    pub fn order(&self) -> usize {
        4 * self.k
    }

    /// Get the attempt budget.
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Run the search with the given random number generator.
    ///
    /// On a match the winning blocks are assembled and validated once; the
    /// validation result travels with the outcome rather than being an
    /// error, since a failed validation indicates a defect in the
    /// search/assembly logic and is a legitimate, reportable result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SearchExhausted`] if no attempt produced a
    /// satisfying quadruple within the budget.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SearchOutcome> {
        let target = target_matrix(self.k);

        for attempt in 1..=self.max_attempts {
            if let Some((set, quadruple)) = run_attempt(self.k, &target, rng) {
                return Ok(SearchOutcome::from_attempt(&set, quadruple, attempt));
            }
        }

        Err(Error::SearchExhausted {
            attempts: self.max_attempts,
            block_size: self.k,
        })
    }

    /// Run the search with a `StdRng` seeded from `seed`.
    ///
    /// The same seed and block size always reproduce the same rows, blocks,
    /// quadruple, and final matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SearchExhausted`] if no attempt produced a
    /// satisfying quadruple within the budget.
    pub fn run_seeded(&self, seed: u64) -> Result<SearchOutcome> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.run(&mut rng)
    }
}

/// One generate-and-test attempt: fresh blocks, then the combination search.
pub(crate) fn run_attempt<R: Rng + ?Sized>(
    k: usize,
    target: &Array2<i32>,
    rng: &mut R,
) -> Option<(BlockSet, [usize; 4])> {
    let set = BlockSet::random(k, rng);
    find_quadruple(set.squares(), target).map(|quadruple| (set, quadruple))
}
