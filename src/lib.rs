//! # Williamson
//!
//! A randomized constructive search for Hadamard matrices using the
//! Williamson block decomposition.
//!
//! ## Overview
//!
//! A Hadamard matrix of order `n` is a square `±1` matrix whose rows are
//! pairwise orthogonal. This library searches for one of order `4K` by:
//!
//! 1. Generating four random sign rows of length `K` (first entry fixed at
//!    `+1`) and expanding each into a `K×K` circulant block.
//! 2. Enumerating all 35 index multisets of size 4 over the blocks and
//!    testing whether the selected blocks' squares sum to `4K·I` (the
//!    quadratic Williamson constraint).
//! 3. On a match, tiling the four raw blocks into the fixed 4×4 Williamson
//!    array pattern and validating row orthogonality.
//! 4. Otherwise retrying with entirely fresh randomness, up to a
//!    configurable attempt budget.
//!
//! ## Quick Start
//!
//! ```rust
//! use williamson::WilliamsonSearch;
//!
//! // Block size 1 always succeeds immediately: the order-4 pattern.
//! let outcome = WilliamsonSearch::new(1)
//!     .unwrap()
//!     .run_seeded(42)
//!     .unwrap();
//!
//! assert_eq!(outcome.hadamard().order(), 4);
//! assert!(outcome.is_valid());
//! println!("{}", outcome.hadamard());
//! ```
//!
//! Searches are reproducible: a fixed seed yields the same rows, blocks,
//! winning quadruple, and final matrix on every run. Termination is
//! probabilistic; for some block sizes no satisfying quadruple exists under
//! this generation scheme, which is why the driver takes an attempt budget
//! and reports exhaustion instead of looping forever.
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization of result types
//! - `parallel`: Enable a racing search driver using rayon

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assemble;
pub mod block;
pub mod error;
pub mod hadamard;
pub mod search;
pub mod utils;

#[cfg(feature = "parallel")]
pub mod parallel;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::assemble::assemble;
    pub use crate::block::{CirculantBlock, SignRow};
    pub use crate::error::{Error, Result};
    pub use crate::hadamard::{
        verify_hadamard, Hadamard, VerificationIssue, VerificationResult,
    };
    pub use crate::search::{
        target_matrix, BlockSet, SearchOutcome, WilliamsonSearch, DEFAULT_MAX_ATTEMPTS,
        MAX_BLOCK_SIZE,
    };

    #[cfg(feature = "parallel")]
    pub use crate::parallel::ParWilliamsonSearch;
}

// Re-export commonly used items at crate root
pub use error::{Error, Result};
pub use hadamard::{verify_hadamard, Hadamard, VerificationIssue, VerificationResult};
pub use search::{SearchOutcome, WilliamsonSearch};

#[cfg(feature = "parallel")]
pub use parallel::ParWilliamsonSearch;
