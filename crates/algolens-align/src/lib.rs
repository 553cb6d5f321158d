//! Algolens Align - Longest Common Subsequence engine
//!
//! Computes LCS length and one optimal alignment for 2..N input
//! sequences, exposing the full dynamic-programming tables and the
//! reconstruction path so a presentation layer can replay every step.
//!
//! - 2 sequences: classic `(m+1) × (n+1)` table with path reconstruction
//! - 3 sequences: true 3-way DP with recorded match dependencies
//! - 4+ sequences: pairwise-reduction fallback, flagged
//!   [`approximate`](MultiAlignment::approximate) because it is *not*
//!   guaranteed to find the true N-way LCS
//! - [`lcs_length`]: O(min(m, n))-space length-only rolling-array variant
//!
//! Comparison is exact `char` equality; no case folding or Unicode
//! normalization is applied.
//!
//! # Example
//!
//! ```
//! use algolens_align::SequenceAlignmentEngine;
//!
//! let engine = SequenceAlignmentEngine::new();
//! let result = engine.solve_pair("ABCBDAB", "BDCABA");
//! assert_eq!(result.lcs, "BCBA");
//! ```

pub mod error;
pub mod multiway;
pub mod pairwise;
pub mod rolling;
pub mod threeway;

pub use error::AlignError;
pub use multiway::{Dependency, MultiAlignment};
pub use pairwise::{DpTable2, PairwiseAlignment, PathStep};
pub use rolling::lcs_length;
pub use threeway::DpTable3;

/// The sequence alignment engine.
///
/// Stateless per call: every solve builds its tables from scratch and
/// returns an owned result; nothing is cached across calls.
#[derive(Debug, Default)]
pub struct SequenceAlignmentEngine;

impl SequenceAlignmentEngine {
    pub fn new() -> Self {
        Self
    }

    /// Solves the two-sequence LCS with full table and path. See
    /// [`pairwise::solve`].
    pub fn solve_pair(&self, a: &str, b: &str) -> PairwiseAlignment {
        pairwise::solve(a, b)
    }

    /// Solves 2, 3, or N sequences, dispatching on count. See
    /// [`multiway::solve`]. Fewer than two sequences is the engine's
    /// only validation failure.
    pub fn solve_multi(&self, sequences: &[String]) -> Result<MultiAlignment, AlignError> {
        multiway::solve(sequences)
    }

    /// Length-only LCS in O(min(m, n)) space. No path reconstruction is
    /// possible from this variant: the rolling rows discard the history
    /// a traceback would need.
    pub fn lcs_length(&self, a: &str, b: &str) -> u32 {
        rolling::lcs_length(a, b)
    }
}
