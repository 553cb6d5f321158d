//! Error types for the alignment engine.

use thiserror::Error;

/// Alignment engine failures.
///
/// Degenerate inputs (empty sequences, disjoint sequences) are normal
/// outcomes with empty results, not errors; the only validation failure
/// is asking for a multi-way alignment of fewer than two sequences.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlignError {
    /// `solve_multi` needs at least two sequences.
    #[error("multi-way alignment needs at least 2 sequences, got {got}")]
    TooFewSequences { got: usize },
}
