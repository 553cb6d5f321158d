//! Algolens - step-visualizable algorithm engines
//!
//! Three independent, synchronous, in-memory engines behind one facade:
//!
//! - [`ConstraintSolver`] enumerates N-Queens placements with live
//!   validity feedback and search statistics
//! - [`SequenceAlignmentEngine`] computes the LCS for 2, 3, or N
//!   sequences and exposes the full DP tables and alignment path
//! - [`PrefixTree`] stores a word set with shared-prefix compression,
//!   memory accounting, and a 2D render layout
//!
//! Every operation runs to completion and returns a complete result; the
//! presentation layer replays sub-steps on its own timer. None of the
//! engines performs I/O or knows about pacing.
//!
//! # Example
//!
//! ```rust
//! use algolens::prelude::*;
//!
//! let mut solver = ConstraintSolver::new(8);
//! assert_eq!(solver.find_all_solutions().len(), 92);
//!
//! let engine = SequenceAlignmentEngine::new();
//! assert_eq!(engine.solve_pair("AGGTAB", "GXTXAYB").lcs, "GTAB");
//!
//! let mut tree = PrefixTree::new();
//! tree.insert("lens");
//! assert!(tree.search("lens").found);
//! ```

pub use algolens_align::{
    AlignError, Dependency, DpTable2, DpTable3, MultiAlignment, PairwiseAlignment, PathStep,
    SequenceAlignmentEngine,
};
pub use algolens_config::{ConfigError, EngineConfig};
pub use algolens_core::{Matrix2, Matrix3, Position};
pub use algolens_queens::{ConstraintSolver, Queen, SearchStats, Solution, Symmetry};
pub use algolens_trie::{
    BatchReport, InsertOutcome, MemoryStats, NodeId, PrefixOutcome, PrefixTree, SearchFailure,
    SearchOutcome, TrieNode,
};

/// One-stop imports for presentation code.
pub mod prelude {
    pub use crate::{
        ConstraintSolver, EngineConfig, Position, PrefixTree, SequenceAlignmentEngine,
    };
}
