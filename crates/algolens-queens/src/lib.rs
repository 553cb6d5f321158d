//! Algolens Queens - Exhaustive N-Queens solver
//!
//! This crate provides the constraint-backtracking engine behind the
//! N-Queens board walkthrough:
//! - Placement validation and attack-square enumeration for manual play
//! - Depth-first enumeration of every solution with [`SearchStats`]
//! - Symmetry detection over recorded solutions
//! - Conflict-minimizing column hints for assisted play
//!
//! The solver is synchronous and deterministic; callers bound the board
//! size before invoking the exhaustive search (the search space is the
//! well-known super-exponential one).
//!
//! # Example
//!
//! ```
//! use algolens_queens::ConstraintSolver;
//!
//! let mut solver = ConstraintSolver::new(4);
//! let solutions = solver.find_all_solutions();
//! assert_eq!(solutions.len(), 2);
//! ```

pub mod board;
pub mod hint;
pub mod solver;
pub mod stats;
pub mod symmetry;

pub use board::{Queen, Solution};
pub use solver::ConstraintSolver;
pub use stats::SearchStats;
pub use symmetry::Symmetry;
