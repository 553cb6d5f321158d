//! Queens and recorded solutions.

use algolens_core::Position;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A placed queen.
///
/// The `id` is the stable `"row-col"` identifier the presentation layer
/// keys its animations on; it is assigned when the queen is placed and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Queen {
    pub id: String,
    pub pos: Position,
}

impl Queen {
    /// Places a queen at `(row, col)`.
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            id: format!("{row}-{col}"),
            pos: Position::new(row, col),
        }
    }

    pub fn row(&self) -> usize {
        self.pos.row
    }

    pub fn col(&self) -> usize {
        self.pos.col
    }
}

/// A complete, immutable board assignment: exactly `n` queens, one per
/// row, pairwise non-attacking.
///
/// Solutions are deep-copied snapshots taken at the moment the search
/// accepts them; they never alias the solver's mutable working list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    queens: Vec<Queen>,
}

impl Solution {
    pub(crate) fn from_queens(queens: Vec<Queen>) -> Self {
        Self { queens }
    }

    /// The queens in row order.
    pub fn queens(&self) -> &[Queen] {
        &self.queens
    }

    /// Board size implied by the solution.
    pub fn size(&self) -> usize {
        self.queens.len()
    }

    /// The occupied squares as an order-independent set.
    pub fn position_set(&self) -> BTreeSet<Position> {
        self.queens.iter().map(|q| q.pos).collect()
    }
}
