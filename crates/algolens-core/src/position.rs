//! Board coordinates and attack predicates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 0-indexed square on a square board.
///
/// Valid coordinates lie in `[0, n)` for a board of size `n`; the type
/// itself does not carry the board size, so bounds checks belong to the
/// code that knows `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Creates a position at the given row and column.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true if both positions share a row.
    pub fn on_same_row(&self, other: &Position) -> bool {
        self.row == other.row
    }

    /// Returns true if both positions share a column.
    pub fn on_same_col(&self, other: &Position) -> bool {
        self.col == other.col
    }

    /// Returns true if both positions lie on a common diagonal,
    /// i.e. `|Δrow| == |Δcol|`.
    pub fn on_same_diagonal(&self, other: &Position) -> bool {
        self.row.abs_diff(other.row) == self.col.abs_diff(other.col)
    }

    /// Returns true if a queen here would attack a queen at `other`:
    /// shared row, shared column, or shared diagonal.
    pub fn conflicts_with(&self, other: &Position) -> bool {
        self.on_same_row(other) || self.on_same_col(other) || self.on_same_diagonal(other)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_row_and_col() {
        let a = Position::new(2, 5);
        assert!(a.on_same_row(&Position::new(2, 0)));
        assert!(a.on_same_col(&Position::new(7, 5)));
        assert!(!a.on_same_row(&Position::new(3, 5)));
    }

    #[test]
    fn test_diagonals_both_directions() {
        let a = Position::new(3, 3);
        assert!(a.on_same_diagonal(&Position::new(0, 0)));
        assert!(a.on_same_diagonal(&Position::new(5, 1)));
        assert!(a.on_same_diagonal(&Position::new(1, 5)));
        assert!(!a.on_same_diagonal(&Position::new(3, 4)));
    }

    #[test]
    fn test_conflicts_with_covers_all_three_lines() {
        let a = Position::new(4, 2);
        assert!(a.conflicts_with(&Position::new(4, 7)));
        assert!(a.conflicts_with(&Position::new(0, 2)));
        assert!(a.conflicts_with(&Position::new(6, 4)));
        assert!(!a.conflicts_with(&Position::new(1, 7)));
    }

    #[test]
    fn test_conflicts_with_self() {
        let a = Position::new(1, 1);
        assert!(a.conflicts_with(&a));
    }
}
