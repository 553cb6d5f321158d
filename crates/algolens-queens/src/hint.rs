//! Conflict-minimizing column hints for assisted play.

use algolens_core::Position;

use crate::board::Queen;

/// Number of current queens a placement at `pos` would conflict with.
pub fn count_conflicts(queens: &[Queen], pos: Position) -> usize {
    queens.iter().filter(|q| q.pos.conflicts_with(&pos)).count()
}

/// The column in `row` minimizing the conflict count; ties break to the
/// first-encountered (lowest) column index.
pub(crate) fn best_column(n: usize, queens: &[Queen], row: usize) -> Option<usize> {
    (0..n).min_by_key(|&col| count_conflicts(queens, Position::new(row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_conflicts() {
        let queens = vec![Queen::new(0, 0), Queen::new(1, 2)];
        assert_eq!(count_conflicts(&queens, Position::new(2, 0)), 1);
        assert_eq!(count_conflicts(&queens, Position::new(2, 2)), 2);
        assert_eq!(count_conflicts(&queens, Position::new(3, 1)), 0);
    }

    #[test]
    fn test_best_column_picks_minimum() {
        let queens = vec![Queen::new(0, 0), Queen::new(1, 2)];
        // Row 3: columns 0 and 2 conflict by column, 1 by nothing.
        assert_eq!(best_column(4, &queens, 3), Some(1));
    }

    #[test]
    fn test_best_column_tie_breaks_low() {
        // Empty board: every column has zero conflicts, so the hint is
        // the lowest column.
        assert_eq!(best_column(8, &[], 0), Some(0));
    }

    #[test]
    fn test_best_column_zero_width_board() {
        assert_eq!(best_column(0, &[], 0), None);
    }
}
