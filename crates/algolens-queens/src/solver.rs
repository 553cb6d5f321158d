//! Depth-first backtracking search over board placements.

use algolens_core::Position;
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::board::{Queen, Solution};
use crate::hint;
use crate::stats::SearchStats;
use crate::symmetry::{self, Symmetry};

/// Working placement list; boards the walkthrough exposes stay ≤ 12.
type Working = SmallVec<[Queen; 12]>;

/// Exhaustive N-Queens solver.
///
/// One instance owns one board size, the solutions recorded by the last
/// [`find_all_solutions`](ConstraintSolver::find_all_solutions) run, and
/// the [`SearchStats`] of that run. Validation and hint queries are pure
/// and can be issued at any time against a caller-held placement list.
pub struct ConstraintSolver {
    n: usize,
    solutions: Vec<Solution>,
    stats: SearchStats,
}

impl ConstraintSolver {
    /// Creates a solver for an `n × n` board.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            solutions: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    /// Board size.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Returns true iff `candidate` shares no row, column, or diagonal
    /// with any queen in `queens`. O(k) in the current queen count and
    /// free of side effects; an invalid placement is rejected, never
    /// applied and rolled back.
    pub fn is_valid_placement(&self, queens: &[Queen], candidate: Position) -> bool {
        queens.iter().all(|q| !q.pos.conflicts_with(&candidate))
    }

    /// Every square attacked by a queen at `pos`: its row, column, and
    /// both diagonals, clipped to the board and excluding `pos` itself.
    pub fn attack_squares(&self, pos: Position) -> Vec<Position> {
        let mut attacks = Vec::new();

        for i in 0..self.n {
            if i != pos.col {
                attacks.push(Position::new(pos.row, i));
            }
            if i != pos.row {
                attacks.push(Position::new(i, pos.col));
            }
        }

        let (row, col) = (pos.row as i64, pos.col as i64);
        for i in 1..self.n as i64 {
            let candidates = [
                (row + i, col + i),
                (row + i, col - i),
                (row - i, col + i),
                (row - i, col - i),
            ];
            for (r, c) in candidates {
                if (0..self.n as i64).contains(&r) && (0..self.n as i64).contains(&c) {
                    attacks.push(Position::new(r as usize, c as usize));
                }
            }
        }

        attacks
    }

    /// Enumerates every solution by depth-first backtracking, row by row,
    /// columns tried left to right. Deterministic and exhaustive: no
    /// pruning beyond placement validity and no early exit. Resets and
    /// repopulates [`SearchStats`]. An empty result (e.g. `n = 2` or
    /// `n = 3`) is a normal outcome, not an error.
    pub fn find_all_solutions(&mut self) -> &[Solution] {
        self.solutions.clear();
        self.stats.reset();

        let mut working = Working::new();
        self.backtrack(&mut working, 0);

        info!(
            n = self.n,
            solutions = self.solutions.len(),
            nodes_visited = self.stats.nodes_visited,
            backtracks = self.stats.backtracks,
            "exhaustive search finished"
        );
        &self.solutions
    }

    fn backtrack(&mut self, working: &mut Working, row: usize) {
        self.stats.record_node();

        if row == self.n {
            // Snapshot, never an alias: the working list is about to be
            // popped apart again on the way back up.
            self.solutions.push(Solution::from_queens(working.to_vec()));
            debug!(index = self.solutions.len() - 1, "recorded solution");
            return;
        }

        let mut valid_placements = 0u64;
        for col in 0..self.n {
            let candidate = Position::new(row, col);
            if self.is_valid_placement(working, candidate) {
                valid_placements += 1;
                working.push(Queen::new(row, col));

                self.backtrack(working, row + 1);

                working.pop();
                self.stats.record_backtrack();
            }
        }

        self.stats.record_branching(valid_placements);
    }

    /// Snapshot of the counters from the most recent search.
    pub fn search_stats(&self) -> SearchStats {
        self.stats
    }

    /// Solutions recorded by the most recent search.
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Flags whether `solution` maps onto itself under a 90° rotation or
    /// a horizontal reflection of the board.
    pub fn has_symmetry(&self, solution: &Solution) -> Symmetry {
        symmetry::detect(self.n, solution)
    }

    /// Suggests the column in `row` with the fewest conflicts against the
    /// current queens; ties break to the lowest column index. `None` only
    /// for a zero-width board. Used by assisted play, never by the
    /// exhaustive search.
    pub fn hint_for_row(&self, queens: &[Queen], row: usize) -> Option<usize> {
        hint::best_column(self.n, queens, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algolens_test::queens::{solution_count, UNSOLVABLE_SIZES};

    fn positions(solution: &Solution) -> Vec<Position> {
        solution.queens().iter().map(|q| q.pos).collect()
    }

    #[test]
    fn test_valid_placement_rejects_all_conflict_lines() {
        let solver = ConstraintSolver::new(8);
        let queens = vec![Queen::new(0, 0)];

        assert!(!solver.is_valid_placement(&queens, Position::new(0, 5)));
        assert!(!solver.is_valid_placement(&queens, Position::new(5, 0)));
        assert!(!solver.is_valid_placement(&queens, Position::new(4, 4)));
        assert!(solver.is_valid_placement(&queens, Position::new(1, 3)));
    }

    #[test]
    fn test_valid_placement_on_empty_board() {
        let solver = ConstraintSolver::new(4);
        assert!(solver.is_valid_placement(&[], Position::new(2, 2)));
    }

    #[test]
    fn test_attack_squares_cover_lines_and_stay_on_board() {
        let solver = ConstraintSolver::new(4);
        let attacks = solver.attack_squares(Position::new(1, 1));

        let origin = Position::new(1, 1);
        assert!(!attacks.contains(&origin));
        for pos in &attacks {
            assert!(pos.row < 4 && pos.col < 4);
            assert!(origin.conflicts_with(pos));
        }
        // 3 row + 3 column + 5 diagonal squares around (1, 1) on a 4-board.
        assert_eq!(attacks.len(), 11);
    }

    #[test]
    fn test_known_solution_counts() {
        for n in 4..=8 {
            let mut solver = ConstraintSolver::new(n);
            assert_eq!(
                solver.find_all_solutions().len(),
                solution_count(n),
                "n = {n}"
            );
        }
    }

    #[test]
    fn test_unsolvable_sizes_yield_empty_not_error() {
        for &n in UNSOLVABLE_SIZES {
            let mut solver = ConstraintSolver::new(n);
            assert!(solver.find_all_solutions().is_empty());
        }
    }

    #[test]
    fn test_solutions_are_pairwise_non_attacking() {
        let mut solver = ConstraintSolver::new(6);
        for solution in solver.find_all_solutions() {
            let ps = positions(solution);
            assert_eq!(ps.len(), 6);
            for (i, a) in ps.iter().enumerate() {
                for b in &ps[i + 1..] {
                    assert!(!a.conflicts_with(b), "{a} attacks {b}");
                }
            }
        }
    }

    #[test]
    fn test_solutions_are_one_per_row_in_order() {
        let mut solver = ConstraintSolver::new(5);
        for solution in solver.find_all_solutions() {
            for (row, queen) in solution.queens().iter().enumerate() {
                assert_eq!(queen.row(), row);
            }
        }
    }

    #[test]
    fn test_stats_reset_between_runs_and_deterministic() {
        let mut solver = ConstraintSolver::new(6);
        solver.find_all_solutions();
        let first = solver.search_stats();
        solver.find_all_solutions();
        let second = solver.search_stats();

        assert_eq!(first, second);
        assert!(first.nodes_visited > 0);
        assert!(first.backtracks > 0);
        assert!(first.branching_factor.is_finite());
        assert!(first.branching_factor >= 0.0);
    }

    #[test]
    fn test_solutions_accessor_reflects_last_run() {
        let mut solver = ConstraintSolver::new(4);
        assert!(solver.solutions().is_empty());

        let found = solver.find_all_solutions().to_vec();
        assert_eq!(solver.solutions(), found.as_slice());
        assert_eq!(solver.solutions().len(), 2);
    }

    #[test]
    fn test_trivial_board() {
        let mut solver = ConstraintSolver::new(1);
        let solutions = solver.find_all_solutions();
        assert_eq!(solutions.len(), 1);
        assert_eq!(positions(&solutions[0]), vec![Position::new(0, 0)]);
    }
}
