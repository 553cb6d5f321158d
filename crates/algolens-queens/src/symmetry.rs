//! Symmetry detection over recorded solutions.
//!
//! A solution is compared against its transforms as position *sets*, so
//! the row ordering the search produced does not matter.

use algolens_core::Position;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::board::Solution;

/// Which self-symmetries a solution exhibits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symmetry {
    /// Fixed under a 90° clockwise rotation of the board.
    pub rotation: bool,
    /// Fixed under a horizontal (left-right) reflection.
    pub reflection: bool,
}

pub(crate) fn detect(n: usize, solution: &Solution) -> Symmetry {
    let original = solution.position_set();
    Symmetry {
        rotation: original == transform(n, solution, rotate_90),
        reflection: original == transform(n, solution, reflect_horizontal),
    }
}

fn transform(
    n: usize,
    solution: &Solution,
    f: fn(usize, Position) -> Position,
) -> BTreeSet<Position> {
    solution.queens().iter().map(|q| f(n, q.pos)).collect()
}

/// `(r, c) -> (c, n-1-r)`.
fn rotate_90(n: usize, pos: Position) -> Position {
    Position::new(pos.col, n - 1 - pos.row)
}

/// `(r, c) -> (r, n-1-c)`.
fn reflect_horizontal(n: usize, pos: Position) -> Position {
    Position::new(pos.row, n - 1 - pos.col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Queen;

    fn solution_of(cols: &[usize]) -> Solution {
        Solution::from_queens(
            cols.iter()
                .enumerate()
                .map(|(row, &col)| Queen::new(row, col))
                .collect(),
        )
    }

    #[test]
    fn test_single_queen_board_is_fully_symmetric() {
        let s = solution_of(&[0]);
        let sym = detect(1, &s);
        assert!(sym.rotation);
        assert!(sym.reflection);
    }

    #[test]
    fn test_four_queens_solutions_are_mirror_images_not_self_mirrors() {
        // The two 4-queens solutions [1, 3, 0, 2] and [2, 0, 3, 1] reflect
        // onto each other, so neither is fixed by reflection alone.
        let a = solution_of(&[1, 3, 0, 2]);
        let b = solution_of(&[2, 0, 3, 1]);

        assert!(!detect(4, &a).reflection);
        assert!(!detect(4, &b).reflection);

        let reflected: BTreeSet<Position> = a
            .queens()
            .iter()
            .map(|q| reflect_horizontal(4, q.pos))
            .collect();
        assert_eq!(reflected, b.position_set());
    }

    #[test]
    fn test_rotation_fixed_point() {
        // [1, 3, 0, 2] maps onto itself under (r, c) -> (c, n-1-r):
        // (0,1)->(1,3)->(3,2)->(2,0)->(0,1).
        let a = solution_of(&[1, 3, 0, 2]);
        assert!(detect(4, &a).rotation);
    }

    #[test]
    fn test_rotation_non_fixed_point() {
        // The 5-queens solution [0, 2, 4, 1, 3] rotates (0,0) to (0,4),
        // which it does not occupy.
        let a = solution_of(&[0, 2, 4, 1, 3]);
        assert!(!detect(5, &a).rotation);
    }
}
