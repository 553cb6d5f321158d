//! Known N-Queens answers.

/// Board sizes with no solution at all. An empty enumeration result for
/// these is correct behavior, not a failure.
pub const UNSOLVABLE_SIZES: &[usize] = &[2, 3];

/// Total number of distinct solutions for board size `n` (OEIS A000170).
///
/// # Panics
///
/// Panics for sizes outside `1..=10`; tests should not run the
/// exhaustive search beyond that.
pub fn solution_count(n: usize) -> usize {
    match n {
        1 => 1,
        2 | 3 => 0,
        4 => 2,
        5 => 10,
        6 => 4,
        7 => 40,
        8 => 92,
        9 => 352,
        10 => 724,
        _ => panic!("no fixture for board size {n}"),
    }
}
