//! Two-sequence LCS with full table and path reconstruction.

use algolens_core::Matrix2;
use serde::{Deserialize, Serialize};

/// The `(m+1) × (n+1)` LCS table. `table[(i, j)]` is the LCS length of
/// the first `i` chars of the left sequence and the first `j` chars of
/// the right one; row 0 and column 0 are all zeros and every row and
/// column is non-decreasing.
pub type DpTable2 = Matrix2<u32>;

/// One cell of the reconstruction walk. `ch` is present only when the
/// step corresponds to a matched character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    pub row: usize,
    pub col: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ch: Option<char>,
}

/// Result of a two-sequence solve. Recomputed per call, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairwiseAlignment {
    pub table: DpTable2,
    pub lcs: String,
    /// Walk cells ordered from the top-left end of the walk down to
    /// `(m, n)`, produced by a backward walk with prepend semantics.
    pub path: Vec<PathStep>,
}

/// Builds the table bottom-up and reconstructs one optimal alignment.
///
/// The traceback walks from `(m, n)` to `(0, 0)`: on a character match
/// it prepends the character and steps diagonally; otherwise it steps
/// toward the larger of `table[(i-1, j)]` and `table[(i, j-1)]`,
/// preferring the row-decrement ("up") direction on ties. The tie-break
/// is deliberate and keeps reconstructed output reproducible.
pub fn solve(a: &str, b: &str) -> PairwiseAlignment {
    let left: Vec<char> = a.chars().collect();
    let right: Vec<char> = b.chars().collect();
    let (m, n) = (left.len(), right.len());

    let mut table = DpTable2::filled(m + 1, n + 1, 0);
    for i in 1..=m {
        for j in 1..=n {
            table[(i, j)] = if left[i - 1] == right[j - 1] {
                table[(i - 1, j - 1)] + 1
            } else {
                table[(i - 1, j)].max(table[(i, j - 1)])
            };
        }
    }

    let mut path = Vec::new();
    let mut lcs = Vec::new();
    let (mut i, mut j) = (m, n);
    while i > 0 && j > 0 {
        if left[i - 1] == right[j - 1] {
            lcs.push(left[i - 1]);
            path.push(PathStep {
                row: i,
                col: j,
                ch: Some(left[i - 1]),
            });
            i -= 1;
            j -= 1;
        } else if table[(i - 1, j)] >= table[(i, j - 1)] {
            path.push(PathStep {
                row: i,
                col: j,
                ch: None,
            });
            i -= 1;
        } else {
            path.push(PathStep {
                row: i,
                col: j,
                ch: None,
            });
            j -= 1;
        }
    }
    lcs.reverse();
    path.reverse();

    PairwiseAlignment {
        table,
        lcs: lcs.into_iter().collect(),
        path,
    }
}
