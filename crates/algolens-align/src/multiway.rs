//! Multi-sequence dispatch and the pairwise-reduction fallback.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AlignError;
use crate::pairwise::{self, DpTable2};
use crate::threeway::{self, DpTable3};

/// A recorded three-way match transition: the cube cell the match came
/// from, the cell it produced, and the LCS length at that cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub from: [usize; 3],
    pub to: [usize; 3],
    pub value: u32,
}

/// Result of a multi-sequence solve.
///
/// Exactly one of `tables` / `table3` is populated for the 2- and 3-way
/// cases; the 4+ fallback fills `tables` with every intermediate
/// pairwise table of the reduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiAlignment {
    /// Pairwise tables: one for 2 sequences, one per reduction step for 4+.
    pub tables: Vec<DpTable2>,
    /// The full cube for the 3-sequence case.
    pub table3: Option<DpTable3>,
    pub lcs: String,
    /// Match transitions, populated only by the 3-way solve.
    pub dependencies: Vec<Dependency>,
    /// True when the pairwise-reduction fallback produced this result.
    /// The reduction is *not* guaranteed to find the true N-way LCS;
    /// callers surfacing the answer should say so.
    pub approximate: bool,
}

/// Dispatches on sequence count: 2 delegates to the pairwise solve,
/// 3 runs the true cube DP, 4+ folds the pairwise solve across the list
/// (each step's LCS becomes the next left-hand input) and flags the
/// result [`approximate`](MultiAlignment::approximate).
pub fn solve(sequences: &[String]) -> Result<MultiAlignment, AlignError> {
    match sequences.len() {
        got @ 0..=1 => Err(AlignError::TooFewSequences { got }),
        2 => {
            let pair = pairwise::solve(&sequences[0], &sequences[1]);
            Ok(MultiAlignment {
                tables: vec![pair.table],
                table3: None,
                lcs: pair.lcs,
                dependencies: Vec::new(),
                approximate: false,
            })
        }
        3 => {
            let three = threeway::solve(&sequences[0], &sequences[1], &sequences[2]);
            Ok(MultiAlignment {
                tables: Vec::new(),
                table3: Some(three.table),
                lcs: three.lcs,
                dependencies: three.dependencies,
                approximate: false,
            })
        }
        count => {
            debug!(count, "falling back to pairwise reduction");
            Ok(reduce_pairwise(sequences))
        }
    }
}

fn reduce_pairwise(sequences: &[String]) -> MultiAlignment {
    let mut current = sequences[0].clone();
    let mut tables = Vec::new();

    for next in &sequences[1..] {
        let pair = pairwise::solve(&current, next);
        tables.push(pair.table);
        current = pair.lcs;
    }

    MultiAlignment {
        tables,
        table3: None,
        lcs: current,
        dependencies: Vec::new(),
        approximate: true,
    }
}
