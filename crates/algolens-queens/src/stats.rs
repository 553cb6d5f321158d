//! Search statistics collection.
//!
//! Counters are reset at the start of every full search and snapshotted
//! by value for the presentation layer.

use serde::{Deserialize, Serialize};

/// Counters describing the most recent exhaustive search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes expanded, including the root call and solution leaves.
    pub nodes_visited: u64,
    /// Undo operations performed while unwinding tried placements.
    pub backtracks: u64,
    /// Running estimate of valid placements per expanded row, kept as an
    /// exponential moving average rather than an exact mean.
    pub branching_factor: f64,
}

impl SearchStats {
    /// Resets all counters to their initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn record_node(&mut self) {
        self.nodes_visited += 1;
    }

    pub(crate) fn record_backtrack(&mut self) {
        self.backtracks += 1;
    }

    /// Folds the number of valid placements seen at one row into the
    /// moving average. Rows with no valid placement are not folded in.
    pub(crate) fn record_branching(&mut self, valid_placements: u64) {
        if valid_placements > 0 {
            self.branching_factor = (self.branching_factor + valid_placements as f64) / 2.0;
        }
    }
}
