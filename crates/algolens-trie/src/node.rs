//! Arena nodes and handles.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Handle into the tree's node arena.
///
/// Handles stay valid until [`clear`](crate::PrefixTree::clear); there
/// is no per-word deletion, so nodes are never removed individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root node's handle. The root carries no character and sits at
    /// depth 0.
    pub const ROOT: NodeId = NodeId(0);
}

/// One node of the prefix tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrieNode {
    pub id: NodeId,
    /// `None` only for the root.
    pub ch: Option<char>,
    /// Children keyed by edge character; `BTreeMap` makes traversal
    /// order deterministic (lexicographic), though callers must not
    /// rely on suggestion ordering.
    pub children: BTreeMap<char, NodeId>,
    pub is_end_of_word: bool,
    /// Characters on the path from the root; root is 0.
    pub depth: usize,
    /// Layout coordinates, written by
    /// [`compute_layout`](crate::PrefixTree::compute_layout); never read
    /// by query logic.
    pub x: f64,
    pub y: f64,
}

impl TrieNode {
    pub(crate) fn root() -> Self {
        Self {
            id: NodeId::ROOT,
            ch: None,
            children: BTreeMap::new(),
            is_end_of_word: false,
            depth: 0,
            x: 0.0,
            y: 0.0,
        }
    }

    pub(crate) fn child_of(id: NodeId, ch: char, parent_depth: usize) -> Self {
        Self {
            id,
            ch: Some(ch),
            children: BTreeMap::new(),
            is_end_of_word: false,
            depth: parent_depth + 1,
            x: 0.0,
            y: 0.0,
        }
    }
}
