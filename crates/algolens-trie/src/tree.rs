//! The prefix tree and its query operations.

use algolens_config::TrieConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout;
use crate::memory::{self, MemoryStats};
use crate::node::{NodeId, TrieNode};

/// Result of one insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertOutcome {
    /// Every node touched on the walk, root first, terminal last.
    pub path: Vec<NodeId>,
    /// Nodes created by this call; empty when the word was already
    /// present (insertion is idempotent).
    pub new_nodes: Vec<NodeId>,
}

/// Where a failed walk stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFailure {
    /// Last node reached before the walk diverged.
    pub node: NodeId,
    /// The character with no outgoing edge.
    pub ch: char,
    /// Index of that character in the queried word.
    pub index: usize,
}

/// Result of a membership query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// True only if the whole word was consumed and the final node is
    /// marked end-of-word; a stored word's strict prefix is not found.
    pub found: bool,
    pub path: Vec<NodeId>,
    /// Present only when the walk diverged mid-word; absent for the
    /// "full prefix exists but is not a word" case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_at: Option<SearchFailure>,
}

/// Result of a prefix query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixOutcome {
    pub has_prefix: bool,
    pub path: Vec<NodeId>,
    /// Stored completions under the prefix, depth-first, capped at the
    /// configured limit. Ordering is traversal order; callers must not
    /// rely on it.
    pub suggestions: Vec<String>,
}

/// Summary of a batch insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Node count after the batch, root included.
    pub total_nodes: usize,
    /// Character insertions avoided by prefix sharing, measured against
    /// a naive per-word storage estimate.
    pub shared_nodes: usize,
    /// Final node count over the naive estimate; 1.0 for an empty batch.
    pub compression_ratio: f64,
}

/// Arena-backed prefix tree.
pub struct PrefixTree {
    arena: Vec<TrieNode>,
    config: TrieConfig,
}

impl PrefixTree {
    /// Creates an empty tree (root only) with default tunables.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates an empty tree with the given tunables.
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            arena: vec![TrieNode::root()],
            config,
        }
    }

    /// The root node.
    pub fn root(&self) -> &TrieNode {
        &self.arena[NodeId::ROOT.0]
    }

    /// Resolves a handle returned by a previous operation.
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.arena[id.0]
    }

    /// Number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// True when only the root exists.
    pub fn is_empty(&self) -> bool {
        self.arena.len() == 1
    }

    /// Inserts a word, walking and extending the tree one character at a
    /// time. Re-inserting an existing word revisits the same path and
    /// creates no nodes.
    pub fn insert(&mut self, word: &str) -> InsertOutcome {
        let mut path = vec![NodeId::ROOT];
        let mut new_nodes = Vec::new();
        let mut current = NodeId::ROOT;

        for ch in word.chars() {
            let existing = self.arena[current.0].children.get(&ch).copied();
            let next = match existing {
                Some(child) => child,
                None => {
                    let id = NodeId(self.arena.len());
                    let depth = self.arena[current.0].depth;
                    self.arena.push(TrieNode::child_of(id, ch, depth));
                    self.arena[current.0].children.insert(ch, id);
                    new_nodes.push(id);
                    id
                }
            };
            current = next;
            path.push(current);
        }

        self.arena[current.0].is_end_of_word = true;
        InsertOutcome { path, new_nodes }
    }

    /// Membership query. See [`SearchOutcome`] for the exact semantics
    /// of `found` and `failed_at`.
    pub fn search(&self, word: &str) -> SearchOutcome {
        let mut path = vec![NodeId::ROOT];
        let mut current = NodeId::ROOT;

        for (index, ch) in word.chars().enumerate() {
            match self.arena[current.0].children.get(&ch) {
                Some(&child) => {
                    current = child;
                    path.push(current);
                }
                None => {
                    return SearchOutcome {
                        found: false,
                        path,
                        failed_at: Some(SearchFailure {
                            node: current,
                            ch,
                            index,
                        }),
                    }
                }
            }
        }

        SearchOutcome {
            found: self.arena[current.0].is_end_of_word,
            path,
            failed_at: None,
        }
    }

    /// Prefix query with capped depth-first suggestions.
    pub fn starts_with(&self, prefix: &str) -> PrefixOutcome {
        let mut path = vec![NodeId::ROOT];
        let mut current = NodeId::ROOT;

        for ch in prefix.chars() {
            match self.arena[current.0].children.get(&ch) {
                Some(&child) => {
                    current = child;
                    path.push(current);
                }
                None => {
                    return PrefixOutcome {
                        has_prefix: false,
                        path,
                        suggestions: Vec::new(),
                    }
                }
            }
        }

        let mut suggestions = Vec::new();
        self.collect_words(current, prefix, self.config.suggestion_limit, &mut suggestions);
        PrefixOutcome {
            has_prefix: true,
            path,
            suggestions,
        }
    }

    /// Every stored word, uncapped, in traversal order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::new();
        self.collect_words(NodeId::ROOT, "", usize::MAX, &mut words);
        words
    }

    fn collect_words(&self, id: NodeId, prefix: &str, limit: usize, out: &mut Vec<String>) {
        if out.len() >= limit {
            return;
        }
        let node = &self.arena[id.0];
        if node.is_end_of_word {
            out.push(prefix.to_string());
        }
        for (&ch, &child) in &node.children {
            let mut next = String::with_capacity(prefix.len() + ch.len_utf8());
            next.push_str(prefix);
            next.push(ch);
            self.collect_words(child, &next, limit, out);
        }
    }

    /// Node/edge counts and the modeled byte cost, recomputed by a full
    /// traversal.
    pub fn memory_usage(&self) -> MemoryStats {
        memory::measure(self, &self.config.memory)
    }

    /// Assigns `(x, y)` to every node for rendering; queries never read
    /// these coordinates.
    pub fn compute_layout(&mut self) {
        let geometry = self.config.layout.clone();
        layout::assign(&mut self.arena, &geometry);
    }

    /// Inserts every word in sequence and reports how much storage the
    /// shared prefixes saved versus storing each word on its own chain.
    pub fn insert_batch(&mut self, words: &[&str]) -> BatchReport {
        let before = self.node_count();

        for word in words {
            self.insert(word);
        }

        let after = self.node_count();
        let would_be_nodes: usize =
            words.iter().map(|w| w.chars().count()).sum::<usize>() + words.len();
        let created = after - before;
        let report = BatchReport {
            total_nodes: after,
            shared_nodes: would_be_nodes.saturating_sub(created),
            compression_ratio: if would_be_nodes > 0 {
                after as f64 / would_be_nodes as f64
            } else {
                1.0
            },
        };

        debug!(
            words = words.len(),
            created,
            shared = report.shared_nodes,
            "batch insert finished"
        );
        report
    }

    /// Resets the tree to its empty state: a fresh root, every handle
    /// from before the clear invalidated.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.arena.push(TrieNode::root());
    }
}

impl Default for PrefixTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algolens_test::words::FRUIT_WORDS;

    #[test]
    fn test_insert_reports_path_and_new_nodes() {
        let mut tree = PrefixTree::new();
        let outcome = tree.insert("cat");

        assert_eq!(outcome.path.len(), 4); // root + c + a + t
        assert_eq!(outcome.path[0], NodeId::ROOT);
        assert_eq!(outcome.new_nodes.len(), 3);
        assert!(tree.node(*outcome.path.last().unwrap()).is_end_of_word);
    }

    #[test]
    fn test_insert_shares_prefix_nodes() {
        let mut tree = PrefixTree::new();
        tree.insert("cat");
        let outcome = tree.insert("car");

        // "ca" is shared; only 'r' is new.
        assert_eq!(outcome.new_nodes.len(), 1);
        assert_eq!(tree.node_count(), 5);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut tree = PrefixTree::new();
        let first = tree.insert("loop");
        let nodes = tree.memory_usage().nodes;

        let second = tree.insert("loop");
        assert!(second.new_nodes.is_empty());
        assert_eq!(second.path, first.path);
        assert_eq!(tree.memory_usage().nodes, nodes);
    }

    #[test]
    fn test_search_found_only_on_end_of_word() {
        let mut tree = PrefixTree::new();
        tree.insert("cart");

        assert!(tree.search("cart").found);

        // "car" exists as a chain but is not a stored word, and the walk
        // itself did not fail.
        let prefix_only = tree.search("car");
        assert!(!prefix_only.found);
        assert!(prefix_only.failed_at.is_none());
    }

    #[test]
    fn test_search_reports_divergence_point() {
        let mut tree = PrefixTree::new();
        tree.insert("cart");

        let outcome = tree.search("cargo");
        assert!(!outcome.found);
        let failure = outcome.failed_at.expect("walk must diverge at 'g'");
        assert_eq!(failure.ch, 'g');
        assert_eq!(failure.index, 3);
        assert_eq!(tree.node(failure.node).ch, Some('r'));
    }

    #[test]
    fn test_empty_word_round_trip() {
        let mut tree = PrefixTree::new();
        assert!(!tree.search("").found);
        tree.insert("");
        assert!(tree.search("").found);
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_starts_with_suggestions() {
        let mut tree = PrefixTree::new();
        tree.insert_batch(FRUIT_WORDS);

        let outcome = tree.starts_with("ba");
        assert!(outcome.has_prefix);
        for word in &outcome.suggestions {
            assert!(word.starts_with("ba"));
            assert!(FRUIT_WORDS.contains(&word.as_str()));
        }
    }

    #[test]
    fn test_starts_with_missing_prefix() {
        let mut tree = PrefixTree::new();
        tree.insert("apple");

        let outcome = tree.starts_with("b");
        assert!(!outcome.has_prefix);
        assert!(outcome.suggestions.is_empty());
        assert_eq!(outcome.path, vec![NodeId::ROOT]);
    }

    #[test]
    fn test_suggestion_cap() {
        let mut tree = PrefixTree::new();
        // 26 one-letter extensions under "x".
        for c in 'a'..='z' {
            tree.insert(&format!("x{c}"));
        }

        let outcome = tree.starts_with("x");
        assert_eq!(outcome.suggestions.len(), 10);
    }

    #[test]
    fn test_configured_suggestion_limit() {
        let mut config = TrieConfig::default();
        config.suggestion_limit = 2;
        let mut tree = PrefixTree::with_config(config);
        tree.insert_batch(&["ant", "any", "and"]);

        assert_eq!(tree.starts_with("an").suggestions.len(), 2);
    }

    #[test]
    fn test_words_returns_everything() {
        let mut tree = PrefixTree::new();
        tree.insert_batch(FRUIT_WORDS);

        let mut words = tree.words();
        words.sort();
        let mut expected: Vec<String> = FRUIT_WORDS.iter().map(|w| w.to_string()).collect();
        expected.sort();
        assert_eq!(words, expected);
    }

    #[test]
    fn test_batch_report_compression() {
        let mut tree = PrefixTree::new();
        let report = tree.insert_batch(&["car", "cart", "care"]);

        // Chains: c-a-r (+1 node each for 't' and 'e') = 5 + root = 6.
        assert_eq!(report.total_nodes, 6);
        // Naive storage: 3+4+4 chars + 3 terminators = 14; created 5.
        assert_eq!(report.shared_nodes, 9);
        assert!((report.compression_ratio - 6.0 / 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_batch() {
        let mut tree = PrefixTree::new();
        let report = tree.insert_batch(&[]);
        assert_eq!(report.total_nodes, 1);
        assert_eq!(report.shared_nodes, 0);
        assert_eq!(report.compression_ratio, 1.0);
    }

    #[test]
    fn test_clear_returns_to_empty_state() {
        let mut tree = PrefixTree::new();
        tree.insert_batch(FRUIT_WORDS);
        assert!(!tree.is_empty());

        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.memory_usage().nodes, 1);
        assert!(!tree.search("apple").found);
    }
}
