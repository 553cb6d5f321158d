//! Derived memory statistics.

use algolens_config::TrieMemoryConfig;
use serde::{Deserialize, Serialize};

use crate::node::NodeId;
use crate::tree::PrefixTree;

/// Node and edge counts plus a modeled byte cost.
///
/// The byte figure is a linear combination of the counts with the
/// configured weights, a teaching heuristic rather than a measurement of
/// real allocator behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub nodes: usize,
    pub edges: usize,
    pub bytes: usize,
}

pub(crate) fn measure(tree: &PrefixTree, weights: &TrieMemoryConfig) -> MemoryStats {
    let mut nodes = 0;
    let mut edges = 0;
    traverse(tree, NodeId::ROOT, &mut nodes, &mut edges);

    MemoryStats {
        nodes,
        edges,
        bytes: nodes * weights.node_bytes + edges * weights.edge_bytes,
    }
}

fn traverse(tree: &PrefixTree, id: NodeId, nodes: &mut usize, edges: &mut usize) {
    *nodes += 1;
    for &child in tree.node(id).children.values() {
        *edges += 1;
        traverse(tree, child, nodes, edges);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree_is_one_node_zero_edges() {
        let tree = PrefixTree::new();
        let stats = tree.memory_usage();
        assert_eq!(stats.nodes, 1);
        assert_eq!(stats.edges, 0);
        assert_eq!(stats.bytes, 100);
    }

    #[test]
    fn test_edges_are_nodes_minus_one() {
        let mut tree = PrefixTree::new();
        tree.insert_batch(&["tea", "ten", "toe"]);

        let stats = tree.memory_usage();
        assert_eq!(stats.edges, stats.nodes - 1);
    }

    #[test]
    fn test_byte_model_uses_configured_weights() {
        let mut config = algolens_config::TrieConfig::default();
        config.memory = TrieMemoryConfig {
            node_bytes: 10,
            edge_bytes: 1,
        };
        let mut tree = PrefixTree::with_config(config);
        tree.insert("ab");

        let stats = tree.memory_usage();
        assert_eq!(stats.nodes, 3);
        assert_eq!(stats.edges, 2);
        assert_eq!(stats.bytes, 32);
    }
}
