//! Algolens Trie - Prefix tree engine
//!
//! Incremental storage of a word set with shared-prefix compression,
//! membership and prefix queries, derived memory statistics, and a 2D
//! layout for rendering.
//!
//! Nodes live in an arena and reference each other through [`NodeId`]
//! handles, so the presentation layer can hold onto returned paths and
//! resolve them back into nodes at render time.
//!
//! # Example
//!
//! ```
//! use algolens_trie::PrefixTree;
//!
//! let mut tree = PrefixTree::new();
//! tree.insert("cat");
//! tree.insert("car");
//! assert!(tree.search("cat").found);
//! assert!(!tree.search("ca").found);
//! assert_eq!(tree.starts_with("ca").suggestions.len(), 2);
//! ```

pub mod layout;
pub mod memory;
pub mod node;
pub mod tree;

pub use memory::MemoryStats;
pub use node::{NodeId, TrieNode};
pub use tree::{
    BatchReport, InsertOutcome, PrefixOutcome, PrefixTree, SearchFailure, SearchOutcome,
};
