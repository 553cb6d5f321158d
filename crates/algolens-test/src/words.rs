//! Word lists for trie tests.

/// A small list with heavy prefix sharing around "ba-" and "ap-".
pub const FRUIT_WORDS: &[&str] = &[
    "apple", "apricot", "banana", "band", "bandana", "bat", "cherry",
];

/// Words sharing the "in-" prefix, for compression-ratio checks.
pub const IN_WORDS: &[&str] = &["in", "inn", "ink", "input", "inside", "insight"];
