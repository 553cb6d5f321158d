//! Trie Demo
//!
//! Inserts the words given on the command line (default a small fruit
//! list), prints the compression report, answers a few queries, and
//! dumps the computed render layout.

use algolens::prelude::*;
use algolens::NodeId;
use tracing_subscriber::EnvFilter;

fn print_layout(tree: &PrefixTree, id: NodeId) {
    let node = tree.node(id);
    let label = node.ch.map(String::from).unwrap_or_else(|| "·".into());
    println!(
        "{}{} at ({:.1}, {:.1}){}",
        "  ".repeat(node.depth),
        label,
        node.x,
        node.y,
        if node.is_end_of_word { "  [word]" } else { "" }
    );
    for &child in node.children.values() {
        print_layout(tree, child);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = EngineConfig::load("algolens.toml").unwrap_or_default();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let words: Vec<&str> = if args.is_empty() {
        vec!["apple", "apricot", "banana", "band", "bat"]
    } else {
        args.iter().map(String::as_str).collect()
    };

    let mut tree = PrefixTree::with_config(config.trie);
    let report = tree.insert_batch(&words);
    println!(
        "Inserted {} words into {} nodes ({} character slots shared, ratio {:.2}).\n",
        words.len(),
        report.total_nodes,
        report.shared_nodes,
        report.compression_ratio
    );

    let probe: String = words[0].chars().take(2).collect();
    let probe = probe.as_str();
    let outcome = tree.starts_with(probe);
    println!("Completions of {probe:?}: {:?}", outcome.suggestions);

    let stats = tree.memory_usage();
    println!(
        "Memory model: {} nodes, {} edges, ~{} bytes.\n",
        stats.nodes, stats.edges, stats.bytes
    );

    tree.compute_layout();
    println!("Layout:");
    print_layout(&tree, NodeId::ROOT);
}
