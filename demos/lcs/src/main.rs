//! LCS Demo
//!
//! Aligns the sequences given on the command line (default a classic
//! pair), prints the DP table for the two-sequence case, and reports the
//! reconstruction path and multi-way result.

use algolens::prelude::*;
use algolens::PairwiseAlignment;
use tracing_subscriber::EnvFilter;

fn print_table(alignment: &PairwiseAlignment, a: &str, b: &str) {
    let (rows, cols) = alignment.table.shape();

    print!("      ");
    for ch in b.chars() {
        print!("{ch:>3}");
    }
    println!();

    let left: Vec<char> = a.chars().collect();
    for row in 0..rows {
        match row {
            0 => print!("   "),
            r => print!("{:>3}", left[r - 1]),
        }
        for col in 0..cols {
            print!("{:>3}", alignment.table[(row, col)]);
        }
        println!();
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = EngineConfig::load("algolens.toml").unwrap_or_default();
    let mut sequences: Vec<String> = std::env::args().skip(1).collect();
    if sequences.is_empty() {
        sequences = vec!["ABCBDAB".into(), "BDCABA".into()];
    }
    if sequences.len() > config.align.max_sequences
        || sequences
            .iter()
            .any(|s| s.chars().count() > config.align.max_sequence_len)
    {
        eprintln!("input exceeds the configured alignment limits");
        std::process::exit(1);
    }

    let engine = SequenceAlignmentEngine::new();

    if sequences.len() == 2 {
        let alignment = engine.solve_pair(&sequences[0], &sequences[1]);
        println!("DP table for {:?} vs {:?}:\n", sequences[0], sequences[1]);
        print_table(&alignment, &sequences[0], &sequences[1]);
        println!("\nLCS: {:?} (length {})", alignment.lcs, alignment.lcs.chars().count());
        println!("Path: {} steps, {} matches", alignment.path.len(),
            alignment.path.iter().filter(|s| s.ch.is_some()).count());
        println!(
            "Space-optimized length check: {}",
            engine.lcs_length(&sequences[0], &sequences[1])
        );
        return;
    }

    match engine.solve_multi(&sequences) {
        Ok(result) => {
            println!("LCS of {} sequences: {:?}", sequences.len(), result.lcs);
            if result.approximate {
                println!("(pairwise-reduction approximation, not guaranteed optimal)");
            }
            if !result.dependencies.is_empty() {
                println!("{} match transitions recorded.", result.dependencies.len());
            }
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
