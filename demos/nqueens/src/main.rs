//! N-Queens Demo
//!
//! Enumerates every solution for a board size given on the command line
//! (default 6), prints the first few boards, and reports the search
//! statistics and symmetry flags the walkthrough UI animates.

use algolens::prelude::*;
use algolens::Solution;
use tracing_subscriber::EnvFilter;

fn print_board(solution: &Solution) {
    let n = solution.size();
    println!("{}", "-".repeat(n * 2 + 1));
    for row in 0..n {
        print!("|");
        for col in 0..n {
            let queen_here = solution
                .queens()
                .iter()
                .any(|q| q.row() == row && q.col() == col);
            print!("{}", if queen_here { "Q|" } else { " |" });
        }
        println!();
    }
    println!("{}", "-".repeat(n * 2 + 1));
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = EngineConfig::load("algolens.toml").unwrap_or_default();
    let n: usize = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(6);
    if n > config.queens.max_board_size {
        eprintln!(
            "board size {n} exceeds the configured limit of {}",
            config.queens.max_board_size
        );
        std::process::exit(1);
    }

    println!("Enumerating all {n}-queens solutions...\n");
    let mut solver = ConstraintSolver::new(n);
    solver.find_all_solutions();
    let solutions = solver.solutions();

    for (index, solution) in solutions.iter().take(3).enumerate() {
        println!("Solution {}:", index + 1);
        print_board(solution);
        let symmetry = solver.has_symmetry(solution);
        println!(
            "  rotation-symmetric: {}, reflection-symmetric: {}\n",
            symmetry.rotation, symmetry.reflection
        );
    }
    if solutions.len() > 3 {
        println!("... and {} more.\n", solutions.len() - 3);
    }

    let stats = solver.search_stats();
    println!("Found {} solution(s).", solutions.len());
    println!(
        "Visited {} nodes, backtracked {} times, branching factor ~{:.2}.",
        stats.nodes_visited, stats.backtracks, stats.branching_factor
    );

    if let Some(col) = solver.hint_for_row(&[], 0) {
        println!("Hint: with an empty board, start row 0 at column {col}.");
    }
}
