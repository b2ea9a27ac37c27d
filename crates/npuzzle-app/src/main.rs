//! Command-line 8-puzzle solver.
//!
//! # Usage
//!
//! Solve a random demo board:
//!
//! ```sh
//! npuzzle
//! ```
//!
//! Solve a specific board (rows separated by newlines or literal `\n`):
//!
//! ```sh
//! npuzzle --custom "1 2 3\n4 0 6\n7 5 8"
//! ```
//!
//! Read the board from a file and collect every shortest solution:
//!
//! ```sh
//! npuzzle --file board.txt --all
//! ```
//!
//! Reproduce a demo board from its seed:
//!
//! ```sh
//! npuzzle --seed 42
//! ```

use std::{fs, path::PathBuf, process};

use clap::Parser;
use npuzzle_core::Board;
use npuzzle_generator::BoardShuffler;
use npuzzle_solver::{BfsSolver, SolveOutcome, SolveReport};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Initial board as three rows of three tiles, e.g. "1 2 3\n4 0 6\n7 5 8".
    #[arg(long, value_name = "GRID", conflicts_with = "file")]
    custom: Option<String>,

    /// Read the initial board from a file.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Collect every shortest solution instead of stopping at the first.
    #[arg(long)]
    all: bool,

    /// Seed for the demo-board shuffle (fresh entropy if omitted).
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Skip the inversion-parity pre-check and search anyway.
    #[arg(long)]
    skip_solvability_check: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();
    let args = Args::parse();

    let board = match initial_board(&args) {
        Ok(board) => board,
        Err(message) => {
            eprintln!("{message}");
            process::exit(2);
        }
    };

    println!("Initial state of the puzzle:");
    println!("{board}");

    if !args.skip_solvability_check && !board.is_solvable() {
        println!("Puzzle is unsolvable!");
        process::exit(1);
    }

    println!("Solving the puzzle...");
    let solver = if args.all {
        BfsSolver::all_shortest()
    } else {
        BfsSolver::shortest()
    };

    let outcome = match solver.solve(&board) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("search failed: {err}");
            process::exit(1);
        }
    };

    match outcome {
        SolveOutcome::Solved(report) => {
            let stats = report.stats();
            log::info!(
                "expanded {} states, enqueued {}, deepest {}",
                stats.expanded,
                stats.enqueued,
                stats.max_depth
            );
            print_report(&report, args.all);
        }
        SolveOutcome::NoSolution(stats) => {
            log::info!(
                "exhausted component: expanded {} states, enqueued {}",
                stats.expanded,
                stats.enqueued
            );
            println!("No solution found!");
            process::exit(1);
        }
    }
}

fn initial_board(args: &Args) -> Result<Board, String> {
    if let Some(custom) = &args.custom {
        return unescape_newlines(custom)
            .parse()
            .map_err(|err| format!("invalid --custom board: {err}"));
    }
    if let Some(path) = &args.file {
        let text = fs::read_to_string(path)
            .map_err(|err| format!("cannot read {}: {err}", path.display()))?;
        return text
            .parse()
            .map_err(|err| format!("invalid board in {}: {err}", path.display()));
    }

    let shuffler = BoardShuffler::new();
    let shuffled = match args.seed {
        Some(seed) => shuffler.shuffle_with_seed(seed),
        None => shuffler.shuffle(),
    };
    log::debug!("shuffle seed: {}", shuffled.seed);
    Ok(shuffled.board)
}

/// Turns literal `\n` sequences from shell arguments into real newlines.
fn unescape_newlines(s: &str) -> String {
    s.replace("\\n", "\n")
}

fn print_report(report: &SolveReport, all: bool) {
    let best = report.best();
    println!("Solution found in {} steps.", best.length());

    for (i, step) in best.steps().iter().enumerate().skip(1) {
        match step.moved() {
            Some(direction) => println!("Step {i} ({direction}):"),
            None => println!("Step {i}:"),
        }
        println!("{}", step.board());
    }

    if all {
        println!();
        println!(
            "Shortest solutions: {} ({} moves each)",
            report.shortest().len(),
            report.length()
        );
        println!("Solutions recorded: {}", report.discovered().len());
        for (i, solution) in report.discovered().iter().enumerate() {
            println!("  solution {}: {} moves", i + 1, solution.length());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_newlines() {
        assert_eq!(unescape_newlines("1 2 3\\n4 0 6\\n7 5 8"), "1 2 3\n4 0 6\n7 5 8");
        assert_eq!(unescape_newlines("1 2 3\n4 0 6\n7 5 8"), "1 2 3\n4 0 6\n7 5 8");
    }

    #[test]
    fn test_custom_board_parses_with_escaped_newlines() {
        let board: Board = unescape_newlines("1 2 3\\n4 0 6\\n7 5 8").parse().unwrap();
        assert_eq!(board.blank_position(), npuzzle_core::Position::new(1, 1));
    }
}
