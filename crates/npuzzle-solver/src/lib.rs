//! Breadth-first search engine for the 8-puzzle.
//!
//! [`BfsSolver`] searches the reachable state space (9!/2 = 181,440 boards)
//! for shortest move sequences to the solved configuration. One engine
//! supports two modes selected through [`SearchConfig`]:
//!
//! - [`SearchMode::Shortest`] stops at the first goal reached, which BFS
//!   guarantees is a shortest solution.
//! - [`SearchMode::AllShortest`] keeps draining the frontier that produced
//!   the first goal, collecting every minimum-depth solution plus a capped
//!   list of all solutions discovered.
//!
//! The engine never checks solvability itself; callers gate with
//! [`Board::is_solvable`] when they want to avoid exhausting an unreachable
//! component (the depth ceiling bounds that exploration either way).
//!
//! [`Board::is_solvable`]: npuzzle_core::Board::is_solvable
//!
//! # Examples
//!
//! ```
//! use npuzzle_core::Board;
//! use npuzzle_solver::{BfsSolver, SolveOutcome};
//!
//! let board = Board::from_rows([[1, 2, 3], [4, 5, 6], [7, 0, 8]])?;
//! let solver = BfsSolver::shortest();
//!
//! match solver.solve(&board)? {
//!     SolveOutcome::Solved(report) => assert_eq!(report.length(), 1),
//!     SolveOutcome::NoSolution(_) => unreachable!("board is solvable"),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{error::*, search::*, trace::*};

mod error;
mod node;
mod search;
mod trace;
