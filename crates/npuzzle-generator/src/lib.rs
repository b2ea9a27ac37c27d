//! Demo-board generation by random walks from the solved board.
//!
//! A shuffled board is produced by applying a fixed number of uniformly
//! random legal moves to the solved configuration. Moves are reversible, so
//! every board generated this way is reachable (and therefore solvable) by
//! construction; no parity check is needed.
//!
//! Shuffling is driven by a seeded PRNG so demo boards can be reproduced
//! from their seed.
//!
//! # Examples
//!
//! ```
//! use npuzzle_generator::BoardShuffler;
//!
//! let shuffler = BoardShuffler::new();
//! let shuffled = shuffler.shuffle_with_seed(42);
//!
//! assert!(shuffled.board.is_solvable());
//! assert_eq!(shuffled.seed, 42);
//!
//! // The same seed always produces the same board
//! assert_eq!(shuffler.shuffle_with_seed(42).board, shuffled.board);
//! ```

use npuzzle_core::{Board, Move};
use rand::{RngExt, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// Number of random moves applied when shuffling.
pub const SHUFFLE_MOVES: usize = 100;

/// A board produced by [`BoardShuffler`], with the seed that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffledBoard {
    /// The shuffled board; always solvable.
    pub board: Board,
    /// The PRNG seed that produced it.
    pub seed: u64,
}

/// Produces reachable demo boards by random walks off the solved board.
///
/// # Examples
///
/// ```
/// use npuzzle_generator::BoardShuffler;
///
/// let shuffled = BoardShuffler::new().shuffle();
/// assert!(shuffled.board.is_solvable());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardShuffler {
    moves: usize,
}

impl BoardShuffler {
    /// Creates a shuffler applying [`SHUFFLE_MOVES`] random moves.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_moves(SHUFFLE_MOVES)
    }

    /// Creates a shuffler applying a custom number of random moves.
    #[must_use]
    pub const fn with_moves(moves: usize) -> Self {
        Self { moves }
    }

    /// Shuffles with a fresh entropy seed.
    #[must_use]
    pub fn shuffle(&self) -> ShuffledBoard {
        self.shuffle_with_seed(rand::rng().random())
    }

    /// Shuffles with an explicit seed, deterministically.
    #[must_use]
    pub fn shuffle_with_seed(&self, seed: u64) -> ShuffledBoard {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let mut board = Board::SOLVED;
        for _ in 0..self.moves {
            let moves: Vec<Move> = board.legal_moves().into_iter().collect();
            let direction = moves[rng.random_range(0..moves.len())];
            board = board
                .apply(direction)
                .expect("an enumerated legal move always applies");
        }
        ShuffledBoard { board, seed }
    }
}

#[cfg(test)]
mod tests {
    use npuzzle_solver::{BfsSolver, SolveOutcome};

    use super::*;

    #[test]
    fn test_same_seed_reproduces_board() {
        let shuffler = BoardShuffler::new();
        let a = shuffler.shuffle_with_seed(7);
        let b = shuffler.shuffle_with_seed(7);
        assert_eq!(a, b);
        assert_eq!(a.seed, 7);
    }

    #[test]
    fn test_shuffled_boards_are_solvable() {
        let shuffler = BoardShuffler::new();
        for seed in 0..20 {
            assert!(shuffler.shuffle_with_seed(seed).board.is_solvable());
        }
    }

    #[test]
    fn test_zero_moves_leaves_board_solved() {
        let shuffled = BoardShuffler::with_moves(0).shuffle_with_seed(1);
        assert!(shuffled.board.is_solved());
    }

    #[test]
    fn test_shuffled_board_is_reachable_within_the_diameter() {
        let shuffled = BoardShuffler::new().shuffle_with_seed(42);
        match BfsSolver::shortest().solve(&shuffled.board).unwrap() {
            SolveOutcome::Solved(report) => {
                assert!(report.length() <= 31);
                assert!(report.length() <= SHUFFLE_MOVES);
            }
            SolveOutcome::NoSolution(_) => panic!("shuffled board must be reachable"),
        }
    }
}
