//! Inversion-parity solvability test.
//!
//! Exactly half of the 9! tile arrangements can reach the solved board. The
//! two halves are separated by the parity of the inversion count over the
//! eight numbered tiles: a horizontal move never reorders the flattened tile
//! sequence, and a vertical move carries a tile across exactly two others,
//! changing the inversion count by an even amount. The solved board has zero
//! inversions, so a board is solvable exactly when its inversion count is
//! even. On a 3-wide board the blank's row never affects this invariant
//! (unlike the 4-wide 15-puzzle).

use crate::{board::Board, tile::Tile};

impl Board {
    /// Returns `true` if this board can reach the solved configuration.
    ///
    /// This is a pure parity test: it flattens the board row-major, drops the
    /// blank, and checks that the number of inversions (out-of-order pairs)
    /// among the eight numbered tiles is even. It never searches.
    ///
    /// # Examples
    ///
    /// ```
    /// use npuzzle_core::Board;
    ///
    /// assert!(Board::SOLVED.is_solvable());
    ///
    /// // Swapping one adjacent pair of tiles flips the parity
    /// let swapped = Board::from_rows([[1, 2, 3], [4, 5, 6], [8, 7, 0]])?;
    /// assert!(!swapped.is_solvable());
    /// # Ok::<(), npuzzle_core::InvalidBoardError>(())
    /// ```
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        self.inversions() % 2 == 0
    }

    /// Counts the out-of-order pairs among the numbered tiles, row-major,
    /// ignoring the blank.
    fn inversions(&self) -> usize {
        let tiles: Vec<u8> = self
            .tiles()
            .filter(|tile| !tile.is_blank())
            .map(Tile::value)
            .collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, &a)| tiles[i + 1..].iter().filter(|&&b| a > b).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_board_is_solvable() {
        assert!(Board::SOLVED.is_solvable());
    }

    #[test]
    fn test_one_move_from_solved_is_solvable() {
        let board = Board::from_rows([[1, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
        assert!(board.is_solvable());
    }

    #[test]
    fn test_adjacent_pair_swap_is_unsolvable() {
        let board = Board::from_rows([[1, 2, 3], [4, 5, 6], [8, 7, 0]]).unwrap();
        assert!(!board.is_solvable());
    }

    #[test]
    fn test_known_hard_board_is_solvable() {
        // One of the two boards at the 31-move diameter of the state graph
        let board = Board::from_rows([[8, 6, 7], [2, 5, 4], [3, 0, 1]]).unwrap();
        assert!(board.is_solvable());
    }

    #[test]
    fn test_parity_is_invariant_under_moves() {
        let boards = [
            Board::SOLVED,
            Board::from_rows([[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap(),
            Board::from_rows([[8, 6, 7], [2, 5, 4], [3, 0, 1]]).unwrap(),
            Board::from_rows([[1, 2, 3], [4, 5, 6], [8, 7, 0]]).unwrap(),
        ];
        for board in boards {
            for direction in board.legal_moves() {
                let next = board.apply(direction).unwrap();
                assert_eq!(next.is_solvable(), board.is_solvable());
            }
        }
    }

    #[test]
    fn test_inversion_count() {
        assert_eq!(Board::SOLVED.inversions(), 0);
        let swapped = Board::from_rows([[1, 2, 3], [4, 5, 6], [8, 7, 0]]).unwrap();
        assert_eq!(swapped.inversions(), 1);
        let hard = Board::from_rows([[8, 6, 7], [2, 5, 4], [3, 0, 1]]).unwrap();
        assert_eq!(hard.inversions(), 24);
    }
}
