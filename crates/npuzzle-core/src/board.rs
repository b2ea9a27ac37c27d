//! The 8-puzzle board value type.
//!
//! A [`Board`] is an immutable 3x3 grid holding a permutation of the tile
//! values 0-8, where 0 is the blank. Boards are small `Copy` values; applying
//! a move always produces a new board and never mutates the original.
//!
//! # Examples
//!
//! ```
//! use npuzzle_core::{Board, Move};
//!
//! let board = Board::from_rows([[1, 2, 3], [4, 5, 6], [7, 0, 8]])?;
//! assert_eq!(board.legal_moves().len(), 3); // blank on an edge
//!
//! let next = board.apply(Move::Right)?;
//! assert!(next.is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{
    direction::{Move, MoveSet},
    error::{InvalidBoardError, MoveError, ParseBoardError},
    position::Position,
    tile::Tile,
};

/// An immutable 3x3 sliding-tile board.
///
/// The cells hold a permutation of 0-8 in row-major order; the constructors
/// reject anything else, so every `Board` in existence has exactly one blank.
/// Equality is structural (cell by cell).
///
/// # Examples
///
/// ```
/// use npuzzle_core::Board;
///
/// assert!(Board::SOLVED.is_solved());
///
/// let board: Board = "1 2 3\n4 0 6\n7 5 8".parse()?;
/// assert_eq!(board.blank_position(), npuzzle_core::Position::new(1, 1));
/// # Ok::<(), npuzzle_core::ParseBoardError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Tile; 9],
}

impl Board {
    /// The solved configuration: `1 2 3 / 4 5 6 / 7 8 0`.
    pub const SOLVED: Self = Self {
        cells: [
            Tile::ALL[1],
            Tile::ALL[2],
            Tile::ALL[3],
            Tile::ALL[4],
            Tile::ALL[5],
            Tile::ALL[6],
            Tile::ALL[7],
            Tile::ALL[8],
            Tile::ALL[0],
        ],
    };

    /// Creates a board from 9 cell values in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoardError`] if the values are not a permutation of
    /// 0-8 (out-of-range value or duplicate tile; a missing or duplicated
    /// blank always shows up as one of those).
    ///
    /// # Examples
    ///
    /// ```
    /// use npuzzle_core::{Board, InvalidBoardError};
    ///
    /// let board = Board::from_cells([1, 2, 3, 4, 5, 6, 7, 8, 0])?;
    /// assert!(board.is_solved());
    ///
    /// // A repeated tile is rejected
    /// let err = Board::from_cells([1, 2, 3, 4, 5, 5, 7, 8, 0]).unwrap_err();
    /// assert!(matches!(err, InvalidBoardError::DuplicateTile { .. }));
    /// # Ok::<(), InvalidBoardError>(())
    /// ```
    pub fn from_cells(cells: [u8; 9]) -> Result<Self, InvalidBoardError> {
        let mut seen = [false; 9];
        let mut tiles = [Tile::BLANK; 9];
        for (slot, &value) in tiles.iter_mut().zip(&cells) {
            let Some(tile) = Tile::try_from_value(value) else {
                return Err(InvalidBoardError::ValueOutOfRange { value });
            };
            if seen[usize::from(value)] {
                return Err(InvalidBoardError::DuplicateTile { tile });
            }
            seen[usize::from(value)] = true;
            *slot = tile;
        }
        // 9 distinct values in 0-8 form a permutation, so exactly one blank.
        Ok(Self { cells: tiles })
    }

    /// Creates a board from three rows of three cell values.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoardError`] if the values are not a permutation of 0-8.
    pub fn from_rows(rows: [[u8; 3]; 3]) -> Result<Self, InvalidBoardError> {
        let [[a, b, c], [d, e, f], [g, h, i]] = rows;
        Self::from_cells([a, b, c, d, e, f, g, h, i])
    }

    /// Returns the tile at the given position.
    #[must_use]
    pub fn tile(&self, pos: Position) -> Tile {
        self.cells[pos.index()]
    }

    /// Returns an iterator over all tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().copied()
    }

    /// Returns the position of the blank.
    #[must_use]
    pub fn blank_position(&self) -> Position {
        let index = self
            .cells
            .iter()
            .position(|tile| tile.is_blank())
            .expect("a valid board always contains a blank");
        Position::from_index(index)
    }

    /// Returns the set of moves that are legal from this board.
    ///
    /// The set always has 2 (blank in a corner), 3 (blank on an edge), or 4
    /// (blank in the center) moves.
    ///
    /// # Examples
    ///
    /// ```
    /// use npuzzle_core::Board;
    ///
    /// // Blank in the bottom-right corner: only up and left are legal
    /// assert_eq!(Board::SOLVED.legal_moves().len(), 2);
    /// ```
    #[must_use]
    pub fn legal_moves(&self) -> MoveSet {
        let blank = self.blank_position();
        Move::ALL
            .into_iter()
            .filter(|&direction| blank.shifted(direction).is_some())
            .collect()
    }

    /// Applies a move, returning the resulting board.
    ///
    /// The blank swaps with the adjacent tile in the move's direction. The
    /// input board is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Illegal`] if the move is not in
    /// [`legal_moves`](Self::legal_moves).
    ///
    /// # Examples
    ///
    /// ```
    /// use npuzzle_core::{Board, Move};
    ///
    /// let board = Board::from_rows([[1, 2, 3], [4, 5, 6], [7, 0, 8]])?;
    /// let next = board.apply(Move::Right)?;
    /// assert!(next.is_solved());
    ///
    /// // The original board is untouched
    /// assert!(!board.is_solved());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn apply(&self, direction: Move) -> Result<Self, MoveError> {
        let blank = self.blank_position();
        let Some(target) = blank.shifted(direction) else {
            return Err(MoveError::Illegal { direction, blank });
        };
        let mut cells = self.cells;
        cells.swap(blank.index(), target.index());
        Ok(Self { cells })
    }

    /// Returns `true` if this board is the solved configuration.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Returns the canonical encoding of this board.
    ///
    /// The key packs the row-major cell values into a `u32` in radix 9, so
    /// two boards have the same key exactly when they are equal. The search
    /// engine uses keys for visited-set membership.
    ///
    /// # Examples
    ///
    /// ```
    /// use npuzzle_core::{Board, Move};
    ///
    /// let board = Board::SOLVED;
    /// let next = board.apply(Move::Up)?;
    /// assert_ne!(board.key(), next.key());
    /// # Ok::<(), npuzzle_core::MoveError>(())
    /// ```
    #[must_use]
    pub fn key(&self) -> BoardKey {
        let packed = self
            .cells
            .iter()
            .fold(0_u32, |acc, tile| acc * 9 + u32::from(tile.value()));
        BoardKey(packed)
    }
}

impl Display for Board {
    /// Formats the board as three lines of space-separated tile values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                f.write_str("\n")?;
            }
            for col in 0..3 {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self.tile(Position::new(row, col)))?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses a board from three lines of three whitespace-separated
    /// integers. Leading/trailing whitespace and blank lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != 3 {
            return Err(ParseBoardError::WrongRowCount { rows: rows.len() });
        }

        let mut cells = [0_u8; 9];
        for (row, line) in rows.iter().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != 3 {
                return Err(ParseBoardError::WrongRowLength {
                    row,
                    len: tokens.len(),
                });
            }
            for (col, token) in tokens.iter().enumerate() {
                let value = token
                    .parse::<u8>()
                    .map_err(|_| ParseBoardError::InvalidToken {
                        token: (*token).to_owned(),
                    })?;
                cells[row * 3 + col] = value;
            }
        }

        Ok(Self::from_cells(cells)?)
    }
}

/// The canonical, collision-free encoding of a [`Board`].
///
/// See [`Board::key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardKey(u32);

impl BoardKey {
    /// Returns the packed radix-9 value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}
