//! Board position (row, column) coordinates.

use std::fmt::{self, Display};

use crate::direction::Move;

/// A cell position on the 3x3 board.
///
/// Rows and columns are 0-indexed from the top-left corner.
///
/// # Examples
///
/// ```
/// use npuzzle_core::{Move, Position};
///
/// let pos = Position::new(1, 2);
/// assert_eq!(pos.row(), 1);
/// assert_eq!(pos.col(), 2);
///
/// // Shift toward a direction, staying on the board
/// assert_eq!(pos.shifted(Move::Up), Some(Position::new(0, 2)));
/// assert_eq!(pos.shifted(Move::Right), None); // already on the right edge
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-2.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 3 && col < 3, "position out of range");
        Self { row, col }
    }

    /// Returns the row (0-2, counting from the top).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-2, counting from the left).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major cell index (0-8).
    #[must_use]
    pub const fn index(self) -> usize {
        (self.row * 3 + self.col) as usize
    }

    /// Creates a position from a row-major cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_index(index: usize) -> Self {
        assert!(index < 9, "cell index out of range: {index}");
        Self::new((index / 3) as u8, (index % 3) as u8)
    }

    /// Returns an iterator over all 9 positions in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use npuzzle_core::Position;
    /// let positions: Vec<_> = Position::all().collect();
    /// assert_eq!(positions.len(), 9);
    /// assert_eq!(positions[0], Position::new(0, 0));
    /// assert_eq!(positions[8], Position::new(2, 2));
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        (0..9).map(Self::from_index)
    }

    /// Returns the adjacent position in the given direction, or `None` if it
    /// would leave the board.
    #[must_use]
    pub fn shifted(self, direction: Move) -> Option<Self> {
        match direction {
            Move::Up => self.row.checked_sub(1).map(|row| Self { row, col: self.col }),
            Move::Down => (self.row < 2).then(|| Self {
                row: self.row + 1,
                col: self.col,
            }),
            Move::Left => self.col.checked_sub(1).map(|col| Self { row: self.row, col }),
            Move::Right => (self.col < 2).then(|| Self {
                row: self.row,
                col: self.col + 1,
            }),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
