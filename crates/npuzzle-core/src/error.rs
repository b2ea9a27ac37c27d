//! Error types for board construction, parsing, and moves.

use crate::{direction::Move, position::Position, tile::Tile};

/// Errors reported when a set of cells does not form a valid board.
///
/// A valid board holds a permutation of the values 0-8, so it always has
/// exactly one blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidBoardError {
    /// A cell value was outside the range 0-8.
    #[display("tile value out of range: {value}")]
    ValueOutOfRange {
        /// The offending cell value.
        value: u8,
    },
    /// The same tile value appeared in more than one cell.
    #[display("duplicate tile: {tile}")]
    DuplicateTile {
        /// The tile that appeared more than once.
        tile: Tile,
    },
}

/// Errors reported when parsing a board from text.
///
/// The expected format is three lines of three whitespace-separated integers,
/// as produced by the board's `Display` implementation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ParseBoardError {
    /// The input did not contain exactly three non-empty lines.
    #[display("expected 3 rows, got {rows}")]
    WrongRowCount {
        /// The number of non-empty lines found.
        rows: usize,
    },
    /// A line did not contain exactly three tokens.
    #[display("expected 3 tiles in row {row}, got {len}")]
    WrongRowLength {
        /// The 0-indexed row the error occurred in.
        row: usize,
        /// The number of tokens found.
        len: usize,
    },
    /// A token was not a non-negative integer.
    #[display("invalid tile token {token:?}")]
    InvalidToken {
        /// The offending token.
        token: String,
    },
    /// The cells parsed, but do not form a permutation of 0-8.
    #[display("invalid board: {_0}")]
    Invalid(#[from] InvalidBoardError),
}

/// Error reported when a move is applied to a board it is not legal for.
///
/// The search engine filters moves through legal-move enumeration before
/// applying them, so seeing this error indicates a caller bug rather than a
/// user-facing condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The blank cannot move in the requested direction from its position.
    #[display("move {direction} is not legal with the blank at {blank}")]
    Illegal {
        /// The rejected move.
        direction: Move,
        /// Where the blank was when the move was attempted.
        blank: Position,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = InvalidBoardError::DuplicateTile {
            tile: Tile::from_value(5),
        };
        assert_eq!(err.to_string(), "duplicate tile: 5");

        let err = ParseBoardError::WrongRowCount { rows: 2 };
        assert_eq!(err.to_string(), "expected 3 rows, got 2");

        let err = ParseBoardError::from(InvalidBoardError::ValueOutOfRange { value: 12 });
        assert_eq!(err.to_string(), "invalid board: tile value out of range: 12");

        let err = MoveError::Illegal {
            direction: Move::Down,
            blank: Position::new(2, 2),
        };
        assert_eq!(
            err.to_string(),
            "move down is not legal with the blank at (2, 2)"
        );
    }
}
