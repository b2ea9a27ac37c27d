//! Core board model for the 8-puzzle.
//!
//! This crate provides the value types shared by the solver, generator, and
//! application crates: boards, tiles, positions, moves, legal-move
//! enumeration, text parsing, and the inversion-parity solvability test.
//!
//! # Overview
//!
//! The crate is organized around a few small types:
//!
//! - [`board`]: the [`Board`] value type with move application, parsing,
//!   display, and the canonical [`BoardKey`] encoding
//! - [`tile`]: type-safe tile values 0-8, with 0 as the blank
//! - [`position`]: (row, column) coordinates on the 3x3 grid
//! - [`direction`]: the four blank-move directions and [`MoveSet`]
//! - [`error`]: structured errors for construction, parsing, and moves
//!
//! The solvability test lives on [`Board::is_solvable`].
//!
//! # Examples
//!
//! ```
//! use npuzzle_core::{Board, Move};
//!
//! let board: Board = "1 2 3\n4 0 6\n7 5 8".parse()?;
//! assert!(board.is_solvable());
//!
//! // Apply a legal move; boards are immutable values
//! let next = board.apply(Move::Down)?;
//! assert_ne!(next, board);
//! assert_ne!(next.key(), board.key());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;
pub mod direction;
pub mod error;
mod parity;
pub mod position;
pub mod tile;

// Re-export commonly used types
pub use self::{
    board::{Board, BoardKey},
    direction::{Move, MoveSet},
    error::{InvalidBoardError, MoveError, ParseBoardError},
    position::Position,
    tile::Tile,
};
