//! Blank-move directions and small move sets.
//!
//! A [`Move`] names the direction the blank travels; equivalently, the tile on
//! that side of the blank slides into the blank's old cell. [`MoveSet`] is a
//! tiny bitset over the four directions, used for legal-move enumeration.
//!
//! # Examples
//!
//! ```
//! use npuzzle_core::{Move, MoveSet};
//!
//! let mut set = MoveSet::new();
//! set.insert(Move::Up);
//! set.insert(Move::Left);
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.contains(Move::Up));
//! assert!(!set.contains(Move::Down));
//! ```

use std::fmt::{self, Display};

/// A direction the blank can move.
///
/// The canonical enumeration order is Up, Down, Left, Right; this is the order
/// the search engine expands children in, and the order [`MoveSet`] iterates.
///
/// # Examples
///
/// ```
/// use npuzzle_core::Move;
///
/// assert_eq!(Move::ALL.len(), 4);
/// assert_eq!(Move::Up.opposite(), Move::Down);
/// assert_eq!(Move::Left.opposite(), Move::Right);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Move {
    /// The blank moves one row up.
    Up = 0,
    /// The blank moves one row down.
    Down = 1,
    /// The blank moves one column left.
    Left = 2,
    /// The blank moves one column right.
    Right = 3,
}

impl Move {
    /// All four moves in canonical order: Up, Down, Left, Right.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the move that undoes this one.
    ///
    /// Applying a move and then its opposite restores the original board.
    ///
    /// # Examples
    ///
    /// ```
    /// use npuzzle_core::Move;
    ///
    /// for direction in Move::ALL {
    ///     assert_eq!(direction.opposite().opposite(), direction);
    /// }
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }

    fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Up,
            1 => Self::Down,
            2 => Self::Left,
            3 => Self::Right,
            _ => panic!("Invalid move index: {index}"),
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

/// A set of [`Move`]s, represented as a 4-bit bitset.
///
/// Iteration yields moves in the canonical order Up, Down, Left, Right
/// regardless of insertion order.
///
/// # Examples
///
/// ```
/// use npuzzle_core::{Move, MoveSet};
///
/// let set: MoveSet = [Move::Right, Move::Up].into_iter().collect();
/// let ordered: Vec<_> = set.into_iter().collect();
/// assert_eq!(ordered, vec![Move::Up, Move::Right]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MoveSet {
    bits: u8,
}

impl MoveSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all four moves.
    pub const FULL: Self = Self { bits: 0b1111 };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Adds a move to the set.
    pub fn insert(&mut self, direction: Move) {
        self.bits |= direction.bit();
    }

    /// Removes a move from the set.
    pub fn remove(&mut self, direction: Move) {
        self.bits &= !direction.bit();
    }

    /// Returns `true` if the set contains the given move.
    #[must_use]
    pub const fn contains(self, direction: Move) -> bool {
        self.bits & direction.bit() != 0
    }

    /// Returns the number of moves in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the moves in canonical order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl FromIterator<Move> for MoveSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Move>,
    {
        let mut set = Self::new();
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

impl IntoIterator for MoveSet {
    type Item = Move;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the moves of a [`MoveSet`] in canonical order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u8,
}

impl Iterator for Iter {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Move::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
