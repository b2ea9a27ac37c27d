//! Puzzle tile representation.

use std::fmt::{self, Display};

/// A single tile of the 8-puzzle, with value 0-8.
///
/// The value 0 is the blank: the empty cell that adjacent tiles slide into.
/// Values 1-8 are the numbered tiles.
///
/// # Examples
///
/// ```
/// use npuzzle_core::Tile;
///
/// let tile = Tile::from_value(5);
/// assert_eq!(tile.value(), 5);
/// assert!(!tile.is_blank());
///
/// assert!(Tile::BLANK.is_blank());
/// assert_eq!(Tile::BLANK.value(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile(u8);

impl Tile {
    /// The blank tile (value 0).
    pub const BLANK: Self = Self(0);

    /// Array containing all tiles in value order, the blank first.
    ///
    /// # Examples
    ///
    /// ```
    /// use npuzzle_core::Tile;
    ///
    /// assert_eq!(Tile::ALL.len(), 9);
    /// assert_eq!(Tile::ALL[0], Tile::BLANK);
    /// assert_eq!(Tile::ALL[8].value(), 8);
    /// ```
    pub const ALL: [Self; 9] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
    ];

    /// Creates a tile from a value in the range 0-8.
    ///
    /// # Panics
    ///
    /// Panics if `value` is greater than 8.
    ///
    /// # Examples
    ///
    /// ```
    /// use npuzzle_core::Tile;
    ///
    /// let tile = Tile::from_value(8);
    /// assert_eq!(tile.value(), 8);
    /// ```
    ///
    /// ```should_panic
    /// use npuzzle_core::Tile;
    ///
    /// // This will panic
    /// let _ = Tile::from_value(9);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from_value(value)
            .unwrap_or_else(|| panic!("Invalid tile value: {value}"))
    }

    /// Creates a tile from a value, returning `None` if it is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use npuzzle_core::Tile;
    ///
    /// assert_eq!(Tile::try_from_value(3), Some(Tile::from_value(3)));
    /// assert_eq!(Tile::try_from_value(9), None);
    /// ```
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        if value <= 8 { Some(Self(value)) } else { None }
    }

    /// Returns the numeric value of this tile (0-8).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns `true` if this tile is the blank.
    #[must_use]
    pub const fn is_blank(self) -> bool {
        self.0 == 0
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> u8 {
        tile.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        // from_value and value() round-trip for boundary values
        assert_eq!(Tile::from_value(0), Tile::BLANK);
        assert_eq!(Tile::from_value(8).value(), 8);

        // ALL constant contains all 9 tiles in value order
        assert_eq!(Tile::ALL.len(), 9);
        for (value, tile) in (0..9).zip(Tile::ALL) {
            assert_eq!(tile.value(), value);
            assert_eq!(Tile::from_value(value), tile);
        }

        // Only the blank reports is_blank
        assert!(Tile::BLANK.is_blank());
        assert!(!Tile::from_value(1).is_blank());

        // Display trait
        assert_eq!(format!("{}", Tile::BLANK), "0");
        assert_eq!(format!("{}", Tile::from_value(8)), "8");

        // From<Tile> for u8
        let value: u8 = Tile::from_value(5).into();
        assert_eq!(value, 5);
    }

    #[test]
    fn test_try_from_value_range() {
        assert!(Tile::try_from_value(8).is_some());
        assert!(Tile::try_from_value(9).is_none());
        assert!(Tile::try_from_value(255).is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid tile value: 9")]
    fn test_from_value_nine_panics() {
        let _ = Tile::from_value(9);
    }
}
