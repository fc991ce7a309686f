//! Grid coordinates.

use std::fmt::{self, Display};

use crate::Direction;

/// A cell coordinate on a page, 0-indexed with the origin at the bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate (column).
    #[must_use]
    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the y coordinate (row, counted upwards).
    #[must_use]
    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the raw coordinates reached by stepping once in `direction`.
    ///
    /// The result may lie outside any page, including at negative coordinates.
    #[must_use]
    pub fn offset(self, direction: Direction) -> (i16, i16) {
        let (dx, dy) = direction.vector();
        (
            i16::from(self.x) + i16::from(dx),
            i16::from(self.y) + i16::from(dy),
        )
    }
}

impl From<(u8, u8)> for Position {
    fn from((x, y): (u8, u8)) -> Self {
        Self::new(x, y)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_can_leave_the_grid() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.offset(Direction::East), (1, 0));
        assert_eq!(origin.offset(Direction::West), (-1, 0));
        assert_eq!(origin.offset(Direction::South), (0, -1));
        assert_eq!(Position::new(2, 3).offset(Direction::North), (2, 4));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(1, 2).to_string(), "(1, 2)");
        assert_eq!(Position::from((3, 0)), Position::new(3, 0));
    }
}
