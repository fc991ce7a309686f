//! Grid directions and exit sets.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
};

/// One of the four orthogonal unit steps on a grid.
///
/// Variants are declared in canonical order (east, north, west, south).
/// This order governs display glyphs and the order in which the solver
/// tries moves.
///
/// # Examples
///
/// ```
/// use linked_maze_core::Direction;
///
/// assert_eq!(Direction::North.vector(), (0, 1));
/// assert_eq!(Direction::North.opposite(), Direction::South);
/// assert_eq!(Direction::from_arrow('<'), Some(Direction::West));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Step `(1, 0)`.
    East,
    /// Step `(0, 1)`.
    North,
    /// Step `(-1, 0)`.
    West,
    /// Step `(0, -1)`.
    South,
}

impl Direction {
    /// All directions in canonical order.
    pub const ALL: [Self; 4] = [Self::East, Self::North, Self::West, Self::South];

    /// Arrow glyphs, index-aligned with [`Direction::ALL`].
    pub const ARROWS: [char; 4] = ['>', '^', '<', 'v'];

    /// Returns the `(dx, dy)` unit vector of this direction.
    #[must_use]
    pub const fn vector(self) -> (i8, i8) {
        match self {
            Self::East => (1, 0),
            Self::North => (0, 1),
            Self::West => (-1, 0),
            Self::South => (0, -1),
        }
    }

    /// Returns the direction with the given unit vector, if any.
    ///
    /// ```
    /// use linked_maze_core::Direction;
    ///
    /// assert_eq!(Direction::from_vector(0, -1), Some(Direction::South));
    /// assert_eq!(Direction::from_vector(1, 1), None);
    /// ```
    #[must_use]
    pub fn from_vector(dx: i8, dy: i8) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.vector() == (dx, dy))
    }

    /// Returns the direction pointing the opposite way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::East => Self::West,
            Self::North => Self::South,
            Self::West => Self::East,
            Self::South => Self::North,
        }
    }

    /// Returns the arrow glyph of this direction.
    #[must_use]
    pub const fn arrow(self) -> char {
        Self::ARROWS[self.index()]
    }

    /// Parses an arrow glyph.
    #[must_use]
    pub fn from_arrow(arrow: char) -> Option<Self> {
        let i = Self::ARROWS.iter().position(|&a| a == arrow)?;
        Some(Self::ALL[i])
    }

    /// Returns the position of this direction in [`Direction::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    const fn flag(self) -> Exits {
        match self {
            Self::East => Exits::EAST,
            Self::North => Exits::NORTH,
            Self::West => Exits::WEST,
            Self::South => Exits::SOUTH,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::East => "east",
            Self::North => "north",
            Self::West => "west",
            Self::South => "south",
        };
        f.write_str(name)
    }
}

bitflags::bitflags! {
    /// A set of directions, used as the exits of a cell.
    ///
    /// The set places no restriction on its members; a direction and its
    /// opposite may both be present. [`Cell::add_exit`] is the only place
    /// that rejects such a pair.
    ///
    /// [`Cell::add_exit`]: crate::Cell::add_exit
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Exits: u8 {
        /// Exit towards [`Direction::East`].
        const EAST = 0b0001;
        /// Exit towards [`Direction::North`].
        const NORTH = 0b0010;
        /// Exit towards [`Direction::West`].
        const WEST = 0b0100;
        /// Exit towards [`Direction::South`].
        const SOUTH = 0b1000;
    }
}

impl From<Direction> for Exits {
    fn from(direction: Direction) -> Self {
        direction.flag()
    }
}

impl FromIterator<Direction> for Exits {
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |acc, d| acc | Self::from(d))
    }
}

impl Exits {
    /// Returns `true` if `direction` is a member of the set.
    #[must_use]
    pub const fn has(self, direction: Direction) -> bool {
        self.contains(direction.flag())
    }

    /// Returns the number of directions in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits().count_ones() as usize
    }

    /// Iterates over the members in canonical order.
    ///
    /// ```
    /// use linked_maze_core::{Direction, Exits};
    ///
    /// let exits = Exits::SOUTH | Exits::EAST;
    /// let dirs: Vec<_> = exits.directions().collect();
    /// assert_eq!(dirs, [Direction::East, Direction::South]);
    /// ```
    #[must_use]
    pub fn directions(self) -> ExitDirections {
        ExitDirections {
            exits: self,
            next: 0,
        }
    }
}

/// Iterator over the directions of an [`Exits`] set, in canonical order.
#[derive(Debug, Clone)]
pub struct ExitDirections {
    exits: Exits,
    next: usize,
}

impl Iterator for ExitDirections {
    type Item = Direction;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&d) = Direction::ALL.get(self.next) {
            self.next += 1;
            if self.exits.has(d) {
                return Some(d);
            }
        }
        None
    }
}

impl FusedIterator for ExitDirections {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectors_are_canonical_order() {
        let vectors: Vec<_> = Direction::ALL.iter().map(|d| d.vector()).collect();
        assert_eq!(vectors, [(1, 0), (0, 1), (-1, 0), (0, -1)]);
    }

    #[test]
    fn test_opposite_is_negated_vector() {
        for d in Direction::ALL {
            let (dx, dy) = d.vector();
            assert_eq!(d.opposite().vector(), (-dx, -dy));
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn test_arrow_round_trip() {
        assert_eq!(
            Direction::ALL.map(Direction::arrow),
            Direction::ARROWS
        );
        for d in Direction::ALL {
            assert_eq!(Direction::from_arrow(d.arrow()), Some(d));
            let (dx, dy) = d.vector();
            assert_eq!(Direction::from_vector(dx, dy), Some(d));
        }
        assert_eq!(Direction::from_arrow('x'), None);
    }

    #[test]
    fn test_exits_iteration_order() {
        let exits: Exits = [Direction::South, Direction::North, Direction::East]
            .into_iter()
            .collect();
        assert_eq!(exits.len(), 3);
        assert_eq!(
            exits.directions().collect::<Vec<_>>(),
            [Direction::East, Direction::North, Direction::South]
        );
        assert!(!exits.has(Direction::West));
    }

    #[test]
    fn test_exits_allow_opposites() {
        let exits = Exits::EAST | Exits::WEST;
        assert!(exits.has(Direction::East));
        assert!(exits.has(Direction::West));
        assert_eq!(exits.len(), 2);
    }
}
