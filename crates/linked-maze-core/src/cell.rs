//! A single grid cell and its exits.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::{Direction, Exits};

/// Errors raised when mutating the exits of a [`Cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CellError {
    /// The opposite of the exit being added is already present.
    #[display("invalid exit {exit} when {present} is present")]
    InvalidExit {
        /// The exit that was rejected.
        exit: Direction,
        /// The conflicting exit already in the cell.
        present: Direction,
    },
    /// The exit being removed is not present.
    #[display("exit {exit} is not present")]
    MissingExit {
        /// The exit that was requested.
        exit: Direction,
    },
}

/// Error returned when parsing a [`Cell`] from arrow glyphs fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid exit symbol {symbol:?}")]
pub struct ParseCellError {
    /// The offending character.
    pub symbol: char,
}

/// The passable directions out of one grid position.
///
/// Construction accepts any combination of directions, including a direction
/// together with its opposite. Only [`Cell::add_exit`] rejects opposites; removal
/// never validates.
///
/// # Examples
///
/// ```
/// use linked_maze_core::{Cell, Direction};
///
/// let mut cell = Cell::new();
/// cell.add_exit(Direction::East)?;
/// assert!(cell.has_exit(Direction::East));
/// assert!(cell.add_exit(Direction::West).is_err());
///
/// let cell: Cell = "^>".parse()?;
/// assert_eq!(cell.to_string(), ">^");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    exits: Exits,
}

impl Cell {
    /// Glyph shown for a cell without exits.
    pub const EMPTY_GLYPH: char = 'x';

    /// Creates a cell with no exits.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            exits: Exits::empty(),
        }
    }

    /// Creates a cell with the given exits, without any validation.
    #[must_use]
    pub fn from_directions<I>(directions: I) -> Self
    where
        I: IntoIterator<Item = Direction>,
    {
        Self {
            exits: directions.into_iter().collect(),
        }
    }

    /// Returns the exit set.
    #[must_use]
    #[inline]
    pub const fn exits(&self) -> Exits {
        self.exits
    }

    /// Returns `true` if the cell has an exit towards `direction`.
    #[must_use]
    #[inline]
    pub const fn has_exit(&self, direction: Direction) -> bool {
        self.exits.has(direction)
    }

    /// Adds an exit. Adding an exit that is already present does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`CellError::InvalidExit`] if the opposite direction is present.
    pub fn add_exit(&mut self, direction: Direction) -> Result<(), CellError> {
        let opposite = direction.opposite();
        if self.has_exit(opposite) {
            return Err(CellError::InvalidExit {
                exit: direction,
                present: opposite,
            });
        }
        self.exits.insert(direction.into());
        Ok(())
    }

    /// Removes an exit.
    ///
    /// # Errors
    ///
    /// Returns [`CellError::MissingExit`] if the exit is not present.
    pub fn remove_exit(&mut self, direction: Direction) -> Result<(), CellError> {
        if !self.has_exit(direction) {
            return Err(CellError::MissingExit { exit: direction });
        }
        self.exits.remove(direction.into());
        Ok(())
    }
}

impl From<Exits> for Cell {
    fn from(exits: Exits) -> Self {
        Self { exits }
    }
}

impl FromStr for Cell {
    type Err = ParseCellError;

    /// Parses arrow glyphs (`>^<v`) in any order. A lone `x` is an empty cell.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "x" {
            return Ok(Self::new());
        }
        s.chars()
            .map(|symbol| Direction::from_arrow(symbol).ok_or(ParseCellError { symbol }))
            .collect::<Result<Exits, _>>()
            .map(Self::from)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exits.is_empty() {
            return f.write_char(Self::EMPTY_GLYPH);
        }
        for d in self.exits.directions() {
            f.write_char(d.arrow())?;
        }
        Ok(())
    }
}
