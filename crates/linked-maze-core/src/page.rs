//! A single maze page: a grid of cells with start, goal and current position.

use std::{
    fmt::{self, Display, Write as _},
    ops::{Index, IndexMut},
};

use crate::{Cell, CellError, Direction, Exits, Position, RandomSource};

/// Error returned when a step would leave the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid position ({x}, {y})")]
pub struct MoveError {
    /// Column of the rejected position.
    pub x: i16,
    /// Row of the rejected position.
    pub y: i16,
}

/// How a [`Page::mutate`] call changed the chosen cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    /// The exit was absent and has been added.
    Added,
    /// The exit was present and has been removed.
    Removed,
    /// The opposite exit was present; it has been removed and the exit added.
    Replaced,
}

/// Record of one [`Page::mutate`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mutation {
    /// The mutated cell.
    pub position: Position,
    /// The toggled direction.
    pub direction: Direction,
    /// What happened to the cell.
    pub kind: MutationKind,
}

/// One grid of a linked maze pair.
///
/// A page owns a `width × height` array of [`Cell`]s addressed by
/// [`Position`] (origin at the bottom-left), a fixed start and goal, and a
/// current position that only changes through bounds-checked moves.
///
/// Stepping does not consult this page's own exits: in a linked maze the
/// permitted directions come from the partner page.
///
/// # Examples
///
/// ```
/// use linked_maze_core::{Direction, Page, Position};
///
/// let mut page = Page::new(3, 2, Position::new(1, 0), Position::new(1, 1));
/// page[Position::new(1, 0)].add_exit(Direction::North)?;
///
/// page.step(Direction::North)?;
/// assert!(page.is_at_goal());
/// assert!(page.step(Direction::North).is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    name: Option<String>,
    width: u8,
    height: u8,
    cells: Vec<Cell>,
    start: Position,
    goal: Position,
    position: Position,
}

impl Page {
    /// Creates a page with all cells empty and the current position at `start`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero, or if `start` or `goal` is outside
    /// the page.
    #[must_use]
    pub fn new(width: u8, height: u8, start: Position, goal: Position) -> Self {
        assert!(width > 0 && height > 0, "page must not be empty");
        let page = Self {
            name: None,
            width,
            height,
            cells: vec![Cell::new(); usize::from(width) * usize::from(height)],
            start,
            goal,
            position: start,
        };
        assert!(page.contains(start), "start {start} is outside the page");
        assert!(page.contains(goal), "goal {goal} is outside the page");
        page
    }

    /// Sets the display label of the page.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the display label, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Returns the start position.
    #[must_use]
    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Returns the goal position.
    #[must_use]
    #[inline]
    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Returns the current position.
    #[must_use]
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns `true` if the current position is the goal.
    #[must_use]
    #[inline]
    pub fn is_at_goal(&self) -> bool {
        self.position == self.goal
    }

    /// Returns `true` if `pos` lies on the page.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x() < self.width && pos.y() < self.height
    }

    /// Returns the cell at `pos`, or `None` if it is outside the page.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.contains(pos).then(|| &self.cells[self.cell_index(pos)])
    }

    /// Returns the cell at `pos` mutably, or `None` if it is outside the page.
    #[must_use]
    pub fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        if !self.contains(pos) {
            return None;
        }
        let i = self.cell_index(pos);
        Some(&mut self.cells[i])
    }

    /// Iterates over every position, row by row starting from the bottom-left.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Returns the exits of the cell at the current position.
    #[must_use]
    pub fn current_exits(&self) -> Exits {
        self[self.position].exits()
    }

    /// Moves the current position one step in `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] and leaves the position unchanged if the step
    /// would leave the page.
    pub fn step(&mut self, direction: Direction) -> Result<(), MoveError> {
        self.position = self.target(direction)?;
        Ok(())
    }

    /// Moves the current position directly to `pos`.
    ///
    /// Used to put a page back where it was after a sequence of steps.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the page.
    pub fn set_position(&mut self, pos: Position) {
        assert!(self.contains(pos), "position {pos} is outside the page");
        self.position = pos;
    }

    /// Puts the current position back at the start.
    pub fn reset(&mut self) {
        self.position = self.start;
    }

    /// Toggles one randomly chosen exit of one randomly chosen cell.
    ///
    /// Picks x in `0..=width-1`, then y in `0..=height-1`, then a direction
    /// from [`Direction::ALL`]. A present exit is removed. An absent exit is
    /// added, after first removing its opposite if that is present.
    ///
    /// # Errors
    ///
    /// Propagates [`CellError`] from the cell update. Neither error can occur
    /// with a well-behaved source, because the opposite is cleared before
    /// adding.
    ///
    /// # Panics
    ///
    /// Panics if `random` returns a coordinate outside the requested range.
    pub fn mutate<R>(&mut self, random: &mut R) -> Result<Mutation, CellError>
    where
        R: RandomSource,
    {
        let x = random.int_inclusive(0, usize::from(self.width) - 1);
        let y = random.int_inclusive(0, usize::from(self.height) - 1);
        let direction = Direction::ALL[random.choose_index(Direction::ALL.len())];

        #[expect(clippy::cast_possible_truncation)]
        let position = Position::new(x as u8, y as u8);
        let cell = &mut self[position];
        let kind = if cell.has_exit(direction) {
            cell.remove_exit(direction)?;
            MutationKind::Removed
        } else if cell.has_exit(direction.opposite()) {
            cell.remove_exit(direction.opposite())?;
            cell.add_exit(direction)?;
            MutationKind::Replaced
        } else {
            cell.add_exit(direction)?;
            MutationKind::Added
        };

        log::trace!("mutated cell {position} towards {direction}: {kind:?}");
        Ok(Mutation {
            position,
            direction,
            kind,
        })
    }

    fn target(&self, direction: Direction) -> Result<Position, MoveError> {
        let (x, y) = self.position.offset(direction);
        match (u8::try_from(x), u8::try_from(y)) {
            (Ok(px), Ok(py)) if self.contains(Position::new(px, py)) => Ok(Position::new(px, py)),
            _ => Err(MoveError { x, y }),
        }
    }

    fn cell_index(&self, pos: Position) -> usize {
        usize::from(pos.y()) * usize::from(self.width) + usize::from(pos.x())
    }
}

impl Index<Position> for Page {
    type Output = Cell;

    /// # Panics
    ///
    /// Panics if `pos` is outside the page.
    fn index(&self, pos: Position) -> &Self::Output {
        assert!(self.contains(pos), "position {pos} is outside the page");
        &self.cells[self.cell_index(pos)]
    }
}

impl IndexMut<Position> for Page {
    /// # Panics
    ///
    /// Panics if `pos` is outside the page.
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        assert!(self.contains(pos), "position {pos} is outside the page");
        let i = self.cell_index(pos);
        &mut self.cells[i]
    }
}

impl Display for Page {
    /// Renders the page as text, top row first.
    ///
    /// Each cell is a marker (`G` for the goal, `S` for the start, otherwise a
    /// space) followed by the cell glyph. Single-glyph cells are padded to two
    /// characters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name.as_deref().filter(|name| !name.is_empty()) {
            write!(f, "{name}:")?;
        }
        f.write_char('\n')?;
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let pos = Position::new(x, y);
                let marker = if pos == self.goal {
                    'G'
                } else if pos == self.start {
                    'S'
                } else {
                    ' '
                };
                let glyph = self[pos].to_string();
                write!(f, "{marker}{glyph:<2}")?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
