//! Core data structures for linked maze pairs.
//!
//! A linked maze is a pair of grid mazes ("pages") in which the exits of the
//! cell under one page's marker decide where the other page's marker may step.
//! This crate provides the data model shared by the solver and the generator:
//!
//! - [`direction`]: the four grid [`Direction`]s and the [`Exits`] set
//! - [`cell`]: a single grid [`Cell`] with exit mutation rules
//! - [`position`]: grid coordinates
//! - [`page`]: a [`Page`] with start, goal, current position and mutation
//! - [`random`]: the [`RandomSource`] abstraction driving mutation
//!
//! # Examples
//!
//! ```
//! use linked_maze_core::{Direction, Page, Position};
//!
//! let mut page = Page::new(3, 2, Position::new(0, 0), Position::new(1, 1)).with_name("1");
//! page[Position::new(0, 0)].add_exit(Direction::East)?;
//! page[Position::new(1, 0)].add_exit(Direction::West)?;
//!
//! assert_eq!(page.to_string(), "1:\n x Gx  x \nS>  <  x \n");
//! # Ok::<(), linked_maze_core::CellError>(())
//! ```

pub mod cell;
pub mod direction;
pub mod page;
pub mod position;
pub mod random;

pub use self::{
    cell::{Cell, CellError, ParseCellError},
    direction::{Direction, ExitDirections, Exits},
    page::{MoveError, Mutation, MutationKind, Page},
    position::Position,
    random::{RandomSource, ReplayRandom},
};
