//! Joint solver for linked maze pairs.
//!
//! Two [`Page`]s are solved together: the marker on one page may only step in
//! a direction allowed by the cell under the other page's marker, and the
//! pages take turns. [`JointSolver`] searches every alternating sequence of
//! steps, proves that at most one of them reaches both goals, and measures the
//! puzzle's difficulty as its *sidetrack depth*.
//!
//! # Examples
//!
//! ```
//! use linked_maze_core::{Direction, Page, Position};
//! use linked_maze_solver::{JointSolver, Side, Step};
//!
//! let mut first = Page::new(3, 2, Position::new(1, 0), Position::new(1, 1));
//! let mut second = Page::new(3, 2, Position::new(2, 1), Position::new(2, 1));
//! second[Position::new(2, 1)].add_exit(Direction::North)?;
//!
//! let outcome = JointSolver::new().solve(&mut first, &mut second)?;
//! let solution = outcome.solution.expect("solvable");
//! assert_eq!(solution.steps(), [Step::new(Side::First, Direction::North)]);
//! assert_eq!(outcome.sidetrack_depth, 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`Page`]: linked_maze_core::Page

pub use self::{error::*, joint_solver::*, solution::*};

mod error;
mod joint_solver;
mod solution;
