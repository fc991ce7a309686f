//! Puzzle generator for linked maze pairs.
//!
//! [`PuzzleGenerator`] starts from two empty pages described by a
//! [`GeneratorConfig`], toggles one random exit on each page per attempt and
//! asks the [`JointSolver`] about the result. A pair is accepted once it has a
//! unique solution whose sidetrack depth equals the configured target.
//!
//! # Examples
//!
//! ```
//! use linked_maze_generator::{GeneratorConfig, PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new(GeneratorConfig::default());
//! let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("doc"))?;
//!
//! assert_eq!(puzzle.sidetrack_depth, 2);
//! assert!(puzzle.solution.replay(&puzzle.first, &puzzle.second));
//! # Ok::<(), linked_maze_generator::GenerateError>(())
//! ```
//!
//! [`JointSolver`]: linked_maze_solver::JointSolver

pub use self::{config::*, generator::*, seed::*};

mod config;
mod generator;
mod seed;
