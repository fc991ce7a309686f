use linked_maze_core::{CellError, Page, RandomSource};
use linked_maze_solver::{JointSolver, SolveError, SolveOutcome, Solution};

use crate::{GeneratorConfig, PuzzleSeed};

/// Errors that stop puzzle generation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GenerateError {
    /// The configured attempt limit was reached without an acceptable pair.
    #[display("no acceptable page pair after {attempts} attempts")]
    AttemptsExhausted {
        /// Number of attempts made.
        attempts: usize,
    },
    /// A page mutation failed.
    #[display("page mutation failed: {_0}")]
    Cell(#[from] CellError),
}

/// An accepted page pair with its unique solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// Seed that reproduces this puzzle, if it was generated from one.
    pub seed: Option<PuzzleSeed>,
    /// The page that moves first, at its start position.
    pub first: Page,
    /// The partner page, at its start position.
    pub second: Page,
    /// The unique solution of the pair.
    pub solution: Solution,
    /// Sidetrack depth of the pair, equal to the configured target.
    pub sidetrack_depth: usize,
    /// Number of mutate-and-solve rounds it took.
    pub attempts: usize,
}

/// Generates linked page pairs by random mutation.
///
/// Each attempt mutates the first page, then the second, drawing from one
/// shared random source, and solves the pair from the start positions. Pairs
/// with several solutions, no solution, or the wrong sidetrack depth are
/// rejected and mutated further.
///
/// # Examples
///
/// ```
/// use linked_maze_generator::{GeneratorConfig, PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new(GeneratorConfig::default());
/// let seed = PuzzleSeed::from_phrase("example");
///
/// let puzzle = generator.generate_with_seed(seed)?;
/// assert_eq!(puzzle.sidetrack_depth, 2);
///
/// // The same seed reproduces the same puzzle.
/// assert_eq!(generator.generate_with_seed(seed)?, puzzle);
/// # Ok::<(), linked_maze_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
    solver: JointSolver,
}

impl PuzzleGenerator {
    /// Creates a generator with the given settings.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            solver: JointSolver::new(),
        }
    }

    /// Returns the generator settings.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// See [`generate_with_source`](Self::generate_with_source).
    ///
    /// # Panics
    ///
    /// Panics if a page template describes an invalid page.
    pub fn generate(&self) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// # Errors
    ///
    /// See [`generate_with_source`](Self::generate_with_source).
    ///
    /// # Panics
    ///
    /// Panics if a page template describes an invalid page.
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> Result<GeneratedPuzzle, GenerateError> {
        let mut rng = seed.rng();
        let mut puzzle = self.generate_with_source(&mut rng)?;
        puzzle.seed = Some(seed);
        Ok(puzzle)
    }

    /// Generates a puzzle using picks from `random`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::AttemptsExhausted`] when the configured
    /// attempt limit is reached, and [`GenerateError::Cell`] if a mutation
    /// fails.
    ///
    /// # Panics
    ///
    /// Panics if a page template describes an invalid page.
    pub fn generate_with_source<R>(&self, random: &mut R) -> Result<GeneratedPuzzle, GenerateError>
    where
        R: RandomSource,
    {
        let mut first = self.config.first.build();
        let mut second = self.config.second.build();
        let target = self.config.target_depth;

        let mut attempts = 0;
        loop {
            if self.config.max_attempts.is_some_and(|max| attempts >= max) {
                log::debug!("giving up after {attempts} attempts");
                return Err(GenerateError::AttemptsExhausted { attempts });
            }
            attempts += 1;

            first.mutate(random)?;
            second.mutate(random)?;

            match self.solver.solve(&mut first, &mut second) {
                Ok(SolveOutcome {
                    solution: Some(solution),
                    sidetrack_depth,
                    ..
                }) if sidetrack_depth == target => {
                    log::debug!(
                        "accepted page pair after {attempts} attempts: {} steps, sidetrack depth {sidetrack_depth}",
                        solution.len()
                    );
                    return Ok(GeneratedPuzzle {
                        seed: None,
                        first,
                        second,
                        solution,
                        sidetrack_depth,
                        attempts,
                    });
                }
                Ok(outcome) => {
                    log::trace!(
                        "attempt {attempts} rejected: solved={}, sidetrack depth {} (target {target})",
                        outcome.solution.is_some(),
                        outcome.sidetrack_depth
                    );
                }
                Err(SolveError::MultipleSolutions) => {
                    log::trace!("attempt {attempts} rejected: multiple solutions");
                }
            }
        }
    }
}
