use std::{collections::HashSet, mem};

use linked_maze_core::{ExitDirections, Page, Position};

use crate::{Side, SolveError, Solution, Step};

/// Result of a completed joint search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    /// The unique solution, or `None` if the goals cannot be reached together.
    pub solution: Option<Solution>,
    /// Deepest chain of dead-end search levels met anywhere in the search.
    ///
    /// A solution reached without any dead end has depth 0.
    pub sidetrack_depth: usize,
    /// Number of joint states entered during the search.
    pub explored_states: usize,
}

/// Exhaustive solver for a pair of linked pages.
///
/// The search alternates roles at every level: the *mover* tries each
/// direction offered by the *other* page's current cell, in canonical order,
/// and on a successful step the roles swap. Steps that leave the page are
/// pruned. A joint state already on the current search path is a cycle and is
/// pruned as well.
///
/// Uniqueness is checked over the whole search: as soon as a second solution
/// appears at any level the search stops with
/// [`SolveError::MultipleSolutions`].
///
/// Search levels live on a heap-allocated stack, so the depth of the search
/// is bounded by memory rather than by the thread stack. Both pages are back
/// at the positions they had on entry when `solve` returns, whether it
/// succeeds or fails.
///
/// # Sidetrack depth
///
/// Every search level that finds no solution adds one to the deepest depth
/// reported by its own sub-searches. The value reported for the whole search
/// is the maximum over all branches tried, so it grows with the length of the
/// longest dead end a player could wander into.
///
/// # Examples
///
/// ```
/// use linked_maze_core::{Direction, Page, Position};
/// use linked_maze_solver::JointSolver;
///
/// let mut first = Page::new(3, 2, Position::new(1, 0), Position::new(1, 1));
/// let mut second = Page::new(3, 2, Position::new(2, 1), Position::new(2, 1));
/// second[Position::new(2, 1)].add_exit(Direction::South)?;
///
/// let outcome = JointSolver::new().solve(&mut first, &mut second)?;
/// assert!(outcome.solution.is_none());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JointSolver;

impl JointSolver {
    /// Creates a new solver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Searches for the unique solution of a page pair.
    ///
    /// `first` makes the first move, using the exits of `second`'s current
    /// cell. The search starts from the pages' current positions.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::MultipleSolutions`] if more than one solution
    /// exists.
    pub fn solve(&self, first: &mut Page, second: &mut Page) -> Result<SolveOutcome, SolveError> {
        let mut pages = PagePair::new(first, second);
        let mut search = Search::default();
        let (steps, sidetrack_depth) = search.run(&mut pages)?;
        let solution = steps.map(|mut steps| {
            steps.reverse();
            Solution::from_steps(steps)
        });
        log::trace!(
            "joint search finished: solved={}, sidetrack_depth={sidetrack_depth}, explored={}",
            solution.is_some(),
            search.explored_states
        );
        Ok(SolveOutcome {
            solution,
            sidetrack_depth,
            explored_states: search.explored_states,
        })
    }
}

/// The two pages under search, put back at their entry positions on drop.
struct PagePair<'a> {
    first: &'a mut Page,
    second: &'a mut Page,
    entry: [Position; 2],
}

impl<'a> PagePair<'a> {
    fn new(first: &'a mut Page, second: &'a mut Page) -> Self {
        let entry = [first.position(), second.position()];
        Self {
            first,
            second,
            entry,
        }
    }

    fn page(&self, side: Side) -> &Page {
        match side {
            Side::First => &*self.first,
            Side::Second => &*self.second,
        }
    }

    fn page_mut(&mut self, side: Side) -> &mut Page {
        match side {
            Side::First => &mut *self.first,
            Side::Second => &mut *self.second,
        }
    }

    fn both_at_goal(&self) -> bool {
        self.first.is_at_goal() && self.second.is_at_goal()
    }
}

impl Drop for PagePair<'_> {
    fn drop(&mut self) {
        let [first, second] = self.entry;
        self.first.set_position(first);
        self.second.set_position(second);
    }
}

/// Joint state used for cycle detection along the current search path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct JointState {
    mover: Side,
    mover_position: Position,
    other_position: Position,
}

/// One level of the search.
#[derive(Debug)]
struct Frame {
    mover: Side,
    /// Mover position on entry to this level, restored after every try.
    origin: Position,
    directions: ExitDirections,
    /// Steps found below this level, in reverse order.
    solution: Option<Vec<Step>>,
    max_depth: usize,
}

impl Frame {
    fn new(mover: Side, pages: &PagePair<'_>) -> Self {
        Self {
            mover,
            origin: pages.page(mover).position(),
            directions: pages.page(mover.other()).current_exits().directions(),
            solution: None,
            max_depth: 0,
        }
    }

    fn depth(&self) -> usize {
        self.max_depth + usize::from(self.solution.is_none())
    }
}

#[derive(Debug, Default)]
struct Search {
    path: HashSet<JointState>,
    explored_states: usize,
}

impl Search {
    /// Returns the steps of the solution in reverse order, and the sidetrack
    /// depth of the whole search.
    fn run(&mut self, pages: &mut PagePair<'_>) -> Result<(Option<Vec<Step>>, usize), SolveError> {
        let mut frame = Frame::new(Side::First, pages);
        // Suspended levels with the state and step that led out of each.
        let mut parents: Vec<(Frame, JointState, Step)> = Vec::new();

        loop {
            let Some(direction) = frame.directions.next() else {
                let depth = frame.depth();
                let Some((mut parent, state, step)) = parents.pop() else {
                    return Ok((frame.solution, depth));
                };
                self.path.remove(&state);
                pages.page_mut(parent.mover).set_position(parent.origin);

                parent.max_depth = parent.max_depth.max(depth);
                if let Some(mut steps) = frame.solution {
                    if parent.solution.is_some() {
                        return Err(SolveError::MultipleSolutions);
                    }
                    steps.push(step);
                    parent.solution = Some(steps);
                }
                frame = parent;
                continue;
            };

            if pages.page_mut(frame.mover).step(direction).is_err() {
                continue;
            }
            let step = Step::new(frame.mover, direction);

            if pages.both_at_goal() {
                pages.page_mut(frame.mover).set_position(frame.origin);
                if frame.solution.is_some() {
                    return Err(SolveError::MultipleSolutions);
                }
                frame.solution = Some(vec![step]);
                continue;
            }

            let state = JointState {
                mover: frame.mover,
                mover_position: pages.page(frame.mover).position(),
                other_position: pages.page(frame.mover.other()).position(),
            };
            if !self.path.insert(state) {
                pages.page_mut(frame.mover).set_position(frame.origin);
                continue;
            }
            self.explored_states += 1;

            let child = Frame::new(frame.mover.other(), pages);
            parents.push((mem::replace(&mut frame, child), state, step));
        }
    }
}
