use std::fmt::{self, Display};

use linked_maze_core::{Direction, Page};

/// Identifies one page of the pair passed to [`JointSolver::solve`].
///
/// [`JointSolver::solve`]: crate::JointSolver::solve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Side {
    /// The page that moves first.
    First,
    /// The partner page.
    Second,
}

impl Side {
    /// Returns the other side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("1"),
            Self::Second => f.write_str("2"),
        }
    }
}

/// A single move of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    /// The page that moved.
    pub side: Side,
    /// The direction it moved in.
    pub direction: Direction,
}

impl Step {
    /// Creates a new step.
    #[must_use]
    pub const fn new(side: Side, direction: Direction) -> Self {
        Self { side, direction }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.side, self.direction.arrow())
    }
}

/// An alternating sequence of steps leading both pages to their goals.
///
/// Steps alternate between the sides, starting with [`Side::First`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    steps: Vec<Step>,
}

impl Solution {
    pub(crate) fn from_steps(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Returns the steps in order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the solution has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Walks the solution on copies of a page pair and reports whether it is valid.
    ///
    /// Each step must belong to the side whose turn it is, be allowed by the
    /// partner's current cell, and stay on the page. The solution is valid if
    /// every step passes and both pages end on their goals.
    #[must_use]
    pub fn replay(&self, first: &Page, second: &Page) -> bool {
        let mut first = first.clone();
        let mut second = second.clone();
        let mut turn = Side::First;
        for step in &self.steps {
            if step.side != turn {
                return false;
            }
            let (mover, partner) = match step.side {
                Side::First => (&mut first, &second),
                Side::Second => (&mut second, &first),
            };
            if !partner.current_exits().has(step.direction) || mover.step(step.direction).is_err()
            {
                return false;
            }
            turn = turn.other();
        }
        first.is_at_goal() && second.is_at_goal()
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            Display::fmt(step, f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use linked_maze_core::Position;

    use super::*;

    fn partner_pages() -> (Page, Page) {
        let mut first = Page::new(3, 2, Position::new(1, 0), Position::new(2, 0));
        let mut second = Page::new(3, 2, Position::new(2, 1), Position::new(2, 0));
        second[Position::new(2, 1)].add_exit(Direction::East).unwrap();
        first[Position::new(2, 0)].add_exit(Direction::South).unwrap();
        (first, second)
    }

    fn partner_solution() -> Solution {
        Solution::from_steps(vec![
            Step::new(Side::First, Direction::East),
            Step::new(Side::Second, Direction::South),
        ])
    }

    #[test]
    fn test_display() {
        assert_eq!(partner_solution().to_string(), "1:> 2:v");
        assert_eq!(Solution::from_steps(Vec::new()).to_string(), "");
    }

    #[test]
    fn test_replay_accepts_valid_solution() {
        let (first, second) = partner_pages();
        assert!(partner_solution().replay(&first, &second));
        assert_eq!(first.position(), Position::new(1, 0));
    }

    #[test]
    fn test_replay_rejects_disallowed_step() {
        let (first, second) = partner_pages();
        let solution = Solution::from_steps(vec![
            Step::new(Side::First, Direction::North),
            Step::new(Side::Second, Direction::South),
        ]);
        assert!(!solution.replay(&first, &second));
    }

    #[test]
    fn test_replay_rejects_out_of_turn_step() {
        let (first, second) = partner_pages();
        let solution = Solution::from_steps(vec![Step::new(Side::Second, Direction::South)]);
        assert!(!solution.replay(&first, &second));
    }

    #[test]
    fn test_replay_rejects_incomplete_solution() {
        let (first, second) = partner_pages();
        let solution = Solution::from_steps(vec![Step::new(Side::First, Direction::East)]);
        assert!(!solution.replay(&first, &second));
    }

    #[test]
    fn test_side_other() {
        assert_eq!(Side::First.other(), Side::Second);
        assert_eq!(Side::Second.other(), Side::First);
        assert!(Side::First.is_first());
    }
}
