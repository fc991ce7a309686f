//! End-to-end solver scenarios on small page pairs.

use linked_maze_core::{Direction, Page, Position};
use linked_maze_solver::{JointSolver, Side, SolveError, Step};
use proptest::prelude::*;
use rand::SeedableRng as _;
use rand_pcg::Pcg64;

fn pair(first_goal: Position) -> (Page, Page) {
    let first = Page::new(3, 2, Position::new(1, 0), first_goal).with_name("1");
    let second = Page::new(3, 2, Position::new(2, 1), Position::new(2, 1)).with_name("2");
    (first, second)
}

#[test]
fn north_exit_solves_in_one_step() {
    let (mut first, mut second) = pair(Position::new(1, 1));
    second[Position::new(2, 1)].add_exit(Direction::North).unwrap();

    let outcome = JointSolver::new().solve(&mut first, &mut second).unwrap();

    let solution = outcome.solution.unwrap();
    assert_eq!(solution.steps(), [Step::new(Side::First, Direction::North)]);
    assert_eq!(outcome.sidetrack_depth, 0);
    assert!(solution.replay(&first, &second));
}

#[test]
fn south_exit_has_no_solution() {
    let (mut first, mut second) = pair(Position::new(1, 1));
    second[Position::new(2, 1)].add_exit(Direction::South).unwrap();

    let outcome = JointSolver::new().solve(&mut first, &mut second).unwrap();

    assert!(outcome.solution.is_none());
}

#[test]
fn extraneous_exit_adds_no_second_solution() {
    let (mut first, mut second) = pair(Position::new(2, 0));
    second[Position::new(2, 1)].add_exit(Direction::North).unwrap();
    second[Position::new(2, 1)].add_exit(Direction::East).unwrap();

    let outcome = JointSolver::new().solve(&mut first, &mut second).unwrap();

    assert_eq!(
        outcome.solution.unwrap().steps(),
        [Step::new(Side::First, Direction::East)]
    );
}

/// Row-by-row serpentine path over an `n × n` page, starting at the origin.
fn serpentine(n: u8) -> Vec<Position> {
    (0..n)
        .flat_map(|y| {
            let row: Vec<_> = if y % 2 == 0 {
                (0..n).collect()
            } else {
                (0..n).rev().collect()
            };
            row.into_iter().map(move |x| Position::new(x, y))
        })
        .collect()
}

/// Both pages follow the same snake. The second page's cell at point `i` and
/// the first page's cell at point `i + 1` both point towards point `i + 1`,
/// so the markers leapfrog each other along the path.
fn serpentine_pair(n: u8) -> (Page, Page, Vec<Position>) {
    let path = serpentine(n);
    let (start, goal) = (path[0], path[path.len() - 1]);
    let mut first = Page::new(n, n, start, goal);
    let mut second = Page::new(n, n, start, goal);
    for (i, pair) in path.windows(2).enumerate() {
        let dx = i8::try_from(i16::from(pair[1].x()) - i16::from(pair[0].x())).unwrap();
        let dy = i8::try_from(i16::from(pair[1].y()) - i16::from(pair[0].y())).unwrap();
        let direction = Direction::from_vector(dx, dy).unwrap();
        second[path[i]].add_exit(direction).unwrap();
        first[path[i + 1]].add_exit(direction).unwrap();
    }
    (first, second, path)
}

#[test]
fn long_serpentine_pair_is_solved() {
    let (mut first, mut second, path) = serpentine_pair(64);

    let outcome = JointSolver::new().solve(&mut first, &mut second).unwrap();

    let solution = outcome.solution.unwrap();
    let moves = 2 * (path.len() - 1);
    assert_eq!(solution.len(), moves);
    assert_eq!(outcome.sidetrack_depth, 0);
    assert_eq!(outcome.explored_states, moves - 1);
    assert_eq!(solution.steps()[0], Step::new(Side::First, Direction::East));
    assert_eq!(first.position(), first.start());
    assert_eq!(second.position(), second.start());
    assert!(solution.replay(&first, &second));
}

fn mutated_pair(seed: u64, rounds: usize) -> (Page, Page) {
    let mut rng = Pcg64::seed_from_u64(seed);
    let mut first = Page::new(3, 4, Position::new(0, 0), Position::new(2, 3));
    let mut second = Page::new(3, 4, Position::new(0, 1), Position::new(2, 2));
    for _ in 0..rounds {
        first.mutate(&mut rng).unwrap();
        second.mutate(&mut rng).unwrap();
    }
    (first, second)
}

proptest! {
    #[test]
    fn solving_is_repeatable_and_restores_positions(seed in any::<u64>(), rounds in 0usize..80) {
        let (mut first, mut second) = mutated_pair(seed, rounds);
        let solver = JointSolver::new();

        let once = solver.solve(&mut first, &mut second);
        prop_assert_eq!(first.position(), first.start());
        prop_assert_eq!(second.position(), second.start());
        let twice = solver.solve(&mut first, &mut second);
        prop_assert_eq!(&once, &twice);

        match once {
            Ok(outcome) => {
                if let Some(solution) = &outcome.solution {
                    prop_assert!(solution.replay(&first, &second));
                    prop_assert!(!solution.is_empty());
                } else {
                    prop_assert!(outcome.sidetrack_depth >= 1);
                }
            }
            Err(err) => prop_assert_eq!(err, SolveError::MultipleSolutions),
        }
    }
}
