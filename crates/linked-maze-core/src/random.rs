//! Randomness consumed by page mutation.
//!
//! Mutation only needs two primitives: picking an element of a finite ordered
//! sequence and picking an integer in an inclusive range. [`RandomSource`]
//! captures both, so that any [`rand`] generator can drive mutation and tests
//! can replay a scripted sequence of picks with [`ReplayRandom`].

use std::collections::{HashMap, VecDeque};

/// A source of uniform random picks.
///
/// Every [`rand::RngExt`] generator implements this trait.
pub trait RandomSource {
    /// Picks an index uniformly from `0..len`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `len` is zero.
    fn choose_index(&mut self, len: usize) -> usize;

    /// Picks an integer uniformly from `low..=high`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `low > high`.
    fn int_inclusive(&mut self, low: usize, high: usize) -> usize;

    /// Picks one element of `items` uniformly, or `None` if it is empty.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        items.get(self.choose_index(items.len()))
    }
}

impl<R> RandomSource for R
where
    R: rand::RngExt,
{
    fn choose_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    fn int_inclusive(&mut self, low: usize, high: usize) -> usize {
        self.random_range(low..=high)
    }
}

/// A deterministic [`RandomSource`] that replays recorded picks.
///
/// Sequence picks are served from one queue of indices. Integer picks are
/// served from a separate queue per requested range, so a script can state
/// "the x coordinate is 1" independently of the order in which ranges are
/// requested.
///
/// # Examples
///
/// ```
/// use linked_maze_core::{RandomSource, ReplayRandom};
///
/// let mut random = ReplayRandom::new()
///     .with_choices([3])
///     .with_ints(0, 2, [1]);
///
/// assert_eq!(random.int_inclusive(0, 2), 1);
/// assert_eq!(random.choose(&['a', 'b', 'c', 'd']), Some(&'d'));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReplayRandom {
    choices: VecDeque<usize>,
    ints: HashMap<(usize, usize), VecDeque<usize>>,
}

impl ReplayRandom {
    /// Creates an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends indices returned by [`RandomSource::choose_index`].
    #[must_use]
    pub fn with_choices<I>(mut self, indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.choices.extend(indices);
        self
    }

    /// Appends values returned by [`RandomSource::int_inclusive`] for `low..=high`.
    #[must_use]
    pub fn with_ints<I>(mut self, low: usize, high: usize, values: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.ints.entry((low, high)).or_default().extend(values);
        self
    }

    /// Returns `true` if every scripted pick has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.choices.is_empty() && self.ints.values().all(VecDeque::is_empty)
    }
}

impl RandomSource for ReplayRandom {
    /// # Panics
    ///
    /// Panics if the script has no more choices or the next one is out of range.
    fn choose_index(&mut self, len: usize) -> usize {
        let index = self
            .choices
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted choice left for a sequence of {len}"));
        assert!(index < len, "scripted choice {index} out of range for {len}");
        index
    }

    /// # Panics
    ///
    /// Panics if the script has no more values for `low..=high`.
    fn int_inclusive(&mut self, low: usize, high: usize) -> usize {
        self.ints
            .get_mut(&(low, high))
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| panic!("no scripted value left for range {low}..={high}"))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn test_replay_serves_ranges_independently() {
        let mut random = ReplayRandom::new()
            .with_ints(0, 2, [1, 2])
            .with_ints(0, 3, [0]);

        assert_eq!(random.int_inclusive(0, 3), 0);
        assert_eq!(random.int_inclusive(0, 2), 1);
        assert_eq!(random.int_inclusive(0, 2), 2);
        assert!(random.is_exhausted());
    }

    #[test]
    #[should_panic(expected = "no scripted choice left")]
    fn test_replay_panics_when_exhausted() {
        let mut random = ReplayRandom::new();
        let _ = random.choose_index(4);
    }

    #[test]
    fn test_choose_from_empty_slice() {
        let mut random = ReplayRandom::new();
        let empty: [u8; 0] = [];
        assert_eq!(random.choose(&empty), None);
    }

    #[test]
    fn test_rng_stays_in_range() {
        let mut rng = Pcg64::seed_from_u64(7);
        for _ in 0..100 {
            assert!(rng.choose_index(4) < 4);
            let v = rng.int_inclusive(2, 5);
            assert!((2..=5).contains(&v));
        }
    }
}
