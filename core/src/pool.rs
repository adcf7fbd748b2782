use core::ops::RangeInclusive;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{GameError, NUMBERS, Result};

/// The set of numbers not yet called this session.
///
/// Shrinks monotonically: a drawn number never returns to the pool. Board
/// generation only ever reads the pool through [`NumberPool::in_range`]; it
/// works against its own cloned copy so live draws stay unaffected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberPool {
    numbers: Vec<u8>,
}

impl NumberPool {
    /// A fresh pool holding every callable number `0..=99`.
    pub fn full() -> Self {
        Self {
            numbers: (0..NUMBERS).collect(),
        }
    }

    /// Builds a pool from an explicit set of numbers, rejecting duplicates
    /// and values outside `0..=99`. Mostly useful for tests and partially
    /// exhausted scenarios.
    pub fn from_numbers(numbers: impl IntoIterator<Item = u8>) -> Result<Self> {
        let mut seen = [false; NUMBERS as usize];
        let mut collected = Vec::new();
        for number in numbers {
            if number >= NUMBERS {
                return Err(GameError::NumberOutOfRange(number));
            }
            if seen[number as usize] {
                return Err(GameError::DuplicateNumber(number));
            }
            seen[number as usize] = true;
            collected.push(number);
        }
        Ok(Self { numbers: collected })
    }

    pub fn remaining(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn contains(&self, number: u8) -> bool {
        self.numbers.contains(&number)
    }

    /// Undrawn numbers within the closed interval, in pool order. Read-only.
    pub fn in_range(&self, range: RangeInclusive<u8>) -> impl Iterator<Item = u8> + '_ {
        self.numbers
            .iter()
            .copied()
            .filter(move |number| range.contains(number))
    }

    /// Removes and returns one pool member chosen uniformly at random.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<u8> {
        if self.numbers.is_empty() {
            return Err(GameError::PoolExhausted);
        }
        let index = rng.random_range(0..self.numbers.len());
        Ok(self.numbers.swap_remove(index))
    }

    /// Removes a specific number, reporting whether it was present. Used by
    /// board generation against its scratch copy.
    pub(crate) fn remove(&mut self, number: u8) -> bool {
        match self.numbers.iter().position(|&n| n == number) {
            Some(index) => {
                self.numbers.swap_remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn full_pool_holds_every_number_once() {
        let pool = NumberPool::full();
        assert_eq!(pool.remaining(), 100);
        for number in 0..NUMBERS {
            assert!(pool.contains(number));
        }
    }

    #[test]
    fn draw_on_empty_pool_reports_exhaustion() {
        let mut pool = NumberPool::from_numbers(core::iter::empty()).unwrap();
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(pool.draw(&mut rng), Err(GameError::PoolExhausted));
    }

    #[test]
    fn from_numbers_rejects_duplicates_and_out_of_range() {
        assert_eq!(
            NumberPool::from_numbers([1, 2, 1]),
            Err(GameError::DuplicateNumber(1))
        );
        assert_eq!(
            NumberPool::from_numbers([100]),
            Err(GameError::NumberOutOfRange(100))
        );
    }

    #[test]
    fn in_range_filters_without_mutating() {
        let pool = NumberPool::from_numbers([3, 12, 19, 47]).unwrap();
        let tens: Vec<u8> = pool.in_range(10..=19).collect();
        assert_eq!(tens, vec![12, 19]);
        assert_eq!(pool.remaining(), 4);
    }

    #[test]
    fn remove_reports_presence() {
        let mut pool = NumberPool::from_numbers([7, 8]).unwrap();
        assert!(pool.remove(7));
        assert!(!pool.remove(7));
        assert_eq!(pool.remaining(), 1);
    }

    proptest! {
        /// Draining the pool yields each of 0..=99 exactly once, whatever the seed.
        #[test]
        fn draining_yields_no_duplicates(seed in any::<u64>()) {
            let mut pool = NumberPool::full();
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut seen = [false; NUMBERS as usize];
            while !pool.is_empty() {
                let number = pool.draw(&mut rng).unwrap();
                prop_assert!(number < NUMBERS);
                prop_assert!(!seen[number as usize]);
                seen[number as usize] = true;
            }
            prop_assert!(seen.iter().all(|&drawn| drawn));
            prop_assert_eq!(pool.draw(&mut rng), Err(GameError::PoolExhausted));
        }
    }
}
