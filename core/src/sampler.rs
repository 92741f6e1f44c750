use alloc::string::String;
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::*;

/// Uniform index source used for every random decision in a round.
pub trait RandomSource {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn index(&mut self, len: usize) -> usize;

    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            None
        } else {
            items.get(self.index(items.len()))
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }
}

/// Seedable random source, the default for real games.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: SmallRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Picks `count` categories uniformly with replacement.
pub fn sample_categories<R: RandomSource>(
    categories: &[String],
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>> {
    if categories.is_empty() {
        return Err(GameError::InsufficientCategories);
    }

    Ok((0..count)
        .map(|_| categories[rng.index(categories.len())].clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedRandom;
    use alloc::string::ToString;
    use alloc::vec;

    fn categories(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn sample_always_returns_requested_count_from_list() {
        let list = categories(&["A", "B", "C"]);
        let mut rng = SeededRandom::new(7);

        for _ in 0..50 {
            let sampled = sample_categories(&list, ROUND_COLUMNS, &mut rng).unwrap();
            assert_eq!(sampled.len(), ROUND_COLUMNS);
            assert!(sampled.iter().all(|c| list.contains(c)));
        }
    }

    #[test]
    fn single_category_fills_every_column() {
        let list = categories(&["SCIENCE"]);
        let mut rng = SeededRandom::new(1);

        let sampled = sample_categories(&list, ROUND_COLUMNS, &mut rng).unwrap();

        assert_eq!(sampled, vec!["SCIENCE".to_string(); ROUND_COLUMNS]);
    }

    #[test]
    fn sampling_allows_repeats() {
        let list = categories(&["A", "B", "C"]);
        let mut rng = ScriptedRandom::new(&[2, 2, 0, 1, 0, 2]);

        let sampled = sample_categories(&list, ROUND_COLUMNS, &mut rng).unwrap();

        assert_eq!(sampled, ["C", "C", "A", "B", "A", "C"]);
    }

    #[test]
    fn empty_list_is_insufficient() {
        let mut rng = SeededRandom::new(0);
        assert_eq!(
            sample_categories(&[], ROUND_COLUMNS, &mut rng),
            Err(GameError::InsufficientCategories)
        );
    }

    #[test]
    fn seeded_source_is_deterministic() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);

        for len in 1..20 {
            let index = a.index(len);
            assert_eq!(index, b.index(len));
            assert!(index < len);
        }
    }
}
