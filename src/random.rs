use rand::Rng;

const MULTIPLIER_A: i64 = 1103515245;
const INCREMENT_C: i64 = 12345;
const DEFAULT_SEED: i64 = 3819201;

/// A source of bounded random numbers.
///
/// Test corpora (random game trees, shuffled key sets) are built through this
/// trait so they can run against a deterministic generator.
pub trait RandomSource {
    /// Returns a value in `[0, bound)`. `bound` must be positive.
    fn next_in(&mut self, bound: u32) -> u32;

    /// Fisher-Yates shuffle driven by `next_in`.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_in(i as u32 + 1) as usize;
            items.swap(i, j);
        }
    }
}

/// A `RandomSource` backed by the `rand` crate's thread-local generator.
#[derive(Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_in(&mut self, bound: u32) -> u32 {
        rand::rng().random_range(0..bound)
    }
}

/// A deterministic linear congruential generator.
///
/// Statistically weak, but reproducible across runs and platforms, which is
/// what the test corpora need.
pub struct Lcg {
    seed: i64,
}

impl Default for Lcg {
    fn default() -> Self {
        Lcg::new(DEFAULT_SEED)
    }
}

impl Lcg {
    pub const fn new(seed: i64) -> Self {
        Self { seed }
    }
}

impl RandomSource for Lcg {
    fn next_in(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0, "next_in called with a zero bound");
        self.seed =
            (self.seed.wrapping_mul(MULTIPLIER_A).wrapping_add(INCREMENT_C)) % (i32::MAX as i64);
        (self.seed % bound as i64).unsigned_abs() as u32
    }
}

#[cfg(test)]
mod tests {
    use crate::random::{Lcg, RandomSource};

    #[test]
    fn same_seed_outputs_same_numbers() {
        let mut a = Lcg::new(42);
        let mut b = Lcg::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_in(10), b.next_in(10));
        }
    }

    #[test]
    fn outputs_stay_in_bounds() {
        let mut crg = Lcg::default();
        for bound in [1, 2, 7, 100] {
            for _ in 0..50 {
                assert!(crg.next_in(bound) < bound);
            }
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut crg = Lcg::new(7);
        let mut items: Vec<u32> = (0..30).collect();
        crg.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..30).collect::<Vec<_>>());
    }
}
