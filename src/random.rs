//! Random number generation for the simulation core.
//!
//! All stochastic draws in this crate (age sampling, inventory shuffles,
//! cluster sizing, gathering-day selection, exploration resolution) consume
//! from a single sequential stream. The stream is an explicitly passed
//! [`SimRng`] handle, created once per run from the configured seed and
//! threaded by reference through every sampling call; reordering any sampling
//! step changes all downstream outcomes for a fixed seed.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// The random stream handle threaded through all stochastic operations.
pub type SimRng = SmallRng;

/// Creates the run-wide random stream from a base seed. Call this exactly
/// once per simulation run; never re-seed mid-run.
#[must_use]
pub fn seeded_rng(seed: u64) -> SimRng {
    SmallRng::seed_from_u64(seed)
}

/// Draws `count` random indices out of `weights`, where entry `i` is
/// selected with probability proportional to `weights[i]`. The weighted
/// index is built once and reused across all draws.
///
/// Weights must be non-negative with a positive sum; callers in this crate
/// construct them from normalized probability masses, so the index build
/// cannot fail.
pub fn sample_weighted(rng: &mut SimRng, weights: &[f64], count: usize) -> Vec<usize> {
    let index = WeightedIndex::new(weights).unwrap();
    (0..count).map(|_| index.sample(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn same_seed_same_stream() {
        let mut a = seeded_rng(42);
        let mut b = seeded_rng(42);
        for _ in 0..10 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn different_seed_different_stream() {
        let mut a = seeded_rng(42);
        let mut b = seeded_rng(88);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn sample_weighted_in_range() {
        let mut rng = seeded_rng(42);
        let draws = sample_weighted(&mut rng, &[0.1, 0.3, 0.4], 100);
        assert_eq!(draws.len(), 100);
        assert!(draws.iter().all(|&i| i < 3));
    }

    #[test]
    fn sample_weighted_respects_weights() {
        let mut rng = seeded_rng(42);
        // Zero is selected with probability 1/3, one with a probability of 2/3.
        let draws = sample_weighted(&mut rng, &[1.0, 2.0], 3000);
        let zero_counter = draws.iter().filter(|&&i| i == 0).count() as i32;
        // The expected value of `zero_counter` is 1000.
        assert!((zero_counter - 1000).abs() < 100);
    }
}
