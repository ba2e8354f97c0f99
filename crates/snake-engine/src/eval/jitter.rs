//! Tie-breaking noise added to every leaf evaluation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::eval::score::{Score, JITTER_BOUND};

/// Source of the uniform jitter in `[-JITTER_BOUND, JITTER_BOUND]`.
///
/// Each [`sample`](Jitter::sample) is a fresh draw; a disabled source always
/// yields exactly zero.
#[derive(Debug, Clone)]
pub struct Jitter {
    rng: Option<StdRng>,
}

impl Jitter {
    /// Reproducible jitter from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }

    /// Jitter seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: Some(StdRng::from_entropy()),
        }
    }

    /// No jitter at all.
    pub fn disabled() -> Self {
        Self { rng: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.rng.is_some()
    }

    /// Draw the next jitter value.
    pub fn sample(&mut self) -> Score {
        match self.rng.as_mut() {
            Some(rng) => rng.gen_range(-JITTER_BOUND..=JITTER_BOUND),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_is_zero() {
        let mut jitter = Jitter::disabled();
        assert!(!jitter.is_enabled());
        assert!((0..100).all(|_| jitter.sample() == 0.0));
    }

    #[test]
    fn samples_stay_within_bound() {
        let mut jitter = Jitter::seeded(7);
        for _ in 0..10_000 {
            let value = jitter.sample();
            assert!(value.abs() <= JITTER_BOUND, "jitter {value} out of bounds");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Jitter::seeded(42);
        let mut b = Jitter::seeded(42);
        let xs: Vec<Score> = (0..16).map(|_| a.sample()).collect();
        let ys: Vec<Score> = (0..16).map(|_| b.sample()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn draws_are_not_memoized() {
        let mut jitter = Jitter::seeded(3);
        let first = jitter.sample();
        assert!((0..16).any(|_| jitter.sample() != first));
    }
}
