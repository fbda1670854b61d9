use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::CellCount;

/// Source of uniformly distributed integers for driving trials.
pub trait RandomSource {
    /// Returns a value in `[0, upper)`. `upper` must be non-zero.
    fn uniform_int(&mut self, upper: CellCount) -> CellCount;

    /// Seed this source was constructed from.
    fn seed(&self) -> u64;
}

/// Reproducible [`RandomSource`] over a small, fast PRNG.
#[derive(Clone, Debug)]
pub struct SeededSource {
    seed: u64,
    rng: SmallRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Picks a fresh seed from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Draws a raw 64-bit value, used to derive seeds for child sources.
    pub fn next_seed(&mut self) -> u64 {
        self.rng.random()
    }
}

impl RandomSource for SeededSource {
    fn uniform_int(&mut self, upper: CellCount) -> CellCount {
        self.rng.random_range(0..upper)
    }

    fn seed(&self) -> u64 {
        self.seed
    }
}
