//! Uniform random numbers for randomized combinators

use crate::config::Settings;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// A source of uniformly distributed numbers in `[0, 1)`.
///
/// Every [`rand::RngCore`] is a source, so `rand::thread_rng()` and seeded
/// generators can be passed directly.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// A deterministic generator for reproducible runs
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// The seeded generator named by `settings`, or the thread RNG
pub fn from_settings(settings: &Settings) -> Box<dyn RngCore> {
    match settings.shuffle_seed {
        Some(seed) => {
            tracing::debug!(seed, "using seeded random source");
            Box::new(seeded(seed))
        }
        None => Box::new(rand::thread_rng()),
    }
}
