//! Randomness used by the engine.
//!
//! Every random decision the GA makes goes through [`RandomSource`], which
//! the population owns. Production code wraps a seeded [`StdRng`]; tests
//! can substitute a scripted source to pin down exact outcomes.

use super::types::{Gene, GeneBounds};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The random decisions the GA needs.
pub trait RandomSource {
    /// Returns `true` with the given probability in `[0, 1]`.
    fn chance(&mut self, probability: f64) -> bool;

    /// Uniform index in `0..n`. `n` must be positive.
    fn index(&mut self, n: usize) -> usize;

    /// Uniform gene value within `bounds`.
    fn gene(&mut self, bounds: GeneBounds) -> Gene;

    /// `-1` or `+1` with equal probability.
    fn sign(&mut self) -> i8 {
        if self.index(2) == 0 {
            -1
        } else {
            1
        }
    }
}

/// Adapts any [`Rng`] to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn chance(&mut self, probability: f64) -> bool {
        self.0.random::<f64>() < probability
    }

    fn index(&mut self, n: usize) -> usize {
        self.0.random_range(0..n)
    }

    fn gene(&mut self, bounds: GeneBounds) -> Gene {
        self.0.random_range(bounds.lower..=bounds.upper)
    }
}

/// Creates a deterministic generator from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Seeded source when `seed` is given, entropy-seeded otherwise.
pub fn source_from_seed(seed: Option<u64>) -> RngSource<StdRng> {
    let seed = seed.unwrap_or_else(rand::random);
    log::trace!("rng seed: {seed}");
    RngSource::new(create_rng(seed))
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::*;
    use std::collections::VecDeque;

    /// Replays fixed answers in order; panics once a queue runs dry.
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedSource {
        pub chances: VecDeque<bool>,
        pub indices: VecDeque<usize>,
        pub genes: VecDeque<Gene>,
    }

    impl ScriptedSource {
        pub fn new(chances: &[bool], indices: &[usize], genes: &[Gene]) -> Self {
            Self {
                chances: chances.iter().copied().collect(),
                indices: indices.iter().copied().collect(),
                genes: genes.iter().copied().collect(),
            }
        }

        pub fn is_exhausted(&self) -> bool {
            self.chances.is_empty() && self.indices.is_empty() && self.genes.is_empty()
        }
    }

    impl RandomSource for ScriptedSource {
        fn chance(&mut self, _probability: f64) -> bool {
            self.chances.pop_front().expect("chance script exhausted")
        }

        fn index(&mut self, n: usize) -> usize {
            let i = self.indices.pop_front().expect("index script exhausted");
            assert!(i < n, "scripted index {i} out of range 0..{n}");
            i
        }

        fn gene(&mut self, bounds: GeneBounds) -> Gene {
            let g = self.genes.pop_front().expect("gene script exhausted");
            assert!(bounds.contains(g), "scripted gene {g} outside bounds");
            g
        }
    }
}
