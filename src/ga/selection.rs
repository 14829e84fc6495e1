//! Tournament selection.
//!
//! # References
//!
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"

use super::random::RandomSource;
use super::types::Genome;

/// Picks two parents by tournament and returns their indices.
///
/// Two individuals are drawn uniformly with replacement; the fitter one is
/// provisional parent 1. Each of the remaining `k - 2` draws replaces
/// parent 1 if strictly fitter, otherwise parent 2 if strictly fitter than
/// it. The first index never has a higher error than the second.
///
/// # Panics
/// Panics if `pool` is empty or `k < 2`.
pub fn tournament<S: RandomSource + ?Sized>(
    pool: &[Genome],
    k: usize,
    rng: &mut S,
) -> (usize, usize) {
    assert!(!pool.is_empty(), "cannot select from empty population");
    assert!(k >= 2, "tournament size must be at least 2");

    let n = pool.len();
    let mut p1 = rng.index(n);
    let mut p2 = rng.index(n);
    if pool[p1].error() > pool[p2].error() {
        std::mem::swap(&mut p1, &mut p2);
    }

    for _ in 2..k {
        let challenger = rng.index(n);
        if pool[challenger].error() < pool[p1].error() {
            p1 = challenger;
        } else if pool[challenger].error() < pool[p2].error() {
            p2 = challenger;
        }
    }

    (p1, p2)
}
