//! Fitness evaluation and ranking.
//!
//! Error is the sum of squared character-code differences between a genome
//! and the target. Lower is better; 0 is an exact match.

use super::types::{Gene, Genome, Target};

/// Sum of squared per-position differences.
///
/// Compares position by position up to the shorter of the two slices.
///
/// ```
/// use string_ga::ga::fitness::sum_squared_error;
///
/// assert_eq!(sum_squared_error(b"AB", b"AB"), 0);
/// assert_eq!(sum_squared_error(b"AC", b"AA"), 4);
/// ```
pub fn sum_squared_error(genes: &[Gene], target: &[Gene]) -> u64 {
    genes
        .iter()
        .zip(target)
        .map(|(&g, &t)| {
            let d = u64::from(g.abs_diff(t));
            d * d
        })
        .sum()
}

/// Outcome of one evaluation pass over a population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Position of the lowest-error genome seen in the pass.
    pub best_index: usize,
    /// Its error.
    pub best_error: u64,
    /// `true` if the pass stopped early on an exact match.
    pub exact: bool,
}

/// Evaluates `pool` against `target`, caching each genome's error.
///
/// Stops at the first genome with error 0; genomes after it keep their
/// previous error. Among equal minima the later genome wins.
///
/// # Panics
/// Panics if `pool` is empty.
pub fn evaluate(pool: &mut [Genome], target: Target<'_>) -> Evaluation {
    assert!(!pool.is_empty(), "cannot evaluate an empty population");

    let mut best = Evaluation {
        best_index: 0,
        best_error: u64::MAX,
        exact: false,
    };

    for (i, genome) in pool.iter_mut().enumerate() {
        let error = sum_squared_error(genome.genes(), target.genes());
        genome.set_error(error);

        if error <= best.best_error {
            best.best_index = i;
            best.best_error = error;
            if error == 0 {
                best.exact = true;
                return best;
            }
        }
    }

    best
}

/// Orders `pool` by ascending cached error. Ties are in no particular order.
pub fn rank(pool: &mut [Genome]) {
    pool.sort_unstable_by_key(Genome::error);
}
