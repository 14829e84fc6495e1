//! Crossover and mutation on gene sequences.
//!
//! Both operators write into caller-provided buffers so the population can
//! reuse its scratch space every generation.
//!
//! - [`crossover`]: single-point crossover producing two complementary children
//! - [`mutate`]: per-gene ±1 steps with a reflecting boundary

use super::random::RandomSource;
use super::types::{Gene, GeneBounds};

/// Single-point splice at `point`.
///
/// `child1 = parent1[..point] ++ parent2[point..]` and
/// `child2 = parent2[..point] ++ parent1[point..]`.
///
/// # Panics
/// Panics if the four slices differ in length or `point > len`.
pub fn splice(
    parent1: &[Gene],
    parent2: &[Gene],
    point: usize,
    child1: &mut [Gene],
    child2: &mut [Gene],
) {
    let n = parent1.len();
    assert!(
        parent2.len() == n && child1.len() == n && child2.len() == n,
        "parents and children must have equal length"
    );
    assert!(point <= n, "crossover point {point} beyond length {n}");

    child1[..point].copy_from_slice(&parent1[..point]);
    child1[point..].copy_from_slice(&parent2[point..]);
    child2[..point].copy_from_slice(&parent2[..point]);
    child2[point..].copy_from_slice(&parent1[point..]);
}

/// Single-point crossover.
///
/// With probability `rate` the parents are spliced at a uniform point in
/// `[0, len)`; otherwise the children are exact copies of the parents.
/// Returns `true` if recombination happened.
pub fn crossover<S: RandomSource + ?Sized>(
    parent1: &[Gene],
    parent2: &[Gene],
    child1: &mut [Gene],
    child2: &mut [Gene],
    rate: f64,
    rng: &mut S,
) -> bool {
    if rng.chance(rate) {
        let point = rng.index(parent1.len());
        splice(parent1, parent2, point, child1, child2);
        true
    } else {
        child1.copy_from_slice(parent1);
        child2.copy_from_slice(parent2);
        false
    }
}

/// Reflecting-boundary mutation.
///
/// Each gene is perturbed with probability `rate`. A gene strictly inside
/// `bounds` moves one step up or down at random; a gene at or below the
/// lower bound steps up, one at or above the upper bound steps down.
/// Genes that start inside `bounds` never leave it.
pub fn mutate<S: RandomSource + ?Sized>(
    genes: &mut [Gene],
    rate: f64,
    bounds: GeneBounds,
    rng: &mut S,
) {
    for gene in genes.iter_mut() {
        if !rng.chance(rate) {
            continue;
        }
        *gene = if bounds.lower < *gene && *gene < bounds.upper {
            gene.saturating_add_signed(rng.sign())
        } else if *gene <= bounds.lower {
            gene.saturating_add(1)
        } else {
            gene.saturating_sub(1)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::random::scripted::ScriptedSource;
    use crate::ga::random::{create_rng, RngSource};
    use proptest::prelude::*;

    #[test]
    fn test_splice_complementary() {
        let (mut c1, mut c2) = ([0u8; 5], [0u8; 5]);
        splice(b"AAAAA", b"BBBBB", 2, &mut c1, &mut c2);
        assert_eq!(&c1, b"AABBB");
        assert_eq!(&c2, b"BBAAA");
    }

    #[test]
    fn test_splice_at_zero_swaps_parents() {
        let (mut c1, mut c2) = ([0u8; 3], [0u8; 3]);
        splice(b"ABC", b"XYZ", 0, &mut c1, &mut c2);
        assert_eq!(&c1, b"XYZ");
        assert_eq!(&c2, b"ABC");
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn test_splice_length_mismatch_panics() {
        let (mut c1, mut c2) = ([0u8; 3], [0u8; 3]);
        splice(b"ABC", b"XY", 1, &mut c1, &mut c2);
    }

    #[test]
    fn test_crossover_full_rate_uses_drawn_point() {
        let (mut c1, mut c2) = ([0u8; 4], [0u8; 4]);
        let mut rng = ScriptedSource::new(&[true], &[3], &[]);
        assert!(crossover(b"ABCD", b"WXYZ", &mut c1, &mut c2, 1.0, &mut rng));
        assert_eq!(&c1, b"ABCZ");
        assert_eq!(&c2, b"WXYD");
    }

    #[test]
    fn test_crossover_zero_rate_copies_parents() {
        let mut rng = RngSource::new(create_rng(42));
        let (mut c1, mut c2) = ([0u8; 6], [0u8; 6]);
        for _ in 0..100 {
            assert!(!crossover(b"PARENT", b"OTHERS", &mut c1, &mut c2, 0.0, &mut rng));
            assert_eq!(&c1, b"PARENT");
            assert_eq!(&c2, b"OTHERS");
        }
    }

    #[test]
    fn test_crossover_preserves_gene_multiset_per_position() {
        let mut rng = RngSource::new(create_rng(9));
        let (p1, p2) = (b"ABCDEFGH", b"abcdefgh");
        let (mut c1, mut c2) = ([0u8; 8], [0u8; 8]);
        for _ in 0..100 {
            crossover(p1, p2, &mut c1, &mut c2, 1.0, &mut rng);
            for i in 0..8 {
                let mut got = [c1[i], c2[i]];
                let mut want = [p1[i], p2[i]];
                got.sort_unstable();
                want.sort_unstable();
                assert_eq!(got, want);
            }
        }
    }

    #[test]
    fn test_mutate_zero_rate_is_identity() {
        let mut rng = RngSource::new(create_rng(1));
        let mut genes = *b"UNCHANGED";
        mutate(&mut genes, 0.0, GeneBounds::UPPERCASE, &mut rng);
        assert_eq!(&genes, b"UNCHANGED");
    }

    #[test]
    fn test_mutate_reflects_at_bounds() {
        let bounds = GeneBounds::UPPERCASE;
        let mut genes = [b'A', b'Z'];
        let mut rng = ScriptedSource::new(&[true, true], &[], &[]);
        mutate(&mut genes, 1.0, bounds, &mut rng);
        assert_eq!(genes, [b'B', b'Y']);
    }

    #[test]
    fn test_mutate_pulls_outside_genes_inward() {
        let bounds = GeneBounds::UPPERCASE;
        let mut genes = [b' ', b'z'];
        let mut rng = ScriptedSource::new(&[true, true], &[], &[]);
        mutate(&mut genes, 1.0, bounds, &mut rng);
        assert_eq!(genes, [b'!', b'y']);
    }

    #[test]
    fn test_mutate_interior_steps_by_sign() {
        let bounds = GeneBounds::UPPERCASE;
        let mut genes = *b"MMM";
        // chance per gene; sign index 0 => -1, 1 => +1
        let mut rng = ScriptedSource::new(&[true, false, true], &[0, 1], &[]);
        mutate(&mut genes, 0.5, bounds, &mut rng);
        assert_eq!(&genes, b"LMN");
        assert!(rng.is_exhausted());
    }

    proptest! {
        #[test]
        fn prop_mutation_stays_in_bounds(
            lower in 0u8..=254,
            width in 1u8..=255,
            seed in any::<u64>(),
            rate in 0.0f64..=1.0,
            len in 1usize..64,
            rounds in 1usize..50,
        ) {
            let upper = lower.saturating_add(width);
            prop_assume!(lower < upper);
            let bounds = GeneBounds { lower, upper };
            let mut rng = RngSource::new(create_rng(seed));
            let mut genes: Vec<Gene> = (0..len).map(|_| rng.gene(bounds)).collect();

            for _ in 0..rounds {
                mutate(&mut genes, rate, bounds, &mut rng);
                prop_assert!(genes.iter().all(|&g| bounds.contains(g)));
            }
        }

        #[test]
        fn prop_crossover_extremes(
            p1 in proptest::collection::vec(32u8..=126, 1..32),
            seed in any::<u64>(),
        ) {
            let p2: Vec<Gene> = p1.iter().map(|&g| 158 - g).collect();
            let n = p1.len();
            let mut rng = RngSource::new(create_rng(seed));
            let (mut c1, mut c2) = (vec![0u8; n], vec![0u8; n]);

            crossover(&p1, &p2, &mut c1, &mut c2, 0.0, &mut rng);
            prop_assert_eq!(&c1, &p1);
            prop_assert_eq!(&c2, &p2);

            crossover(&p1, &p2, &mut c1, &mut c2, 1.0, &mut rng);
            let point = (0..=n)
                .find(|&pt| c1[..pt] == p1[..pt] && c1[pt..] == p2[pt..])
                .expect("child 1 is a splice of the parents");
            prop_assert_eq!(&c2[..point], &p2[..point]);
            prop_assert_eq!(&c2[point..], &p1[point..]);
        }
    }
}
