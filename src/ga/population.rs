//! Population lifecycle: creation, the per-generation epoch, and teardown.

use super::config::GaConfig;
use super::fitness::{self, Evaluation};
use super::operators::{crossover, mutate};
use super::random::{source_from_seed, RandomSource, RngSource};
use super::selection::tournament;
use super::types::{Gene, GeneBounds, Genome, Target};
use crate::error::{GaError, Result};
use rand::rngs::StdRng;

/// Parent buffers reused by every reproduction event.
#[derive(Debug, Clone)]
struct Scratch {
    parent1: Vec<Gene>,
    parent2: Vec<Gene>,
}

/// A population of genomes evolving toward a target.
///
/// The population owns its random source, its genomes, a staging pool the
/// next generation is written into, and a snapshot of the best genome seen
/// so far. All buffers are allocated once in [`Population::create`] and
/// reused each [`epoch`](Population::epoch).
///
/// # Invariants
///
/// - The pool size is even and never changes.
/// - Every genome has exactly `target.len()` genes.
/// - The best genome's error never increases.
#[derive(Debug)]
pub struct Population<'a, S: RandomSource = RngSource<StdRng>> {
    target: Target<'a>,
    pool: Vec<Genome>,
    staging: Vec<Genome>,
    scratch: Scratch,
    best: Option<Genome>,
    found: bool,
    generation: usize,
    crossover_rate: f64,
    mutation_rate: f64,
    tournament_size: usize,
    bounds: GeneBounds,
    rng: S,
}

impl<'a> Population<'a> {
    /// Creates a random population for `target`.
    ///
    /// `gene_count` must equal the target length. The population size from
    /// `config` is coerced down to the nearest even number. The generator is
    /// seeded from `config.seed`, or from system entropy when unset.
    ///
    /// ```
    /// use string_ga::ga::{GaConfig, Population};
    ///
    /// let config = GaConfig::default().with_population_size(7).with_seed(1);
    /// let population = Population::create(b"SHRAMAN", 7, &config).unwrap();
    /// assert_eq!(population.size(), 6);
    /// ```
    pub fn create(target: &'a [Gene], gene_count: usize, config: &GaConfig) -> Result<Self> {
        Self::with_source(target, gene_count, config, source_from_seed(config.seed))
    }
}

impl<'a, S: RandomSource> Population<'a, S> {
    /// Creates a random population drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn with_source(
        target: &'a [Gene],
        gene_count: usize,
        config: &GaConfig,
        mut rng: S,
    ) -> Result<Self> {
        config.validate()?;
        let target = Target::new(target, config.bounds)?;
        if gene_count != target.len() {
            return Err(GaError::GeneCountMismatch {
                gene_count,
                target_len: target.len(),
            });
        }

        let size = config.effective_population_size();
        if size != config.population_size {
            log::debug!(
                "population size {} is odd, using {size}",
                config.population_size
            );
        }

        let bounds = config.bounds;
        let pool: Vec<Genome> = (0..size)
            .map(|_| Genome::new((0..gene_count).map(|_| rng.gene(bounds)).collect()))
            .collect();
        let staging = vec![Genome::new(vec![bounds.lower; gene_count]); size];

        log::info!(
            "created population: size={size}, genes={gene_count}, crossover={}, mutation={}, tournament={}",
            config.crossover_rate,
            config.mutation_rate,
            config.tournament_size
        );

        Ok(Self {
            target,
            pool,
            staging,
            scratch: Scratch {
                parent1: vec![0; gene_count],
                parent2: vec![0; gene_count],
            },
            best: None,
            found: false,
            generation: 0,
            crossover_rate: config.crossover_rate,
            mutation_rate: config.mutation_rate,
            tournament_size: config.tournament_size,
            bounds,
            rng,
        })
    }

    /// Runs one generation: evaluate, rank, reproduce, replace.
    ///
    /// If evaluation finds an exact match the generation ends there, the
    /// match is recorded as best, and `true` is returned. Otherwise the whole
    /// pool is replaced by children and `false` is returned.
    pub fn epoch(&mut self) -> bool {
        self.generation += 1;

        let eval = fitness::evaluate(&mut self.pool, self.target);
        self.record_best(eval);
        if eval.exact {
            self.found = true;
            log::info!("exact match at generation {}", self.generation);
            return true;
        }

        fitness::rank(&mut self.pool);
        self.reproduce();
        std::mem::swap(&mut self.pool, &mut self.staging);
        false
    }

    /// Fills the staging pool with `size / 2` pairs of children.
    fn reproduce(&mut self) {
        let k = self.tournament_size;
        let (crossover_rate, mutation_rate) = (self.crossover_rate, self.mutation_rate);
        let bounds = self.bounds;
        let Self {
            pool,
            staging,
            scratch,
            rng,
            ..
        } = self;

        for pair in staging.chunks_exact_mut(2) {
            let (i, j) = tournament(pool, k, rng);
            scratch.parent1.copy_from_slice(pool[i].genes());
            scratch.parent2.copy_from_slice(pool[j].genes());

            let (first, second) = pair.split_at_mut(1);
            let (child1, child2) = (&mut first[0], &mut second[0]);
            crossover(
                &scratch.parent1,
                &scratch.parent2,
                child1.genes_mut(),
                child2.genes_mut(),
                crossover_rate,
                rng,
            );
            for child in [child1, child2] {
                mutate(child.genes_mut(), mutation_rate, bounds, rng);
                child.set_error(Genome::UNEVALUATED);
            }
        }
    }

    /// Snapshots the pass minimum into `best` when it strictly improves.
    fn record_best(&mut self, eval: Evaluation) {
        let candidate = &self.pool[eval.best_index];
        if let Some(best) = self.best.as_mut() {
            if candidate.error() < best.error() {
                log::trace!(
                    "best improved {} -> {} at generation {}",
                    best.error(),
                    candidate.error(),
                    self.generation
                );
                best.copy_from(candidate);
            }
        } else {
            self.best = Some(candidate.clone());
        }
    }

    /// Lowest-error genome seen so far; `None` before the first epoch.
    pub fn best(&self) -> Option<&Genome> {
        self.best.as_ref()
    }

    /// `true` once an exact match has been found.
    pub fn is_found(&self) -> bool {
        self.found
    }

    /// Number of epochs executed.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Number of genomes; always even.
    pub fn size(&self) -> usize {
        self.pool.len()
    }

    /// Genes per genome.
    pub fn gene_count(&self) -> usize {
        self.target.len()
    }

    /// Current genomes.
    ///
    /// Right after an unfinished epoch these are unevaluated children.
    pub fn genomes(&self) -> &[Genome] {
        &self.pool
    }

    /// The target being matched.
    pub fn target(&self) -> Target<'a> {
        self.target
    }

    /// Gene value range.
    pub fn bounds(&self) -> GeneBounds {
        self.bounds
    }

    /// Consumes the population, releasing every buffer it owns.
    pub fn destroy(self) {
        log::debug!(
            "destroying population after {} generations",
            self.generation
        );
    }
}
