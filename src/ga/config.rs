//! GA configuration.
//!
//! [`GaConfig`] holds every parameter of the evolutionary loop. Nothing is
//! read from files; callers build a config in-process.

use super::types::GeneBounds;
use crate::error::{GaError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the string-matching GA.
///
/// # Defaults
///
/// The defaults reproduce the classic driver settings: a population of 10,
/// crossover rate 0.9, mutation rate 0.1, tournament size 3, printable
/// ASCII genes, and a budget of 10 000 generations.
///
/// ```
/// use string_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use string_ga::ga::{GaConfig, GeneBounds};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_tournament_size(5)
///     .with_mutation_rate(0.05)
///     .with_bounds(GeneBounds::UPPERCASE)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaConfig {
    /// Number of genomes in the population.
    ///
    /// Reproduction emits children in pairs, so an odd value is coerced
    /// down by one when the population is created.
    pub population_size: usize,

    /// Generation budget for the command-line driver. Library callers pass
    /// their budget to [`run`](super::run) directly.
    pub max_generations: usize,

    /// Probability of recombining a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied the children are copies of the parents.
    pub crossover_rate: f64,

    /// Per-gene probability of a ±1 perturbation (0.0–1.0).
    pub mutation_rate: f64,

    /// Individuals drawn per tournament. Must be at least 2.
    pub tournament_size: usize,

    /// Inclusive range of gene values.
    pub bounds: GeneBounds,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from system entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            max_generations: 10_000,
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            tournament_size: 3,
            bounds: GeneBounds::PRINTABLE,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the gene value range.
    pub fn with_bounds(mut self, bounds: GeneBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Population size after coercion to an even number.
    pub fn effective_population_size(&self) -> usize {
        self.population_size - self.population_size % 2
    }

    /// Validates the configuration.
    ///
    /// Returns the first problem found. Rates set through the builder are
    /// already clamped; this catches values assigned directly, NaN included.
    pub fn validate(&self) -> Result<()> {
        if self.effective_population_size() < 2 {
            return Err(GaError::PopulationTooSmall(self.population_size));
        }
        if self.tournament_size < 2 {
            return Err(GaError::TournamentTooSmall(self.tournament_size));
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        self.bounds.validate()
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GaError::RateOutOfRange { name, value })
    }
}
