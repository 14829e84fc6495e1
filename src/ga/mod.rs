//! String-matching genetic algorithm engine.
//!
//! A [`Population`] of fixed-length [`Genome`]s evolves toward a [`Target`]
//! one epoch at a time: evaluate, rank, reproduce, replace.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, tournament size, bounds)
//! - [`Population`]: Owns the genomes, scratch buffers, random source, and best snapshot
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final result with generation count and error history
//!
//! # Submodules
//!
//! - [`fitness`]: Sum-of-squares error and ranking
//! - [`operators`]: Single-point crossover and reflecting mutation
//! - [`random`]: The [`RandomSource`] seam and seeded generators
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod fitness;
pub mod operators;
mod population;
pub mod random;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use population::Population;
pub use random::{create_rng, RandomSource, RngSource};
pub use runner::{run, run_with, ConsoleProgress, GaResult, GaRunner, Progress, SilentProgress};
pub use selection::tournament;
pub use types::{Gene, GeneBounds, Genome, Target};
