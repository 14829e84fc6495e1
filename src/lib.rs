//! String-matching genetic algorithm.
//!
//! Evolves a population of fixed-length character sequences toward a
//! target string. Each generation the engine:
//!
//! - **Evaluates** every genome by the sum of squared character-code
//!   differences from the target (0 = exact match).
//! - **Ranks** the population by that error.
//! - **Reproduces** pairs of children through tournament selection,
//!   single-point crossover, and reflecting-boundary mutation.
//! - **Replaces** the whole population with the children.
//!
//! The run stops as soon as an exact match appears or the generation
//! budget is exhausted.
//!
//! # Example
//!
//! ```
//! use string_ga::ga::{self, GaConfig, GeneBounds, Population, SilentProgress};
//!
//! let config = GaConfig::default()
//!     .with_population_size(60)
//!     .with_bounds(GeneBounds::UPPERCASE)
//!     .with_seed(7);
//! let mut population = Population::create(b"HELLO", 5, &config).unwrap();
//!
//! let found = ga::run_with(&mut population, 20_000, &mut SilentProgress);
//! if let Some(best) = found {
//!     assert_eq!(best.error(), 0);
//!     assert_eq!(best.to_string(), "HELLO");
//! }
//! ```

pub mod error;
pub mod ga;

pub use error::{GaError, Result};
