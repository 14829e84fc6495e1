//! GA run loop and progress reporting.
//!
//! [`GaRunner`] drives a [`Population`] one epoch at a time until an exact
//! match appears or the generation budget runs out.

use super::population::Population;
use super::random::RandomSource;
use super::types::Genome;
use std::io::{self, Write};

/// Receives the best genome after every generation.
pub trait Progress {
    /// Called once per generation with its 1-based index.
    fn report(&mut self, generation: usize, best: &Genome);

    /// Called once when the run ends. The default does nothing.
    fn finish(&mut self, _result: &GaResult) {}
}

/// Overwrites a single stdout line with the current best genome.
///
/// Meant for humans at a terminal; the format is not stable.
#[derive(Debug, Default)]
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn report(&mut self, generation: usize, best: &Genome) {
        let mut out = io::stdout().lock();
        // A closed stdout should not abort the search.
        let _ = write!(
            out,
            "\rbest:   [ {} ] error: {} generation: {}",
            best,
            best.error(),
            generation
        );
        let _ = out.flush();
    }

    fn finish(&mut self, result: &GaResult) {
        if result.generations > 0 {
            println!();
        }
    }
}

/// Discards all progress.
#[derive(Debug, Default)]
pub struct SilentProgress;

impl Progress for SilentProgress {
    fn report(&mut self, _generation: usize, _best: &Genome) {}
}

/// Outcome of a run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best genome seen; `None` only if no generation ran.
    pub best: Option<Genome>,

    /// Whether `best` matches the target exactly.
    pub found: bool,

    /// Generations executed by this run.
    pub generations: usize,

    /// Best error at the end of each generation.
    pub error_history: Vec<u64>,
}

impl GaResult {
    /// The exact match, if one was found.
    pub fn solution(self) -> Option<Genome> {
        if self.found {
            self.best
        } else {
            None
        }
    }
}

/// Executes the GA loop.
///
/// # Usage
///
/// ```
/// use string_ga::ga::{GaConfig, GaRunner, GeneBounds, Population, SilentProgress};
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_bounds(GeneBounds::UPPERCASE)
///     .with_seed(42);
/// let mut population = Population::create(b"GA", 2, &config).unwrap();
/// let result = GaRunner::run(&mut population, 5_000, &mut SilentProgress);
/// assert!(result.generations <= 5_000);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs up to `max_generations` epochs, reporting after each one.
    ///
    /// Stops right after the epoch that finds an exact match.
    pub fn run<S, P>(
        population: &mut Population<'_, S>,
        max_generations: usize,
        progress: &mut P,
    ) -> GaResult
    where
        S: RandomSource,
        P: Progress + ?Sized,
    {
        let mut error_history = Vec::new();
        let mut generations = 0;

        for gen in 0..max_generations {
            let found = population.epoch();
            generations = gen + 1;

            if let Some(best) = population.best() {
                error_history.push(best.error());
                progress.report(generations, best);
                log::debug!("generation {generations}: best error {}", best.error());
            }

            if found {
                break;
            }
        }

        let result = GaResult {
            best: population.best().cloned(),
            found: population.is_found(),
            generations,
            error_history,
        };

        if result.found {
            log::info!("target matched after {generations} generations");
        } else {
            log::info!(
                "no exact match after {generations} generations, best error {:?}",
                result.best.as_ref().map(Genome::error)
            );
        }
        progress.finish(&result);
        result
    }
}

/// Runs the GA with console progress.
///
/// Returns the exact match if found within `max_generations`, else `None`.
pub fn run<S: RandomSource>(
    population: &mut Population<'_, S>,
    max_generations: usize,
) -> Option<Genome> {
    run_with(population, max_generations, &mut ConsoleProgress)
}

/// Like [`run`], reporting to `progress` instead of stdout.
pub fn run_with<S, P>(
    population: &mut Population<'_, S>,
    max_generations: usize,
    progress: &mut P,
) -> Option<Genome>
where
    S: RandomSource,
    P: Progress + ?Sized,
{
    GaRunner::run(population, max_generations, progress).solution()
}
