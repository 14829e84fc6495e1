//! String GA CLI - evolve a population toward a target string.

use string_ga::ga::{self, GaConfig, Population};

const DEFAULT_TARGET: &str = "SHRAMAN";

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.get(1).is_some_and(|a| a == "--help" || a == "-h") {
        eprintln!("Usage: {} [target] [generations] [seed]", args[0]);
        eprintln!();
        eprintln!("Evolve printable-ASCII strings toward a target.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  target       String to match (default: {DEFAULT_TARGET})");
        eprintln!("  generations  Generation budget (default: 10000)");
        eprintln!("  seed         Random seed (default: from system entropy)");
        return;
    }

    let target = args.get(1).map_or(DEFAULT_TARGET, String::as_str);
    let mut config = GaConfig::default();
    if let Some(arg) = args.get(2) {
        config.max_generations = arg.parse().unwrap_or_else(|e| {
            eprintln!("Invalid generation count {arg:?}: {e}");
            std::process::exit(1);
        });
    }
    if let Some(arg) = args.get(3) {
        config.seed = Some(arg.parse().unwrap_or_else(|e| {
            eprintln!("Invalid seed {arg:?}: {e}");
            std::process::exit(1);
        }));
    }

    println!("[ genetic algorithm ]");

    let genes = target.as_bytes();
    let mut population = Population::create(genes, genes.len(), &config).unwrap_or_else(|e| {
        eprintln!("Error creating population: {e}");
        std::process::exit(1);
    });

    if ga::run(&mut population, config.max_generations).is_none() {
        println!("genome not found!");
    }

    population.destroy();
}
