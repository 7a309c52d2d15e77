use evostr::{ConsoleProgressCallback, EvolutionConfig, EvolutionEngine};
use std::env;

const DEFAULT_TARGET: &str =
    "This is a genetic algorithm to evaluate, combine, evolve, and mutate a string!";

fn default_genes() -> Vec<char> {
    " abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.,;!?+-*#@^'()&%$"
        .chars()
        .collect()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Usage: evostr [target] [genes] [seed]
    let args: Vec<String> = env::args().collect();

    let target = args.get(1).map(|s| s.as_str()).unwrap_or(DEFAULT_TARGET);
    let genes: Vec<char> = args
        .get(2)
        .map(|s| s.chars().collect())
        .unwrap_or_else(default_genes);
    let seed = args.get(3).and_then(|s| s.parse().ok());

    let config = EvolutionConfig {
        seed,
        ..EvolutionConfig::default()
    };

    println!("Configuration:");
    println!("  Target: {}", target);
    println!("  Genes: {}", genes.iter().collect::<String>());
    println!("  Population size: {}", config.population_size);
    println!("  Selected size: {}", config.selected_size);
    println!("  Mutation probability: {}", config.mutation_probability);
    println!("  Workers: {}", config.worker_count);
    println!();

    let mut engine = EvolutionEngine::new(config, target, &genes)?;
    let outcome = engine.run(ConsoleProgressCallback);

    println!();
    if outcome.converged {
        println!(
            "Found: {} in generation {} ({} individuals evaluated)",
            outcome.best, outcome.generations, outcome.total_evaluated
        );
    } else {
        println!(
            "Did not converge after {} generations; best so far: {} (score {})",
            outcome.generations, outcome.best, outcome.best_score
        );
    }

    Ok(())
}
