use crate::config::EvolutionConfig;
use crate::error::{EvolutionError, Result};
use crate::genome::Genome;
use crate::operators::{crossover, fitness, mutate, pick_parent, random_genome, select_parents};
use crate::progress::{ConsoleProgressCallback, ProgressCallback, SilentProgressCallback};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// Final report of a search: how long it ran, how much it evaluated, and
/// the best candidate found.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Number of generations processed (1-based)
    pub generations: u64,
    /// Cumulative count of individuals scored across all generations
    pub total_evaluated: u64,
    /// Best candidate of the last scored generation
    pub best: String,
    pub best_score: usize,
    /// True when `best` matches the target exactly
    pub converged: bool,
}

pub struct EvolutionEngine {
    config: EvolutionConfig,
    target: Vec<char>,
    genes: Vec<char>,
    pool: rayon::ThreadPool,
    rng: StdRng,
}

impl EvolutionEngine {
    /// Validate the configuration and the target/alphabet pair, then build
    /// the engine. The worker pool is created here, once, and reused by
    /// every generation. No randomness is consumed before validation passes.
    pub fn new(config: EvolutionConfig, target: &str, genes: &[char]) -> Result<Self> {
        config.validate()?;

        let target: Vec<char> = target.chars().collect();
        if target.is_empty() {
            return Err(EvolutionError::Validation(
                "target must not be empty".to_string(),
            ));
        }

        let mut missing: Vec<char> = target
            .iter()
            .filter(|c| !genes.contains(c))
            .copied()
            .collect();
        missing.sort_unstable();
        missing.dedup();

        if !missing.is_empty() {
            let listed: Vec<String> = missing.iter().map(|c| format!("'{}'", c)).collect();
            return Err(EvolutionError::Validation(format!(
                "[{}] is not in genes list, evolution cannot converge",
                listed.join(", ")
            )));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.worker_count)
            .build()
            .map_err(|e| {
                EvolutionError::Configuration(format!("Failed to build worker pool: {}", e))
            })?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            config,
            target,
            genes: genes.to_vec(),
            pool,
            rng,
        })
    }

    /// Run the evolution loop until a candidate matches the target, or until
    /// `max_generations` is exhausted when a cap is configured.
    pub fn run<C: ProgressCallback>(&mut self, mut callback: C) -> SearchOutcome {
        let mut population = self.initialize_population();
        let mut generation: u64 = 0;
        let mut total_evaluated: u64 = 0;

        loop {
            generation += 1;

            let evaluated = self.evaluate_population(&population);
            total_evaluated += evaluated.len() as u64;

            // First index on ties, so repeated runs report the same winner
            let mut best_idx = 0;
            for (idx, entry) in evaluated.iter().enumerate() {
                if entry.1 > evaluated[best_idx].1 {
                    best_idx = idx;
                }
            }
            let (best_genome, best_score) = (&evaluated[best_idx].0, evaluated[best_idx].1);
            let best: String = best_genome.iter().collect();

            debug!(
                "generation {}: best score {}/{}",
                generation,
                best_score,
                self.target.len()
            );
            callback.on_generation_complete(generation, best_score, &best);

            if best_score == self.target.len() {
                return SearchOutcome {
                    generations: generation,
                    total_evaluated,
                    best,
                    best_score,
                    converged: true,
                };
            }

            if let Some(cap) = self.config.max_generations {
                if generation >= cap {
                    return SearchOutcome {
                        generations: generation,
                        total_evaluated,
                        best,
                        best_score,
                        converged: false,
                    };
                }
            }

            let parents = select_parents(&evaluated, self.config.selected_size);
            population = self.reproduce(&parents);
        }
    }

    fn initialize_population(&mut self) -> Vec<Genome> {
        (0..self.config.population_size)
            .map(|_| random_genome(self.target.len(), &self.genes, &mut self.rng))
            .collect()
    }

    /// Score a whole generation on the worker pool. Fitness is a pure
    /// function of one genome plus the read-only target, so the fan-out
    /// needs no locking; each result stays paired with its source genome
    /// rather than being matched up by completion order.
    fn evaluate_population(&self, population: &[Genome]) -> Vec<(Genome, usize)> {
        let target = &self.target;
        self.pool.install(|| {
            population
                .par_iter()
                .map(|genome| (genome.clone(), fitness(genome, target)))
                .collect()
        })
    }

    fn reproduce(&mut self, parents: &[Genome]) -> Vec<Genome> {
        let mut next_generation = Vec::with_capacity(self.config.population_size);

        while next_generation.len() < self.config.population_size {
            let parent1 = pick_parent(parents, &mut self.rng);
            let parent2 = pick_parent(parents, &mut self.rng);

            let mut child = crossover(parent1, parent2, &mut self.rng);
            mutate(
                &mut child,
                self.config.mutation_probability,
                &self.genes,
                &mut self.rng,
            );

            next_generation.push(child);
        }

        next_generation
    }
}

/// Evolve random candidates toward `target` with the default configuration.
/// `debug` only controls progress reporting on stdout; it has no effect on
/// the evolutionary path.
pub fn run(target: &str, genes: &[char], debug: bool) -> Result<SearchOutcome> {
    let mut engine = EvolutionEngine::new(EvolutionConfig::default(), target, genes)?;

    let outcome = if debug {
        engine.run(ConsoleProgressCallback)
    } else {
        engine.run(SilentProgressCallback)
    };

    Ok(outcome)
}
