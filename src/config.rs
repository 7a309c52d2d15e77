use crate::error::{EvolutionError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Maximum size of the population. Bigger can converge faster but is
    /// more memory demanding.
    pub population_size: usize,
    /// Number of individuals selected in every generation, taken from the
    /// best to the worst. Must be smaller than `population_size`.
    pub selected_size: usize,
    /// Probability that a child mutates, changing one of its genes. This
    /// guarantees that all genes stay reachable during evolution.
    pub mutation_probability: f64,
    /// Number of worker threads used to score a generation.
    pub worker_count: usize,
    /// Optional cap on the number of generations; `None` runs until a
    /// perfect match is found.
    pub max_generations: Option<u64>,
    /// Optional RNG seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            selected_size: 50,
            mutation_probability: 0.4,
            worker_count: default_worker_count(),
            max_generations: None,
            seed: None,
        }
    }
}

fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

impl EvolutionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.selected_size == 0 {
            return Err(EvolutionError::Configuration(
                "selected_size must be at least 1".to_string(),
            ));
        }
        if self.selected_size >= self.population_size {
            return Err(EvolutionError::Configuration(format!(
                "selected_size ({}) must be smaller than population_size ({})",
                self.selected_size, self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(EvolutionError::Configuration(format!(
                "mutation_probability ({}) must be between 0 and 1",
                self.mutation_probability
            )));
        }
        if self.worker_count == 0 {
            return Err(EvolutionError::Configuration(
                "worker_count must be a positive integer".to_string(),
            ));
        }
        if self.max_generations == Some(0) {
            return Err(EvolutionError::Configuration(
                "max_generations must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| EvolutionError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: Self = toml::from_str(&contents)
            .map_err(|e| EvolutionError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }
}
