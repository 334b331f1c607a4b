//! Simulation tunables.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::mutation::LengthRepair;

/// Tunables for one simulation run.
///
/// Every field has a default, so partial configs deserialize cleanly.
///
/// # Examples
///
/// ```
/// use u_carpool::ga::SimulationConfig;
///
/// let config = SimulationConfig::default()
///     .with_generations(50)
///     .with_seed(42);
/// assert_eq!(config.population_size, 80);
/// assert_eq!(config.elite_count, 15);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Chromosomes per generation.
    pub population_size: usize,
    /// Top-ranked chromosomes kept unchanged each generation.
    pub elite_count: usize,
    /// Probability that a child is mutated.
    pub mutation_probability: f64,
    /// Number of generations to run.
    pub generations: usize,
    /// What happens to segment lengths after a mutation.
    pub length_repair: LengthRepair,
    /// RNG seed; `None` draws from the thread-local generator.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            population_size: 80,
            elite_count: 15,
            mutation_probability: 0.7,
            generations: 200,
            length_repair: LengthRepair::default(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_count(mut self, count: usize) -> Self {
        self.elite_count = count;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the post-mutation length policy.
    pub fn with_length_repair(mut self, repair: LengthRepair) -> Self {
        self.length_repair = repair;
        self
    }

    /// Fixes the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of children one generation needs.
    pub fn children_per_generation(&self) -> usize {
        self.population_size.saturating_sub(self.elite_count)
    }

    /// Checks that the tunables describe a runnable simulation.
    ///
    /// The elites must be able to refill the population: `elite_count`
    /// elites yield one child per unordered pair.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.elite_count == 0 || self.population_size < self.elite_count {
            return Err(ConfigError::InvalidPopulation {
                population: self.population_size,
                elite: self.elite_count,
            });
        }
        let pairs = self.elite_count * (self.elite_count - 1) / 2;
        let needed = self.children_per_generation();
        if pairs < needed {
            return Err(ConfigError::NotEnoughElitePairs {
                elite: self.elite_count,
                pairs,
                needed,
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(ConfigError::InvalidMutationProbability(
                self.mutation_probability,
            ));
        }
        if self.generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        Ok(())
    }
}
