//! Simulation parameters and configuration.
//!
//! All tunable constants of a run are fixed at configuration time and
//! validated up front; probabilities outside [0, 1] are rejected here, never
//! at use time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from configuration validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be a probability in [0.0, 1.0], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },
}

/// High-level simulation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of organisms seeded at the start of the run.
    pub starting_population: usize,
    /// Number of cycles to run.
    pub cycles: usize,
    /// Chance a trait-carrying organism survives a cycle. Organisms without
    /// the trait survive at half this rate.
    pub survival_chance: f64,
    /// Chance an organism mutates during a cycle it survives.
    pub cycle_mutation_chance: f64,
    /// Chance a newborn offspring mutates at birth.
    pub offspring_mutation_chance: f64,
    /// Optional RNG seed for reproducibility.
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Create a new, validated simulation configuration.
    pub fn new(
        starting_population: usize,
        cycles: usize,
        survival_chance: f64,
        cycle_mutation_chance: f64,
        offspring_mutation_chance: f64,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            starting_population,
            cycles,
            survival_chance,
            cycle_mutation_chance,
            offspring_mutation_chance,
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate every probability field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_probability("survival_chance", self.survival_chance)?;
        validate_probability("cycle_mutation_chance", self.cycle_mutation_chance)?;
        validate_probability("offspring_mutation_chance", self.offspring_mutation_chance)?;
        Ok(())
    }
}

fn validate_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::InvalidProbability { name, value });
    }
    Ok(())
}
