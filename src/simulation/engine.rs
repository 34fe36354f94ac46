//! Cycle engine for generational evolution.
//!
//! This module provides the main loop that advances a whole population by one
//! generation: aliveness check, mutation, reproduction, and filtering of the
//! dead.

use crate::analysis::percent_with_trait;
use crate::base::Strand;
use crate::organism::Organism;
use crate::simulation::{ConfigError, Population, SimulationConfig};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;

/// Observational counts for one completed cycle. They never feed back into
/// the simulation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    /// Organisms from the input generation that did not survive.
    pub died: usize,
    /// Offspring created this cycle.
    pub born: usize,
    /// Organisms from the input generation that survived.
    pub survivors: usize,
}

impl CycleReport {
    /// Size of the resulting generation.
    pub fn total(&self) -> usize {
        self.born + self.survivors
    }
}

/// Summary of a full run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Cycles actually executed (the loop exits early on extinction).
    pub cycles_run: usize,
    /// Population size after the last cycle.
    pub final_size: usize,
    /// Every organism ever created, initial seeding and offspring included.
    pub lifetime_created: u64,
    /// Percent of organisms carrying the survival trait at the start.
    pub start_trait_pct: f64,
    /// Percent of organisms carrying the survival trait at the end.
    pub end_trait_pct: f64,
}

/// Main simulation engine.
///
/// Owns the population, the RNG, and the lifetime creation counter that
/// assigns process-unique organism ids.
#[derive(Debug)]
pub struct Engine {
    /// Current population
    population: Population,
    /// Simulation configuration
    config: SimulationConfig,
    /// Random number generator (Xoshiro256++, seedable for reproducibility)
    rng: Xoshiro256PlusPlus,
    /// Count of every organism ever created; never decremented.
    created: u64,
}

impl Engine {
    /// Create a new engine and seed the initial population.
    ///
    /// Every configured probability is validated here; the initial organisms
    /// each get a freshly random strand and a unique id from the lifetime
    /// counter.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = if let Some(seed) = config.seed {
            Xoshiro256PlusPlus::seed_from_u64(seed)
        } else {
            Xoshiro256PlusPlus::from_seed(rand::rng().random())
        };

        let mut engine = Self {
            population: Population::default(),
            config,
            rng,
            created: 0,
        };

        let initial: Vec<Organism> = (0..engine.config.starting_population)
            .map(|_| {
                let strand = Strand::random(&mut engine.rng);
                engine.spawn(strand)
            })
            .collect();
        engine.population.set_organisms(initial);

        Ok(engine)
    }

    /// Get the current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Get the configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Get the current generation number.
    pub fn generation(&self) -> usize {
        self.population.generation()
    }

    /// Lifetime count of every organism ever created.
    pub fn total_created(&self) -> u64 {
        self.created
    }

    /// Create an organism with the next unique id.
    fn spawn(&mut self, strand: Strand) -> Organism {
        self.created += 1;
        Organism::new(
            self.created,
            strand,
            self.config.survival_chance,
            self.config.cycle_mutation_chance,
        )
    }

    /// Advance the population by one generation.
    ///
    /// For every organism, independently: run the aliveness check; if alive,
    /// attempt a mutation at the organism's own mutation chance; if alive and
    /// eligible, create one offspring inheriting a clone of the (possibly
    /// just-mutated) parent strand, then attempt one mutation on it at the
    /// offspring mutation chance. The next generation is the newborns
    /// followed by the surviving inputs; the dead are dropped permanently.
    pub fn run_cycle(&mut self) -> CycleReport {
        let input_size = self.population.size();
        let mut current = self.population.take_organisms();
        let mut newborn: Vec<Organism> = Vec::new();

        for organism in current.iter_mut() {
            if !organism.check_aliveness(&mut self.rng) {
                continue;
            }

            let chance = organism.mutation_chance();
            organism.mutate(&mut self.rng, chance);

            if organism.can_replicate() {
                let inherited = organism.strand().clone();
                let mut child = self.spawn(inherited);
                child.mutate(&mut self.rng, self.config.offspring_mutation_chance);
                newborn.push(child);
            }
        }

        let born = newborn.len();
        let mut next = newborn;
        next.extend(current.into_iter().filter(Organism::is_alive));
        let survivors = next.len() - born;

        self.population.set_organisms(next);
        self.population.increment_generation();

        CycleReport {
            died: input_size - survivors,
            born,
            survivors,
        }
    }

    /// Run the configured number of cycles.
    ///
    /// The loop exits early, without error, when the population reaches zero.
    pub fn run(&mut self) -> RunSummary {
        let start_trait_pct = percent_with_trait(&self.population);
        let mut cycles_run = 0;

        for _ in 0..self.config.cycles {
            if self.population.is_empty() {
                break;
            }
            let report = self.run_cycle();
            cycles_run += 1;
            log::debug!(
                "cycle {}: died {}, born {}, total {}",
                cycles_run,
                report.died,
                report.born,
                report.total()
            );
        }

        RunSummary {
            cycles_run,
            final_size: self.population.size(),
            lifetime_created: self.created,
            start_trait_pct,
            end_trait_pct: percent_with_trait(&self.population),
        }
    }
}
