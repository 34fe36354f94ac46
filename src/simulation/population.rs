//! Population management.
//!
//! A population is the ordered collection of currently alive organisms at a
//! point in time; the order carries no meaning. Within one population no two
//! organisms share an id.

use crate::organism::Organism;

/// A population of P. aequor organisms.
#[derive(Debug, Clone, Default)]
pub struct Population {
    /// The organisms in this population
    organisms: Vec<Organism>,
    /// Generation counter
    generation: usize,
}

impl Population {
    /// Create a new population from organisms.
    pub fn new(organisms: Vec<Organism>) -> Self {
        Self {
            organisms,
            generation: 0,
        }
    }

    /// Get the current generation number.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Increment the generation counter.
    pub fn increment_generation(&mut self) {
        self.generation += 1;
    }

    /// Get the number of organisms in the population.
    pub fn size(&self) -> usize {
        self.organisms.len()
    }

    /// Check if population is empty.
    pub fn is_empty(&self) -> bool {
        self.organisms.is_empty()
    }

    /// Get all organisms as a slice.
    pub fn organisms(&self) -> &[Organism] {
        &self.organisms
    }

    /// Replace the entire population with new organisms.
    pub fn set_organisms(&mut self, organisms: Vec<Organism>) {
        self.organisms = organisms;
    }

    /// Take the organisms out, leaving the population empty.
    pub(crate) fn take_organisms(&mut self) -> Vec<Organism> {
        std::mem::take(&mut self.organisms)
    }

    /// Get a specific organism by index.
    pub fn get(&self, index: usize) -> Option<&Organism> {
        self.organisms.get(index)
    }
}
