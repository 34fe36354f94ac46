//! Aequor: a library for simulating generational evolution of P. aequor organisms.
//!
//! Each organism carries a fixed-length DNA strand over the standard four-base
//! alphabet. Every cycle the population engine evaluates survival, mutation,
//! and reproduction for each organism and assembles the next generation.

pub mod analysis;
pub mod base;
pub mod organism;
pub mod simulation;

// Re-export commonly used types for convenient external access.
//
// These form the public surface most consumers need when driving a simulation
// or analysing a population, available as `aequor::Organism`, `aequor::Strand`,
// etc.
pub use base::{Nucleotide, Strand, StrandError, STRAND_LEN};
pub use organism::Organism;
pub use simulation::{CycleReport, Engine, Population, RunSummary, SimulationConfig};
