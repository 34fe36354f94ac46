//! Simulation engine and population management.
//!
//! This module provides the core cycle loop and population management for
//! generational evolution of P. aequor organisms.

pub mod engine;
pub mod parameters;
pub mod population;

pub use engine::{CycleReport, Engine, RunSummary};
pub use parameters::{ConfigError, SimulationConfig};
pub use population::Population;
