//! Population-level analysis.
//!
//! Pure functions over a population: survival-trait metrics, base
//! composition, and position-wise similarity. Nothing here mutates
//! simulation state.

pub mod composition;
pub mod metrics;

pub use composition::{base_composition, mean_pairwise_similarity};
pub use metrics::{format_percent, percent_with_trait};
