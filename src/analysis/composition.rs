//! Population composition and similarity analysis.

use crate::base::{Nucleotide, StrandError};
use crate::simulation::Population;
use std::collections::HashMap;

/// Count every base across all strands in the population.
pub fn base_composition(population: &Population) -> HashMap<Nucleotide, usize> {
    let mut counts = HashMap::new();
    for organism in population.organisms() {
        for &base in organism.strand().bases() {
            *counts.entry(base).or_insert(0) += 1;
        }
    }
    counts
}

/// Mean position-wise similarity across all organism pairs.
///
/// Populations with fewer than two organisms have no pairs and are defined
/// as 1.0 (a lone strand is trivially identical to itself).
pub fn mean_pairwise_similarity(population: &Population) -> Result<f64, StrandError> {
    let organisms = population.organisms();
    let n = organisms.len();
    if n < 2 {
        return Ok(1.0);
    }

    let mut total = 0.0;
    let mut pairs = 0usize;
    for i in 0..n {
        for j in (i + 1)..n {
            total += organisms[i].strand().similarity(organisms[j].strand())?;
            pairs += 1;
        }
    }

    Ok(total / pairs as f64)
}
