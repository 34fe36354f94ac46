//! Survival-trait metrics.

use crate::simulation::Population;

/// Percentage of organisms in the population carrying the survival trait.
///
/// An empty population has no carriers and is defined as 0.0 rather than a
/// division by zero.
pub fn percent_with_trait(population: &Population) -> f64 {
    if population.is_empty() {
        return 0.0;
    }

    let carriers = population
        .organisms()
        .iter()
        .filter(|o| o.has_survival_trait())
        .count();

    carriers as f64 / population.size() as f64 * 100.0
}

/// Format a percentage to two decimal places with a trailing `%`.
pub fn format_percent(pct: f64) -> String {
    format!("{pct:.2}%")
}
