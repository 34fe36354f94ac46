//! Aequor CLI - drives the population engine and reports per-cycle results.

use aequor::analysis::{base_composition, format_percent, mean_pairwise_similarity, percent_with_trait};
use aequor::base::Strand;
use aequor::organism::Organism;
use aequor::simulation::{CycleReport, Engine, SimulationConfig};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Aequor - P. aequor evolution simulator
#[derive(Parser, Debug)]
#[command(name = "aequor")]
#[command(author, version, about = "P. aequor evolution simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a simulation
    Run {
        /// Starting population size
        #[arg(short = 'n', long, default_value = "2000")]
        population_size: usize,

        /// Number of cycles to run
        #[arg(short = 'c', long, default_value = "15")]
        cycles: usize,

        /// Chance a trait-carrying organism survives a cycle
        #[arg(long, default_value = "0.7")]
        survival_chance: f64,

        /// Chance an organism mutates during a cycle
        #[arg(long, default_value = "0.35")]
        mutation_chance: f64,

        /// Chance a newborn offspring mutates at birth
        #[arg(long, default_value = "0.25")]
        offspring_mutation_chance: f64,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Output format (pretty, json)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },

    /// Compare the DNA of two freshly generated specimens
    Compare {
        /// Random seed
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            population_size,
            cycles,
            survival_chance,
            mutation_chance,
            offspring_mutation_chance,
            seed,
            format,
        } => run_simulation(
            population_size,
            cycles,
            survival_chance,
            mutation_chance,
            offspring_mutation_chance,
            seed,
            &format,
        ),
        Commands::Compare { seed } => compare_specimens(seed),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_simulation(
    population_size: usize,
    cycles: usize,
    survival_chance: f64,
    mutation_chance: f64,
    offspring_mutation_chance: f64,
    seed: Option<u64>,
    format: &str,
) -> Result<()> {
    let config = SimulationConfig::new(
        population_size,
        cycles,
        survival_chance,
        mutation_chance,
        offspring_mutation_chance,
        seed,
    )
    .context("invalid simulation configuration")?;

    let mut engine = Engine::new(config).context("failed to create engine")?;
    let start_pct = percent_with_trait(engine.population());
    let pretty = format == "pretty";

    if pretty {
        println!("Start Simulation");
    }

    let mut reports: Vec<CycleReport> = Vec::new();
    for cycle in 1..=cycles {
        if engine.population().is_empty() {
            break;
        }
        let report = engine.run_cycle();
        log::debug!(
            "cycle {}: died {}, born {}, total {}",
            cycle,
            report.died,
            report.born,
            report.total()
        );
        if pretty {
            println!("Generation {cycle}:");
            println!("   Organisms Died...{}", report.died);
            println!("   Organisms Born...{}", report.born);
            println!("   Total Organisms..{}", report.total());
        }
        reports.push(report);
    }

    let end_pct = percent_with_trait(engine.population());

    match format {
        "pretty" => {
            println!("End Simulation");
            println!(
                "Throughout the simulation {} organisms were created!",
                engine.total_created()
            );
            println!("% with Likely to Survive at Start: {}", format_percent(start_pct));
            println!("% with Likely to Survive at Finish: {}", format_percent(end_pct));
        }
        "json" => {
            let composition = base_composition(engine.population());
            let mean_similarity = mean_pairwise_similarity(engine.population())
                .context("failed to compute pairwise similarity")?;
            let summary = serde_json::json!({
                "cycles_run": reports.len(),
                "final_population": engine.population().size(),
                "lifetime_created": engine.total_created(),
                "percent_with_trait_start": start_pct,
                "percent_with_trait_end": end_pct,
                "mean_pairwise_similarity": mean_similarity,
                "base_composition": composition
                    .iter()
                    .map(|(base, count)| (base.to_string(), *count))
                    .collect::<std::collections::BTreeMap<String, usize>>(),
                "cycles": reports,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        _ => anyhow::bail!("unknown format '{}'. Use: pretty or json", format),
    }

    Ok(())
}

fn compare_specimens(seed: Option<u64>) -> Result<()> {
    let mut rng = if let Some(seed) = seed {
        Xoshiro256PlusPlus::seed_from_u64(seed)
    } else {
        Xoshiro256PlusPlus::from_seed(rand::rng().random())
    };

    let first = Organism::new(1, Strand::random(&mut rng), 0.7, 0.35);
    let second = Organism::new(2, Strand::random(&mut rng), 0.7, 0.35);

    println!("Specimen 1: {}", first.strand());
    println!("Specimen 2: {}", second.strand());
    println!("{}", first.compare_to(&second)?);

    Ok(())
}
