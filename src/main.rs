//! tsp-tournament CLI.
//!
//! Loads a YAML configuration and its distance matrix, runs one
//! population → evaluation → tournament-selection pass, and prints the
//! initial scores, each selected score, and both score sums.

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tsp_tournament::config::RunConfig;
use tsp_tournament::ga::{GaResult, GaRunner};
use tsp_tournament::tsp::{DistanceMatrix, Tour, TspProblem};
use tsp_tournament::{EvoError, EvoResult};

#[derive(Parser, Debug)]
#[command(name = "tsp-tournament", version, about)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Seed override; takes precedence over the configuration file.
    #[arg(long)]
    seed: Option<u64>,

    /// Evaluate fitness in parallel.
    #[arg(long)]
    parallel: bool,
}

fn run(cli: &Cli) -> EvoResult<()> {
    let config = RunConfig::load(&cli.config)?;
    let matrix = DistanceMatrix::load(&config.filename)?;
    let problem = TspProblem::new(matrix);

    let mut ga = config.ga_config();
    if let Some(seed) = cli.seed {
        ga = ga.with_seed(seed);
    }
    if cli.parallel {
        ga = ga.with_parallel(true);
    }

    let result = GaRunner::run(&problem, &ga)?;

    report(&result, &mut std::io::stdout().lock())
        .map_err(|e| EvoError::io("<stdout>", e))?;

    if let Some((tour, cost)) = result.best() {
        log::info!("best selected tour ({cost}): {:?}", tour.cities());
    }
    if let Some(seed) = result.seed {
        log::info!("seed {seed}");
    }
    Ok(())
}

/// Writes the initial scores as `[s0 s1 ...]`, then one selected score per
/// line, then `initial_sum selected_sum`.
fn report<W: Write>(result: &GaResult<Tour, u64>, out: &mut W) -> io::Result<()> {
    let initial: Vec<String> = result.scores.iter().map(u64::to_string).collect();
    writeln!(out, "[{}]", initial.join(" "))?;
    for score in &result.selected_scores {
        writeln!(out, "{score}")?;
    }
    writeln!(out, "{} {}", result.initial_sum(), result.selected_sum())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
