//! `percolation-stats` binary.
//!
//! Runs `trials` independent percolation trials on an `n`-by-`n` lattice and
//! prints the mean, standard deviation and 95% confidence interval of the
//! open-site fraction at which the lattice first percolates.
//!
//! # Startup Sequence
//!
//! 1. Parse arguments (usage errors exit before anything else runs)
//! 2. Load configuration from `--config` or `percolation-config.yaml`
//! 3. Initialize structured logging (tracing, to stderr)
//! 4. Run the trials
//! 5. Write the report to stdout

mod cli;
mod error;
mod report;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use percolation_core::PercolationStats;
use percolation_core::config::SimulationConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::CliError;

/// Config file looked up in the working directory when `--config` is absent.
const DEFAULT_CONFIG_PATH: &str = "percolation-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, the simulation, or output fails.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    run(&cli, &config).context("percolation run failed")
}

/// Run the simulation described by `cli` and `config` and print the report.
fn run(cli: &Cli, config: &SimulationConfig) -> Result<(), CliError> {
    let side = cli.side()?;
    let trials = cli.trials()?;
    let seed = cli.seed.or(config.simulation.seed);
    let format = cli.format.map_or(config.output.format, Into::into);

    info!(side, trials, seed, format = ?format, "percolation-stats starting");

    let stats = match seed {
        Some(seed) => PercolationStats::with_seed(side, trials, seed)?,
        None => PercolationStats::new(side, trials)?,
    };

    let mut stdout = std::io::stdout().lock();
    report::write_report(&mut stdout, &stats.summary(), format)?;

    info!(side, trials, "percolation-stats finished");
    Ok(())
}

/// Load configuration from an explicit path, or from the default file if it
/// exists. Falls back to defaults (plus environment overrides) otherwise.
fn load_config(explicit: Option<&Path>) -> Result<SimulationConfig, CliError> {
    let path = explicit.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), Path::to_path_buf);
    if explicit.is_some() || path.exists() {
        return Ok(SimulationConfig::from_file(&path)?);
    }

    let mut config = SimulationConfig::default();
    config.apply_env_overrides()?;
    Ok(config)
}
