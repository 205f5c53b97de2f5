//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use percolation_core::config::OutputFormat;

use crate::error::CliError;

/// Estimate the site-percolation threshold of an n-by-n lattice.
#[derive(Debug, Parser)]
#[command(name = "percolation-stats")]
#[command(version, about)]
pub struct Cli {
    /// Grid side n
    #[arg(allow_negative_numbers = true)]
    pub side: i64,

    /// Number of independent trials
    #[arg(allow_negative_numbers = true)]
    pub trials: i64,

    /// Seed for the site generator (overrides config and `PERCOLATION_SEED`)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a YAML config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Output format as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Three human-readable lines.
    Text,
    /// A single JSON object.
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

impl Cli {
    /// The grid side as an unsigned count.
    ///
    /// Zero passes through so the simulation reports it; only negative
    /// values are rejected here.
    pub fn side(&self) -> Result<usize, CliError> {
        to_count("side", self.side)
    }

    /// The trial count as an unsigned count.
    pub fn trials(&self) -> Result<usize, CliError> {
        to_count("trials", self.trials)
    }
}

fn to_count(name: &'static str, value: i64) -> Result<usize, CliError> {
    usize::try_from(value).map_err(|_negative| CliError::InvalidArgument { name, value })
}
