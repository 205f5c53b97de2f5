//! Error types for the `percolation-stats` binary.
//!
//! [`CliError`] is the top-level error type that wraps every failure mode
//! between argument parsing and writing results.

use percolation_core::SimulationError;
use percolation_core::config::ConfigError;

/// Top-level error for the `percolation-stats` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A positional argument is an integer but not a usable count.
    #[error("{name} must be greater than 0 (got {value})")]
    InvalidArgument {
        /// Which argument was rejected.
        name: &'static str,
        /// The value supplied on the command line.
        value: i64,
    },

    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The simulation rejected its arguments or a trial failed.
    #[error("simulation error: {source}")]
    Simulation {
        /// The underlying simulation error.
        #[from]
        source: SimulationError,
    },

    /// Writing results to stdout failed.
    #[error("output error: {source}")]
    Output {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Serializing the JSON summary failed.
    #[error("serialization error: {source}")]
    Json {
        /// The underlying serde error.
        #[from]
        source: serde_json::Error,
    },
}
