//! Configuration loading and typed config structures for the percolation runs.
//!
//! The optional configuration file is `percolation-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror the
//! YAML structure, and a loader that reads and validates the file. Every
//! field has a default, so an empty file (or no file at all) is valid.

use std::path::Path;

use serde::Deserialize;

/// Environment variable that overrides `simulation.seed`.
pub const SEED_ENV_VAR: &str = "PERCOLATION_SEED";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override holds a value of the wrong shape.
    #[error("invalid value {value:?} for {name}")]
    InvalidEnv {
        /// Name of the environment variable.
        name: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Trial settings.
    #[serde(default)]
    pub simulation: TrialConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Result output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `PERCOLATION_SEED` overrides `simulation.seed` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::InvalidEnv`] if the seed override is not a `u64`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }

    /// Apply environment variable overrides on top of the parsed values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if an override cannot be parsed.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_seed_override(std::env::var(SEED_ENV_VAR).ok().as_deref())
    }

    /// Override `simulation.seed` from a raw string value, if present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if `value` is not a `u64`.
    pub fn apply_seed_override(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        let Some(raw) = value else {
            return Ok(());
        };
        let seed = raw.trim().parse().map_err(|_parse| ConfigError::InvalidEnv {
            name: SEED_ENV_VAR,
            value: raw.to_owned(),
        })?;
        self.simulation.seed = Some(seed);
        Ok(())
    }
}

/// Trial settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TrialConfig {
    /// Seed for the site generator. `None` draws a fresh seed from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Result output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// How results are written to stdout.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format for the final statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Three human-readable lines.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

fn default_log_level() -> String {
    "warn".to_owned()
}
