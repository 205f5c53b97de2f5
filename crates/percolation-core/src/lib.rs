//! Monte Carlo driver for estimating the percolation threshold.
//!
//! This crate runs independent percolation trials against fresh
//! [`Lattice`](percolation_lattice::Lattice) instances and summarizes the
//! open-site fractions they produce.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `percolation-config.yaml` into
//!   strongly-typed structs.
//! - [`error`] -- [`SimulationError`] for invalid arguments and failed trials.
//! - [`source`] -- [`SiteSource`] trait with random and scripted coordinate
//!   producers.
//! - [`stats`] -- [`PercolationStats`]: runs all trials and exposes mean,
//!   standard deviation and the 95% confidence interval.
//! - [`trial`] -- A single trial: open sites until the lattice percolates.
//!
//! [`SiteSource`]: source::SiteSource
//! [`PercolationStats`]: stats::PercolationStats
//! [`SimulationError`]: error::SimulationError

pub mod config;
pub mod error;
pub mod source;
pub mod stats;
pub mod trial;

pub use error::SimulationError;
pub use source::{RandomSites, ScriptedSites, SiteSource};
pub use stats::{CONFIDENCE_95, PercolationStats, StatsSummary};
pub use trial::{STALE_DRAWS_PER_SITE, TrialOutcome, run_trial};
