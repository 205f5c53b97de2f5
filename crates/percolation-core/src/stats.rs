//! Repeated trials and the statistics derived from them.
//!
//! [`PercolationStats`] runs every trial inside its constructor and then only
//! exposes read accessors over the recorded open-site fractions. There is no
//! way to add trials afterwards, so every accessor is a pure function of the
//! immutable `results` vector.
//!
//! # Statistics
//!
//! - `mean` is the arithmetic mean of the results.
//! - `stddev` is the *sample* standard deviation (divides by `trials - 1`).
//!   With a single trial the formula evaluates `0 / 0` and the result is
//!   NaN; that NaN is returned unchanged and flows into the confidence
//!   interval endpoints as well.
//! - The 95% confidence interval is `mean ± CONFIDENCE_95 * stddev / sqrt(trials)`.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

use crate::error::SimulationError;
use crate::source::{RandomSites, SiteSource};
use crate::trial::run_trial;

/// z-value of the two-sided 95% normal confidence interval.
pub const CONFIDENCE_95: f64 = 1.96;

/// Percolation threshold estimate from repeated independent trials.
#[derive(Debug, Clone, PartialEq)]
pub struct PercolationStats {
    /// Grid side every trial ran on.
    side: usize,
    /// Open-site fraction recorded by each trial, in trial order.
    results: Vec<f64>,
}

/// Serializable snapshot of a finished run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    /// Grid side.
    pub side: usize,
    /// Number of trials.
    pub trials: usize,
    /// Sample mean of the thresholds.
    pub mean: f64,
    /// Sample standard deviation of the thresholds.
    pub stddev: f64,
    /// Low endpoint of the 95% confidence interval.
    pub confidence_lo: f64,
    /// High endpoint of the 95% confidence interval.
    pub confidence_hi: f64,
}

impl PercolationStats {
    /// Run `trials` independent trials on a `side` by `side` lattice using an
    /// OS-seeded random number generator.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidSide`] or
    /// [`SimulationError::InvalidTrialCount`] if either argument is 0, and
    /// [`SimulationError::TooManyTrials`] if `trials` results cannot be
    /// stored, before any trial runs.
    pub fn new(side: usize, trials: usize) -> Result<Self, SimulationError> {
        Self::validate(side, trials)?;
        let mut source = RandomSites::new(StdRng::from_os_rng());
        Self::from_source(side, trials, &mut source)
    }

    /// Run `trials` independent trials with a generator seeded from `seed`.
    ///
    /// The same `(side, trials, seed)` always yields the same results.
    ///
    /// # Errors
    ///
    /// Same as [`PercolationStats::new`].
    pub fn with_seed(side: usize, trials: usize, seed: u64) -> Result<Self, SimulationError> {
        Self::validate(side, trials)?;
        let mut source = RandomSites::new(StdRng::seed_from_u64(seed));
        Self::from_source(side, trials, &mut source)
    }

    /// Run `trials` independent trials drawing coordinates from `source`.
    ///
    /// # Errors
    ///
    /// Same as [`PercolationStats::new`], plus any error a single trial
    /// reports (see [`run_trial`]). Returns
    /// [`SimulationError::TooManyTrials`] if the result buffer for `trials`
    /// entries cannot be allocated.
    pub fn from_source<S>(
        side: usize,
        trials: usize,
        source: &mut S,
    ) -> Result<Self, SimulationError>
    where
        S: SiteSource + ?Sized,
    {
        Self::validate(side, trials)?;
        info!(side, trials, "starting percolation trials");

        let mut results = Vec::new();
        results
            .try_reserve_exact(trials)
            .map_err(|_overflow| SimulationError::TooManyTrials(trials))?;
        for _ in 0..trials {
            let outcome = run_trial(side, source)?;
            results.push(outcome.threshold);
        }

        let stats = Self { side, results };
        info!(
            side,
            trials,
            mean = stats.mean(),
            stddev = stats.stddev(),
            "percolation trials complete"
        );
        Ok(stats)
    }

    const fn validate(side: usize, trials: usize) -> Result<(), SimulationError> {
        if side == 0 {
            return Err(SimulationError::InvalidSide(side));
        }
        if trials == 0 {
            return Err(SimulationError::InvalidTrialCount(trials));
        }
        Ok(())
    }

    /// Return the grid side.
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Return the number of trials.
    pub fn trials(&self) -> usize {
        self.results.len()
    }

    /// Return the per-trial open-site fractions in trial order.
    pub fn results(&self) -> &[f64] {
        &self.results
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        let sum: f64 = self.results.iter().sum();
        sum / self.trial_count_f64()
    }

    /// Sample standard deviation of the percolation threshold.
    ///
    /// Divides the sum of squared deviations by `trials - 1`. With exactly
    /// one trial this is `0 / 0`, so the result is NaN.
    pub fn stddev(&self) -> f64 {
        let mean = self.mean();
        let squared_deviations: f64 = self
            .results
            .iter()
            .map(|r| {
                let diff = r - mean;
                diff * diff
            })
            .sum();
        let degrees_of_freedom = self.trial_count_f64() - 1.0;
        (squared_deviations / degrees_of_freedom).sqrt()
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }

    /// Snapshot every statistic into a serializable summary.
    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            side: self.side,
            trials: self.trials(),
            mean: self.mean(),
            stddev: self.stddev(),
            confidence_lo: self.confidence_lo(),
            confidence_hi: self.confidence_hi(),
        }
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / self.trial_count_f64().sqrt()
    }

    #[allow(clippy::cast_precision_loss)]
    fn trial_count_f64(&self) -> f64 {
        self.results.len() as f64
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::source::ScriptedSites;

    #[test]
    fn zero_arguments_are_rejected() {
        assert_eq!(
            PercolationStats::new(0, 10),
            Err(SimulationError::InvalidSide(0))
        );
        assert_eq!(
            PercolationStats::new(10, 0),
            Err(SimulationError::InvalidTrialCount(0))
        );
        assert_eq!(
            PercolationStats::with_seed(0, 0, 1),
            Err(SimulationError::InvalidSide(0))
        );
    }

    #[test]
    fn unallocatable_trial_count_is_an_error() {
        assert_eq!(
            PercolationStats::with_seed(1, usize::MAX, 0),
            Err(SimulationError::TooManyTrials(usize::MAX))
        );
        let mut source = ScriptedSites::row_major();
        assert_eq!(
            PercolationStats::from_source(1, usize::MAX / 2, &mut source),
            Err(SimulationError::TooManyTrials(usize::MAX / 2))
        );
    }

    #[test]
    fn single_site_single_trial() {
        let stats = PercolationStats::new(1, 1).unwrap();
        assert_eq!(stats.results(), &[1.0]);
        assert_eq!(stats.mean(), 1.0);
        assert!(stats.stddev().is_nan());
        assert!(stats.confidence_lo().is_nan());
        assert!(stats.confidence_hi().is_nan());
    }

    #[test]
    fn single_site_many_trials_has_zero_spread() {
        let stats = PercolationStats::with_seed(1, 5, 3).unwrap();
        assert_eq!(stats.side(), 1);
        assert_eq!(stats.trials(), 5);
        assert_eq!(stats.mean(), 1.0);
        assert_eq!(stats.stddev(), 0.0);
        assert_eq!(stats.confidence_lo(), 1.0);
        assert_eq!(stats.confidence_hi(), 1.0);
    }

    #[test]
    fn scripted_trials_give_exact_statistics() {
        // Row-major sweep on a 2x2 grid percolates at 3 of 4 sites every trial.
        let mut source = ScriptedSites::row_major();
        let stats = PercolationStats::from_source(2, 4, &mut source).unwrap();
        assert_eq!(stats.results(), &[0.75, 0.75, 0.75, 0.75]);
        assert_eq!(stats.mean(), 0.75);
        assert_eq!(stats.stddev(), 0.0);
    }

    #[test]
    fn stddev_matches_hand_computation() {
        let stats = PercolationStats {
            side: 4,
            results: vec![0.5, 0.75],
        };
        assert!((stats.mean() - 0.625).abs() < 1e-12);
        // Deviations are ±0.125, sum of squares 0.03125, divided by 1.
        let expected = 0.031_25_f64.sqrt();
        assert!((stats.stddev() - expected).abs() < 1e-12);

        let half = CONFIDENCE_95 * expected / 2.0_f64.sqrt();
        assert!((stats.confidence_lo() - (0.625 - half)).abs() < 1e-12);
        assert!((stats.confidence_hi() - (0.625 + half)).abs() < 1e-12);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let a = PercolationStats::with_seed(20, 30, 1234).unwrap();
        let b = PercolationStats::with_seed(20, 30, 1234).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.summary(), b.summary());
    }

    #[test]
    fn confidence_interval_brackets_mean() {
        let stats = PercolationStats::with_seed(10, 50, 99).unwrap();
        assert!(stats.confidence_lo() <= stats.mean());
        assert!(stats.mean() <= stats.confidence_hi());
    }

    #[test]
    fn summary_mirrors_accessors() {
        let stats = PercolationStats::with_seed(5, 10, 8).unwrap();
        let summary = stats.summary();
        assert_eq!(summary.side, 5);
        assert_eq!(summary.trials, 10);
        assert_eq!(summary.mean, stats.mean());
        assert_eq!(summary.stddev, stats.stddev());
        assert_eq!(summary.confidence_lo, stats.confidence_lo());
        assert_eq!(summary.confidence_hi, stats.confidence_hi());
    }

    #[test]
    fn summary_serializes() {
        let stats = PercolationStats::with_seed(1, 2, 0).unwrap();
        let json = serde_json::to_value(stats.summary()).unwrap();
        assert_eq!(json["side"], 1);
        assert_eq!(json["trials"], 2);
        assert_eq!(json["mean"], 1.0);
    }
}
