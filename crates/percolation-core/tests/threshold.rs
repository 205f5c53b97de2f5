//! End-to-end checks of the threshold estimate.
//!
//! These run full seeded simulations and compare the statistics against the
//! known site-percolation threshold of the square lattice (about 0.5927).

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use percolation_core::{
    PercolationStats, RandomSites, ScriptedSites, SimulationError, SiteSource, run_trial,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn estimate_is_near_known_threshold() {
    let stats = PercolationStats::with_seed(30, 200, 2024).unwrap();
    let mean = stats.mean();
    assert!((0.55..0.64).contains(&mean), "mean {mean} far from 0.5927");
    assert!(stats.stddev() > 0.0 && stats.stddev() < 0.1);
    assert!(stats.confidence_lo() <= mean && mean <= stats.confidence_hi());
}

#[test]
fn every_result_is_a_valid_fraction() {
    let stats = PercolationStats::with_seed(8, 100, 1).unwrap();
    assert_eq!(stats.results().len(), 100);
    for &r in stats.results() {
        // At least one full column (8 of 64 sites) is needed to percolate.
        assert!((0.125..=1.0).contains(&r), "result {r} out of range");
    }
}

#[test]
fn different_seeds_give_different_runs() {
    let a = PercolationStats::with_seed(15, 20, 1).unwrap();
    let b = PercolationStats::with_seed(15, 20, 2).unwrap();
    assert_ne!(a.results(), b.results());
}

#[test]
fn explicit_rng_source_matches_with_seed() {
    let mut source = RandomSites::new(StdRng::seed_from_u64(77));
    let from_source = PercolationStats::from_source(12, 25, &mut source).unwrap();
    let seeded = PercolationStats::with_seed(12, 25, 77).unwrap();
    assert_eq!(from_source, seeded);
}

#[test]
fn statistics_do_not_depend_on_trial_order() {
    let mut forward = ReplayOpenCounts::new(4, vec![4, 7, 13, 9]);
    let mut shuffled = ReplayOpenCounts::new(4, vec![13, 9, 4, 7]);

    let a = PercolationStats::from_source(4, 4, &mut forward).unwrap();
    let b = PercolationStats::from_source(4, 4, &mut shuffled).unwrap();

    assert_eq!(a.results(), &[4.0 / 16.0, 7.0 / 16.0, 13.0 / 16.0, 9.0 / 16.0]);
    assert_ne!(a.results(), b.results());
    assert!((a.mean() - b.mean()).abs() < 1e-12);
    assert!((a.stddev() - b.stddev()).abs() < 1e-12);
    assert!((a.confidence_lo() - b.confidence_lo()).abs() < 1e-12);
    assert!((a.confidence_hi() - b.confidence_hi()).abs() < 1e-12);
}

#[test]
fn scripted_runs_are_reproducible() {
    let script = vec![(1, 1), (2, 2), (2, 1), (3, 3), (3, 1)];
    let mut first = ScriptedSites::new(script.clone());
    let mut second = ScriptedSites::new(script);

    let a = PercolationStats::from_source(3, 3, &mut first).unwrap();
    let b = PercolationStats::from_source(3, 3, &mut second).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.results(), &[5.0 / 9.0; 3]);
    assert!(a.confidence_lo() <= a.mean() && a.mean() <= a.confidence_hi());
}

#[test]
fn bad_source_surfaces_lattice_error() {
    let mut source = ScriptedSites::new(vec![(0, 1)]);
    let err = PercolationStats::from_source(3, 2, &mut source).unwrap_err();
    assert!(matches!(err, SimulationError::Lattice { .. }));
}

#[test]
fn trial_through_trait_object() {
    let mut source = ScriptedSites::row_major();
    let dyn_source: &mut dyn SiteSource = &mut source;
    let outcome = run_trial(4, dyn_source).unwrap();
    assert_eq!(outcome.open_sites, 13);
}

/// Makes each trial percolate at a chosen open-site count.
///
/// Sites in rows `1..side` away from column 1 are opened first (they can
/// never reach the bottom row), then column 1 top to bottom, which
/// percolates on its last site. Counts must lie in
/// `side..=(side - 1) * (side - 1) + side`.
struct ReplayOpenCounts {
    side: usize,
    targets: Vec<usize>,
    trial: usize,
    inner: ScriptedSites,
}

impl ReplayOpenCounts {
    fn new(side: usize, targets: Vec<usize>) -> Self {
        Self {
            side,
            targets,
            trial: 0,
            inner: ScriptedSites::row_major(),
        }
    }

    fn script_for(&self, target: usize) -> Vec<(usize, usize)> {
        let side = self.side;
        let filler = target - side;
        let mut script: Vec<(usize, usize)> = (1..side)
            .flat_map(|row| (2..=side).map(move |col| (row, col)))
            .take(filler)
            .collect();
        script.extend((1..=side).map(|row| (row, 1)));
        script
    }
}

impl SiteSource for ReplayOpenCounts {
    fn start_trial(&mut self) {
        let target = self.targets[self.trial];
        self.inner = ScriptedSites::new(self.script_for(target));
        self.trial += 1;
    }

    fn next_site(&mut self, side: usize) -> (usize, usize) {
        self.inner.next_site(side)
    }
}
