//! A single percolation trial.
//!
//! A trial starts from an all-blocked lattice and opens sites drawn from a
//! [`SiteSource`] until the lattice percolates. The fraction of open sites at
//! that moment is the trial's estimate of the threshold.
//!
//! The loop is bounded: it also stops once every site is open. Each
//! state-changing open removes one blocked site, so at most `side * side`
//! effective opens happen before one of the two exits is taken. A fully open
//! lattice always percolates, so reaching that bound without percolation
//! means the connectivity model is broken and the trial reports
//! [`SimulationError::NeverPercolated`].
//!
//! Draws of already-open sites do not make progress, so they are bounded
//! separately: after [`STALE_DRAWS_PER_SITE`] times `side * side` consecutive
//! draws that open nothing the trial gives up with
//! [`SimulationError::SourceStalled`]. A uniform source with even one blocked
//! site left hits that limit with probability below `e^-64`.

use percolation_lattice::Lattice;
use tracing::debug;

use crate::error::SimulationError;
use crate::source::SiteSource;

/// Consecutive draws of open sites allowed per lattice site before a trial
/// treats its source as stalled.
pub const STALE_DRAWS_PER_SITE: usize = 64;

/// The result of one trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialOutcome {
    /// Number of open sites when the lattice first percolated.
    pub open_sites: usize,
    /// Number of coordinates drawn, including draws of already-open sites.
    pub draws: usize,
    /// `open_sites / (side * side)`.
    pub threshold: f64,
}

/// Run one trial on a fresh `side` by `side` lattice.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidSide`] if `side` is 0,
/// [`SimulationError::Lattice`] if the source yields an out-of-range
/// coordinate, [`SimulationError::SourceStalled`] if the source keeps
/// drawing open sites, or [`SimulationError::NeverPercolated`] if every site
/// is open and the lattice still does not percolate.
pub fn run_trial<S>(side: usize, source: &mut S) -> Result<TrialOutcome, SimulationError>
where
    S: SiteSource + ?Sized,
{
    if side == 0 {
        return Err(SimulationError::InvalidSide(side));
    }

    let mut lattice = Lattice::new(side)?;
    let site_count = lattice.site_count();
    let stale_limit = site_count.saturating_mul(STALE_DRAWS_PER_SITE);
    let mut draws: usize = 0;
    let mut stale_draws: usize = 0;
    source.start_trial();

    while !lattice.percolates() {
        if lattice.open_site_count() >= site_count {
            return Err(SimulationError::NeverPercolated {
                side,
                open_sites: lattice.open_site_count(),
            });
        }
        let (row, col) = source.next_site(side);
        let opened = lattice.open(row, col)?;
        draws = draws.saturating_add(1);
        if opened {
            stale_draws = 0;
        } else {
            stale_draws = stale_draws.saturating_add(1);
            if stale_draws >= stale_limit {
                return Err(SimulationError::SourceStalled { side, stale_draws });
            }
        }
    }

    let open_sites = lattice.open_site_count();
    #[allow(clippy::cast_precision_loss)]
    let threshold = open_sites as f64 / site_count as f64;

    debug!(side, open_sites, draws, threshold, "trial percolated");

    Ok(TrialOutcome {
        open_sites,
        draws,
        threshold,
    })
}
