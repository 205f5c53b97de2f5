//! Error types for the `percolation-core` crate.

use percolation_lattice::LatticeError;

/// Errors that can occur while setting up or running trials.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    /// The grid side is not positive.
    #[error("grid side must be greater than 0 (got {0})")]
    InvalidSide(usize),

    /// The trial count is not positive.
    #[error("trial count must be greater than 0 (got {0})")]
    InvalidTrialCount(usize),

    /// Storage for the per-trial results could not be allocated.
    #[error("cannot record {0} trial results")]
    TooManyTrials(usize),

    /// The site source kept returning already-open sites.
    #[error(
        "site source made no progress on a {side}x{side} lattice after {stale_draws} draws of open sites"
    )]
    SourceStalled {
        /// The lattice side.
        side: usize,
        /// Consecutive draws that opened nothing.
        stale_draws: usize,
    },

    /// Every site was opened and the lattice still did not percolate.
    #[error("{side}x{side} lattice did not percolate with {open_sites} open sites")]
    NeverPercolated {
        /// The lattice side.
        side: usize,
        /// Number of open sites when the trial gave up.
        open_sites: usize,
    },

    /// A lattice operation failed.
    #[error("lattice error: {source}")]
    Lattice {
        /// The underlying lattice error.
        #[from]
        source: LatticeError,
    },
}
