//! Error types for the `percolation-lattice` crate.
//!
//! All fallible lattice operations return [`LatticeError`]. Every variant is
//! a validation failure raised before any state is touched.

/// Errors that can occur while building or querying a lattice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LatticeError {
    /// The requested grid side is not positive.
    #[error("lattice side must be greater than 0 (got {0})")]
    InvalidSide(usize),

    /// The requested grid is too large to index (`side * side + 2` overflows).
    #[error("lattice side {side} is too large to index")]
    SideTooLarge {
        /// The requested side.
        side: usize,
    },

    /// A site coordinate lies outside `[1, side] x [1, side]`.
    #[error("site ({row}, {col}) is outside the {side}x{side} lattice")]
    SiteOutOfBounds {
        /// The 1-indexed row that was requested.
        row: usize,
        /// The 1-indexed column that was requested.
        col: usize,
        /// The lattice side.
        side: usize,
    },
}
