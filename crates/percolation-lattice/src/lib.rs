//! Site lattice and connectivity model for the percolation simulation.
//!
//! This crate models a single n-by-n grid of sites that start blocked and
//! are opened one at a time. Connectivity questions ("is this site reachable
//! from the top row?", "does an open path span top to bottom?") are answered
//! through weighted disjoint sets with virtual anchor nodes.
//!
//! # Modules
//!
//! - [`disjoint_set`] -- Union-by-size disjoint sets with path halving.
//! - [`error`] -- Error types for lattice construction and site access.
//! - [`lattice`] -- The [`Lattice`] itself: open, fullness and percolation
//!   queries over 1-indexed coordinates.

pub mod disjoint_set;
pub mod error;
pub mod lattice;

// Re-export primary types at crate root.
pub use disjoint_set::DisjointSet;
pub use error::LatticeError;
pub use lattice::Lattice;
