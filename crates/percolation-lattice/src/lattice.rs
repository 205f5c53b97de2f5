//! The n-by-n site lattice.
//!
//! A [`Lattice`] tracks which sites are open and answers two connectivity
//! questions in near-constant time:
//!
//! - **Fullness**: is an open site connected to the top row?
//! - **Percolation**: does an open path join the top row to the bottom row?
//!
//! Both are answered with virtual anchor nodes. Site `(row, col)` maps to
//! element `(row - 1) * side + (col - 1)`; element `side * side` is the
//! virtual top and `side * side + 1` the virtual bottom.
//!
//! Two disjoint sets are kept. The percolation set contains both anchors.
//! The fullness set contains only the top anchor, because once the system
//! percolates every site attached to the bottom row would otherwise appear
//! connected to the top through the bottom anchor (backwash).
//!
//! Connectivity queries take `&mut self` only because `find` shortens paths
//! as it walks them; no observable state changes.

use tracing::trace;

use crate::disjoint_set::DisjointSet;
use crate::error::LatticeError;

/// An n-by-n grid of sites, each blocked or open.
///
/// Coordinates in the public API are 1-indexed: rows and columns run from
/// `1` to `side` inclusive. Sites only ever go from blocked to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    /// Grid dimension n.
    side: usize,
    /// Open flag per site, flattened row-major.
    open: Vec<bool>,
    /// Sites plus the virtual top. Never contains the virtual bottom.
    fullness: DisjointSet,
    /// Sites plus the virtual top and virtual bottom.
    percolation: DisjointSet,
    /// Element index of the virtual top node.
    virtual_top: usize,
    /// Element index of the virtual bottom node.
    virtual_bottom: usize,
    /// Number of open sites.
    open_count: usize,
}

impl Lattice {
    /// Create an n-by-n lattice with every site blocked.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::InvalidSide`] if `side` is 0, or
    /// [`LatticeError::SideTooLarge`] if the element count overflows.
    pub fn new(side: usize) -> Result<Self, LatticeError> {
        if side == 0 {
            return Err(LatticeError::InvalidSide(side));
        }

        let site_count = side
            .checked_mul(side)
            .ok_or(LatticeError::SideTooLarge { side })?;
        let virtual_top = site_count;
        let virtual_bottom = site_count
            .checked_add(1)
            .ok_or(LatticeError::SideTooLarge { side })?;
        let element_count = virtual_bottom
            .checked_add(1)
            .ok_or(LatticeError::SideTooLarge { side })?;

        Ok(Self {
            side,
            open: vec![false; site_count],
            fullness: DisjointSet::new(virtual_bottom),
            percolation: DisjointSet::new(element_count),
            virtual_top,
            virtual_bottom,
            open_count: 0,
        })
    }

    /// Return the grid dimension n.
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Return the total number of sites (`side * side`).
    pub fn site_count(&self) -> usize {
        self.open.len()
    }

    /// Return the number of open sites.
    pub const fn open_site_count(&self) -> usize {
        self.open_count
    }

    // -------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------

    /// Open the site at `(row, col)` if it is not open already.
    ///
    /// Opening joins the site to every open neighbour in both disjoint sets,
    /// to the virtual top in both sets when it lies in the first row, and to
    /// the virtual bottom in the percolation set only when it lies in the
    /// last row.
    ///
    /// Returns `true` if the site was blocked and is now open, `false` if
    /// it was already open.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::SiteOutOfBounds`] if the coordinate is
    /// outside the grid. The lattice is left unchanged.
    pub fn open(&mut self, row: usize, col: usize) -> Result<bool, LatticeError> {
        let index = self.index_of(row, col)?;
        match self.open.get(index).copied() {
            Some(true) => return Ok(false),
            Some(false) => {}
            None => return Err(self.out_of_bounds(row, col)),
        }
        if let Some(slot) = self.open.get_mut(index) {
            *slot = true;
        }
        self.open_count = self.open_count.saturating_add(1);

        if row == 1 {
            self.fullness.union(index, self.virtual_top);
            self.percolation.union(index, self.virtual_top);
        }
        if row == self.side {
            self.percolation.union(index, self.virtual_bottom);
        }

        for neighbour in self.open_neighbours(row, col) {
            self.fullness.union(index, neighbour);
            self.percolation.union(index, neighbour);
        }

        trace!(row, col, open_sites = self.open_count, "site opened");
        Ok(true)
    }

    // -------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------

    /// Return whether the site at `(row, col)` is open.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::SiteOutOfBounds`] if the coordinate is
    /// outside the grid.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, LatticeError> {
        let index = self.index_of(row, col)?;
        Ok(self.open.get(index).copied().unwrap_or(false))
    }

    /// Return whether the site at `(row, col)` is full, i.e. connected to
    /// the top row through a chain of open sites.
    ///
    /// A blocked site is never full: it has never been unioned with anything.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::SiteOutOfBounds`] if the coordinate is
    /// outside the grid.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool, LatticeError> {
        let index = self.index_of(row, col)?;
        Ok(self.fullness.connected(index, self.virtual_top))
    }

    /// Return whether an open path joins the top row to the bottom row.
    pub fn percolates(&mut self) -> bool {
        self.percolation
            .connected(self.virtual_top, self.virtual_bottom)
    }

    // -------------------------------------------------------------------
    // Indexing helpers
    // -------------------------------------------------------------------

    /// Return `true` if `(row, col)` lies inside the grid.
    const fn contains(&self, row: usize, col: usize) -> bool {
        row >= 1 && col >= 1 && row <= self.side && col <= self.side
    }

    /// Map a validated 1-indexed coordinate to its flattened element index.
    fn index_of(&self, row: usize, col: usize) -> Result<usize, LatticeError> {
        if !self.contains(row, col) {
            return Err(self.out_of_bounds(row, col));
        }
        row.checked_sub(1)
            .and_then(|r| r.checked_mul(self.side))
            .zip(col.checked_sub(1))
            .and_then(|(base, c)| base.checked_add(c))
            .ok_or_else(|| self.out_of_bounds(row, col))
    }

    const fn out_of_bounds(&self, row: usize, col: usize) -> LatticeError {
        LatticeError::SiteOutOfBounds {
            row,
            col,
            side: self.side,
        }
    }

    /// Element indices of the open in-grid neighbours of `(row, col)`.
    fn open_neighbours(&self, row: usize, col: usize) -> Vec<usize> {
        let candidates = [
            (Some(row), col.checked_sub(1)),
            (Some(row), col.checked_add(1)),
            (row.checked_sub(1), Some(col)),
            (row.checked_add(1), Some(col)),
        ];

        candidates
            .into_iter()
            .filter_map(|(r, c)| r.zip(c))
            .filter_map(|(r, c)| self.index_of(r, c).ok())
            .filter(|&i| self.open.get(i).copied().unwrap_or(false))
            .collect()
    }
}
