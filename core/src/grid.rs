use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Outcome of opening a site.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    /// Site was already open
    NoChange,
    /// Site was opened, percolation state unchanged
    Opened,
    /// Site was opened and the grid percolates for the first time
    Percolated,
}

impl OpenOutcome {
    /// Whether this outcome changed the grid
    pub const fn has_update(self) -> bool {
        use OpenOutcome::*;
        match self {
            NoChange => false,
            Opened => true,
            Percolated => true,
        }
    }
}

/// N-by-N site percolation state backed by a union-find over `N² + 1` elements.
///
/// Element [`TOP_SENTINEL`] stands for the whole first row. There is no bottom
/// sentinel: percolation is detected by scanning the open sites of the last
/// row, which keeps [`PercolationGrid::is_full`] free of backwash.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PercolationGrid {
    size: Coord,
    sites: Array2<Site>,
    connectivity: UnionFind,
    bottom_open: Vec<SiteIndex>,
    open_count: CellCount,
    percolates: bool,
}

impl PercolationGrid {
    /// Creates an `n`-by-`n` grid with every site blocked.
    pub fn new(n: Coord) -> Result<Self> {
        if n == 0 {
            return Err(PercolationError::InvalidDimension);
        }

        let side = n as usize;
        Ok(Self {
            size: n,
            sites: Array2::default([side, side]),
            connectivity: UnionFind::new(side * side + 1),
            bottom_open: Vec::new(),
            open_count: 0,
            percolates: false,
        })
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn total_sites(&self) -> CellCount {
        square(self.size)
    }

    pub fn number_of_open_sites(&self) -> CellCount {
        self.open_count
    }

    pub fn percolates(&self) -> bool {
        self.percolates
    }

    /// Fraction of open sites, `K / N²`.
    pub fn open_fraction(&self) -> f64 {
        self.open_count as f64 / self.total_sites() as f64
    }

    /// Checks the row first, then the column.
    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (row, col) = coords;
        if row == 0 || row > self.size {
            return Err(PercolationError::RowOutOfRange {
                row,
                size: self.size,
            });
        }
        if col == 0 || col > self.size {
            return Err(PercolationError::ColumnOutOfRange {
                col,
                size: self.size,
            });
        }
        Ok(coords)
    }

    pub fn site(&self, row: Coord, col: Coord) -> Result<Site> {
        let coords = self.validate_coords((row, col))?;
        Ok(self.sites[coords.to_nd_index()])
    }

    pub fn is_open(&self, row: Coord, col: Coord) -> Result<bool> {
        Ok(self.site(row, col)?.is_open())
    }

    /// Whether the site is open and connected to the first row.
    pub fn is_full(&self, row: Coord, col: Coord) -> Result<bool> {
        let coords = self.validate_coords((row, col))?;
        Ok(self.is_full_at(coords))
    }

    /// Opens a site if it is not open already. Out-of-range coordinates are
    /// rejected before anything is touched.
    pub fn open(&mut self, row: Coord, col: Coord) -> Result<OpenOutcome> {
        let coords = self.validate_coords((row, col))?;

        if self.sites[coords.to_nd_index()].is_open() {
            return Ok(OpenOutcome::NoChange);
        }

        self.sites[coords.to_nd_index()] = Site::Open;
        self.open_count += 1;

        let index = self.site_index(coords);
        if row == 1 {
            self.connectivity.union(TOP_SENTINEL, index);
        }
        if row == self.size {
            self.bottom_open.push(index);
        }

        for neighbor in NeighborIter::new(coords, self.size) {
            if self.sites[neighbor.to_nd_index()].is_open() {
                self.connectivity.union(index, self.site_index(neighbor));
            }
        }

        // P is sticky, and fewer than N open sites cannot span N rows
        if !self.percolates
            && self.open_count >= CellCount::from(self.size)
            && self.connects_to_bottom(index)
        {
            self.percolates = true;
            log::trace!(
                "grid of size {} percolates after {} openings, last at {:?}",
                self.size,
                self.open_count,
                coords
            );
            return Ok(OpenOutcome::Percolated);
        }

        Ok(OpenOutcome::Opened)
    }

    /// Maps 1-based coordinates to `1..=N²`; index 0 is the top sentinel.
    fn site_index(&self, (row, col): Coord2) -> SiteIndex {
        (row as usize - 1) * self.size as usize + col as usize
    }

    fn is_full_at(&self, coords: Coord2) -> bool {
        self.sites[coords.to_nd_index()].is_open()
            && self
                .connectivity
                .connected(TOP_SENTINEL, self.site_index(coords))
    }

    /// Any new top-to-bottom path must pass through the site just opened, so
    /// the site has to be full and share a component with some open site of
    /// the last row.
    fn connects_to_bottom(&mut self, opened: SiteIndex) -> bool {
        let anchor = self.connectivity.find(opened);
        if anchor != self.connectivity.find(TOP_SENTINEL) {
            return false;
        }

        let Self {
            connectivity,
            bottom_open,
            ..
        } = self;
        bottom_open
            .iter()
            .any(|&site| connectivity.find(site) == anchor)
    }
}

/// Renders one line per row: `#` blocked, `.` open, `~` full.
impl fmt::Display for PercolationGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 1..=self.size {
            for col in 1..=self.size {
                let glyph = match self.sites[(row, col).to_nd_index()] {
                    Site::Blocked => '#',
                    Site::Open if self.is_full_at((row, col)) => '~',
                    Site::Open => '.',
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
