use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

/// How sites are drawn during a trial. Both yield the same distribution of
/// the open count at the moment of percolation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SamplingStrategy {
    /// Uniform `(row, col)` draws; re-drawing an open site is a wasted step.
    #[default]
    WithReplacement,
    /// Opens the prefix of a lazily shuffled permutation of all sites.
    Permutation,
}

/// Result of a single percolation experiment.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrialOutcome {
    pub open_sites: CellCount,
    pub total_sites: CellCount,
    pub threshold: f64,
}

/// Drives a fresh [`PercolationGrid`] with random openings until it percolates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TrialRunner {
    size: Coord,
    strategy: SamplingStrategy,
}

impl TrialRunner {
    pub fn new(size: Coord, strategy: SamplingStrategy) -> Result<Self> {
        if size == 0 {
            return Err(PercolationError::InvalidDimension);
        }
        Ok(Self { size, strategy })
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn strategy(&self) -> SamplingStrategy {
        self.strategy
    }

    pub fn run(&self, source: &mut impl RandomSource) -> Result<TrialOutcome> {
        let grid = self.percolated_grid(source)?;
        log::trace!("final grid:\n{grid}");

        let outcome = TrialOutcome {
            open_sites: grid.number_of_open_sites(),
            total_sites: grid.total_sites(),
            threshold: grid.open_fraction(),
        };
        log::debug!(
            "trial (seed {}) percolated with {} of {} sites open",
            source.seed(),
            outcome.open_sites,
            outcome.total_sites
        );
        Ok(outcome)
    }

    /// Opens random sites on a fresh grid until it percolates.
    pub fn percolated_grid(&self, source: &mut impl RandomSource) -> Result<PercolationGrid> {
        let mut grid = PercolationGrid::new(self.size)?;

        match self.strategy {
            SamplingStrategy::WithReplacement => self.open_with_replacement(&mut grid, source)?,
            SamplingStrategy::Permutation => self.open_permutation(&mut grid, source)?,
        }
        Ok(grid)
    }

    fn open_with_replacement(
        &self,
        grid: &mut PercolationGrid,
        source: &mut impl RandomSource,
    ) -> Result<()> {
        let n = CellCount::from(self.size);
        while !grid.percolates() {
            let row = source.uniform_int(n) as Coord + 1;
            let col = source.uniform_int(n) as Coord + 1;
            grid.open(row, col)?;
        }
        Ok(())
    }

    fn open_permutation(
        &self,
        grid: &mut PercolationGrid,
        source: &mut impl RandomSource,
    ) -> Result<()> {
        let total = grid.total_sites();
        let side = self.size as usize;
        let mut order: Vec<usize> = (0..side * side).collect();

        // forward Fisher-Yates, stopping as soon as the opened prefix percolates
        for i in 0..order.len() {
            let j = i + source.uniform_int(total - i as CellCount) as usize;
            order.swap(i, j);

            let site = order[i];
            let row = (site / side) as Coord + 1;
            let col = (site % side) as Coord + 1;
            if grid.open(row, col)? == OpenOutcome::Percolated {
                break;
            }
        }
        Ok(())
    }
}

/// Runs one with-replacement trial on an `n`-by-`n` grid and returns `K / N²`.
pub fn run_trial(n: Coord, source: &mut impl RandomSource) -> Result<f64> {
    TrialRunner::new(n, SamplingStrategy::WithReplacement)?
        .run(source)
        .map(|outcome| outcome.threshold)
}
