//! Monte Carlo estimation of the site-percolation threshold on an N-by-N
//! square grid.
//!
//! [`PercolationGrid`] is the connectivity core, [`TrialRunner`] drives one
//! grid to percolation, and [`PercolationStats`] aggregates many trials.

pub use error::*;
pub use grid::*;
pub use site::*;
pub use stats::*;
pub use trial::*;
pub use types::*;
pub use union_find::*;

mod error;
mod grid;
mod site;
mod stats;
mod trial;
mod types;
mod union_find;
