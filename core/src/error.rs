use thiserror::Error;

use crate::types::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PercolationError {
    #[error("Grid dimension must be greater than zero")]
    InvalidDimension,
    #[error("Trial count must be greater than zero")]
    InvalidTrialCount,
    #[error("Row index {row} out of range 1..={size}")]
    RowOutOfRange { row: Coord, size: Coord },
    #[error("Column index {col} out of range 1..={size}")]
    ColumnOutOfRange { col: Coord, size: Coord },
}

pub type Result<T> = core::result::Result<T, PercolationError>;
