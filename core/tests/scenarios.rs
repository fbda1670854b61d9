//! End-to-end scenarios for the connectivity grid and the statistics summary.

use percolation_core::{PercolationError, PercolationGrid, Summary};

#[test]
fn test_minimum_grid() {
    let mut grid = PercolationGrid::new(1).unwrap();
    grid.open(1, 1).unwrap();

    assert!(grid.is_open(1, 1).unwrap());
    assert!(grid.is_full(1, 1).unwrap());
    assert!(grid.percolates());
    assert_eq!(grid.number_of_open_sites(), 1);
}

#[test]
fn test_column_path() {
    let mut grid = PercolationGrid::new(3).unwrap();

    grid.open(1, 2).unwrap();
    assert!(!grid.percolates());
    assert!(grid.is_full(1, 2).unwrap());

    grid.open(2, 2).unwrap();
    assert!(!grid.percolates());
    assert!(grid.is_full(2, 2).unwrap());

    grid.open(3, 2).unwrap();
    assert!(grid.percolates());
    assert!(grid.is_full(3, 2).unwrap());
    assert_eq!(grid.number_of_open_sites(), 3);
}

#[test]
fn test_non_percolating_fill() {
    let mut grid = PercolationGrid::new(3).unwrap();
    for (row, col) in [(1, 1), (1, 2), (1, 3), (2, 1), (3, 3)] {
        grid.open(row, col).unwrap();
    }

    assert!(!grid.percolates());
    assert!(!grid.is_full(3, 3).unwrap());
    assert!(grid.is_full(2, 1).unwrap());
    assert_eq!(grid.number_of_open_sites(), 5);
}

#[test]
fn test_backwash_guard() {
    let mut grid = PercolationGrid::new(4).unwrap();
    for row in 1..=3 {
        grid.open(row, 1).unwrap();
        assert!(!grid.percolates());
    }
    grid.open(4, 1).unwrap();
    assert!(grid.percolates());

    grid.open(4, 4).unwrap();
    assert!(grid.is_open(4, 4).unwrap());
    assert!(!grid.is_full(4, 4).unwrap());
    assert!(grid.percolates());
}

#[test]
fn test_coordinate_errors_leave_state_untouched() {
    let mut grid = PercolationGrid::new(5).unwrap();
    grid.open(3, 3).unwrap();
    let before = grid.clone();

    assert_eq!(
        grid.open(0, 1).unwrap_err(),
        PercolationError::RowOutOfRange { row: 0, size: 5 }
    );
    assert_eq!(
        grid.open(6, 1).unwrap_err(),
        PercolationError::RowOutOfRange { row: 6, size: 5 }
    );
    assert_eq!(
        grid.open(1, 0).unwrap_err(),
        PercolationError::ColumnOutOfRange { col: 0, size: 5 }
    );
    assert_eq!(
        grid.open(1, 6).unwrap_err(),
        PercolationError::ColumnOutOfRange { col: 6, size: 5 }
    );
    assert_eq!(
        grid.is_open(0, 0).unwrap_err(),
        PercolationError::RowOutOfRange { row: 0, size: 5 }
    );

    assert_eq!(grid, before);
    assert_eq!(grid.number_of_open_sites(), 1);
}

#[test]
fn test_error_messages_name_the_coordinate() {
    let grid = PercolationGrid::new(5).unwrap();
    let message = grid.is_full(2, 7).unwrap_err().to_string();
    assert!(message.contains("Column"), "{message}");
    assert!(message.contains('7'), "{message}");
}

#[test]
fn test_statistics_smoke() {
    let summary = Summary::from_thresholds(&[0.5, 0.5, 0.5, 0.5]).unwrap();

    assert_eq!(summary.trials, 4);
    assert_eq!(summary.mean, 0.5);
    assert_eq!(summary.stddev, 0.0);
    assert_eq!(summary.confidence_lo, 0.5);
    assert_eq!(summary.confidence_hi, 0.5);
}
