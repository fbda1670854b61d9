//! Generative checks of the grid against a breadth-first reference.

use std::collections::{HashSet, VecDeque};

use percolation_core::{Coord, Coord2, NeighborIter, PercolationGrid, Summary};
use proptest::prelude::*;

/// Open sites reachable from the first row through open neighbors.
fn reachable_from_top(grid: &PercolationGrid) -> HashSet<Coord2> {
    let n = grid.size();
    let mut visited = HashSet::new();
    let mut queue: VecDeque<Coord2> = (1..=n)
        .map(|col| (1, col))
        .filter(|&(row, col)| grid.is_open(row, col).unwrap())
        .collect();
    visited.extend(queue.iter().copied());

    while let Some(site) = queue.pop_front() {
        for neighbor in NeighborIter::new(site, n) {
            if grid.is_open(neighbor.0, neighbor.1).unwrap() && visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    visited
}

fn ops_strategy() -> impl Strategy<Value = (Coord, Vec<Coord2>)> {
    (1u32..8).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0u32..=n + 1, 0u32..=n + 1), 0..80),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn open_count_matches_distinct_valid_openings((n, ops) in ops_strategy()) {
        let mut grid = PercolationGrid::new(n).unwrap();
        let mut distinct = HashSet::new();
        for &(row, col) in &ops {
            let in_range = (1..=n).contains(&row) && (1..=n).contains(&col);
            prop_assert_eq!(grid.open(row, col).is_ok(), in_range);
            if in_range {
                distinct.insert((row, col));
            }
        }
        prop_assert_eq!(grid.number_of_open_sites(), distinct.len() as u64);
    }

    #[test]
    fn reopening_is_invisible((n, ops) in ops_strategy()) {
        let mut once = PercolationGrid::new(n).unwrap();
        let mut twice = PercolationGrid::new(n).unwrap();
        for &(row, col) in &ops {
            let _ = once.open(row, col);
            let _ = twice.open(row, col);
            let _ = twice.open(row, col);
        }
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn fullness_matches_reference((n, ops) in ops_strategy()) {
        let mut grid = PercolationGrid::new(n).unwrap();
        for &(row, col) in &ops {
            let _ = grid.open(row, col);
        }

        let reachable = reachable_from_top(&grid);
        for row in 1..=n {
            for col in 1..=n {
                let full = grid.is_full(row, col).unwrap();
                prop_assert_eq!(full, reachable.contains(&(row, col)));
                if full {
                    prop_assert!(grid.is_open(row, col).unwrap());
                }
            }
        }
    }

    #[test]
    fn top_row_sites_are_full_once_open((n, ops) in ops_strategy()) {
        let mut grid = PercolationGrid::new(n).unwrap();
        for &(row, col) in &ops {
            if grid.open(row, col).is_ok() && row == 1 {
                prop_assert!(grid.is_full(1, col).unwrap());
            }
        }
    }

    #[test]
    fn percolation_is_sticky_and_witnessed((n, ops) in ops_strategy()) {
        let mut grid = PercolationGrid::new(n).unwrap();
        let mut seen = false;
        for &(row, col) in &ops {
            let _ = grid.open(row, col);
            if seen {
                prop_assert!(grid.percolates());
            }
            seen = grid.percolates();

            let reachable = reachable_from_top(&grid);
            let witnessed = (1..=n).any(|col| reachable.contains(&(n, col)));
            prop_assert_eq!(grid.percolates(), witnessed);
        }
    }

    #[test]
    fn constant_thresholds_collapse_the_interval(x in 0.0f64..=1.0, trials in 2usize..50) {
        let summary = Summary::from_thresholds(&vec![x; trials]).unwrap();
        prop_assert!((summary.mean - x).abs() <= 1e-12);
        prop_assert!(summary.stddev.abs() <= 1e-12);
        prop_assert!((summary.confidence_lo - x).abs() <= 1e-12);
        prop_assert!((summary.confidence_hi - x).abs() <= 1e-12);
    }
}
