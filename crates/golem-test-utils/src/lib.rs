//! Test utilities and fixtures for Golem development.
//!
//! Grids can be written as ASCII art (`#` or `O` alive, `.` dead), and
//! engines can be built pre-populated in manual mode.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use golem_core::Coord;
use golem_engine::SimulationEngine;
use golem_grid::Grid;

/// Build a grid from equal-length rows of ASCII art.
///
/// Panics if the rows are not square or contain characters other than
/// `#`, `O`, and `.`.
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    let size = rows.len();
    let mut grid = Grid::new(size).expect("at least one row");
    for (r, line) in rows.iter().enumerate() {
        assert_eq!(line.chars().count(), size, "row {r} is not {size} wide");
        for (c, ch) in line.chars().enumerate() {
            let alive = match ch {
                '#' | 'O' => true,
                '.' => false,
                other => panic!("unexpected cell character {other:?} at ({r}, {c})"),
            };
            grid.set(Coord::new(r as i32, c as i32), alive).unwrap();
        }
    }
    grid
}

/// Render a grid back to rows (`#` alive, `.` dead).
pub fn rows_of(grid: &Grid) -> Vec<String> {
    grid.to_string().lines().map(str::to_string).collect()
}

/// Assert that `grid` matches the ASCII art in `rows`, printing both on
/// mismatch.
#[track_caller]
pub fn assert_grid_eq(grid: &Grid, rows: &[&str]) {
    let expected = grid_from_rows(rows);
    assert!(
        *grid == expected,
        "grid mismatch\nexpected:\n{expected}\n\nactual:\n{grid}"
    );
}

/// An engine initialized in manual mode with `cells` toggled alive.
pub fn engine_with_cells(size: i64, cells: &[(i32, i32)]) -> SimulationEngine {
    let mut engine = SimulationEngine::new();
    engine.initialize(size, "By Click").unwrap();
    for &(r, c) in cells {
        engine.toggle_cell(r, c).unwrap();
    }
    engine
}
