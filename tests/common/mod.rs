//! Shared helpers for integration tests.

#![allow(dead_code)]

use rayterm::core::Grid;
use rayterm::types::Point2D;

pub const EPS: f64 = 1e-3;

/// 10x10 grid with an outer ring of walls.
pub fn closed_grid() -> Grid {
    Grid::bordered(10, 10)
}

/// A one-cell-high corridor running along +x, walls at x = 0 and x = 9.
pub fn corridor() -> Grid {
    Grid::parse("##########\n#........#\n##########")
}

#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= EPS,
        "expected {expected}, got {actual}"
    );
}

#[track_caller]
pub fn assert_point(actual: Option<Point2D>, expected: Point2D) {
    let p = actual.unwrap_or_else(|| panic!("expected impact near {expected:?}, got none"));
    assert!(p.approx_eq(expected), "expected {expected:?}, got {p:?}");
}
