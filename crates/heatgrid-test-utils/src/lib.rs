//! Test utilities for heatgrid development.
//!
//! Provides ready-made grids for assembly and solver tests. The main
//! fixture is the chamfered 5×6 plate in [`fixtures::demo_plate`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use heatgrid_core::{Material, Spacing};
use heatgrid_grid::Grid;

pub use fixtures::{demo_plate, demo_plate_unconstrained, PlateParams};

/// Fully occupied grid with uniform material and no boundary conditions.
pub fn uniform_grid(width: u32, height: u32, spacing: Spacing, material: Material) -> Grid {
    match Grid::with_material(width, height, spacing, material) {
        Ok(grid) => grid,
        Err(e) => panic!("fixture grid {width}x{height} rejected: {e}"),
    }
}

/// Assert two floats agree to within `tol`, with a readable failure message.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (tolerance {tol})"
    );
}
