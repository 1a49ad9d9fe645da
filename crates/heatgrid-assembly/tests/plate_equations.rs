//! Equations of the demonstration plate, checked cell by cell.

use heatgrid_assembly::{assemble, cell_equation, AssemblyError, QuadrantPattern, QuadrantSet};
use heatgrid_core::{BoundaryCondition, CellIndex, LinearExpr};
use heatgrid_test_utils::{assert_close, demo_plate, demo_plate_unconstrained, PlateParams};

const TOL: f64 = 1e-9;

fn c(row: u32, col: u32) -> CellIndex {
    CellIndex::new(row, col)
}

fn equation(row: u32, col: u32) -> LinearExpr {
    let grid = demo_plate(&PlateParams::default());
    cell_equation(&grid, c(row, col)).unwrap()
}

fn assert_terms(e: &LinearExpr, expected: &[((u32, u32), f64)], constant: f64) {
    for &((row, col), coeff) in expected {
        assert_close(e.coefficient(c(row, col)), coeff, TOL);
    }
    assert_eq!(e.terms().count(), expected.len(), "unexpected extra terms in {e}");
    assert_close(e.constant_term(), constant, TOL);
}

#[test]
fn plate_has_28_unknowns() {
    let grid = demo_plate(&PlateParams::default());
    let assembly = assemble(&grid).unwrap();
    assert_eq!(assembly.len(), 28);
    assert_eq!(assembly.equations().len(), 28);
    assert!(!assembly.unknowns().contains(&c(5, 0)));
    assert!(!assembly.unknowns().contains(&c(5, 4)));
}

#[test]
fn bottom_row_is_pinned() {
    for col in 0..5 {
        let e = equation(0, col);
        assert_eq!(e, LinearExpr::unknown(c(0, col)) - 100.0);
    }
}

#[test]
fn interior_cell() {
    let e = equation(2, 2);
    assert_terms(
        &e,
        &[
            ((2, 2), -80.0),
            ((1, 2), 20.0),
            ((3, 2), 20.0),
            ((2, 1), 20.0),
            ((2, 3), 20.0),
        ],
        400.0,
    );
}

#[test]
fn top_edge_convection() {
    // Two down quadrants: exposed length Δx, h·Δx = 2.
    let e = equation(5, 2);
    assert_terms(
        &e,
        &[((5, 2), -42.0), ((4, 2), 20.0), ((5, 1), 10.0), ((5, 3), 10.0)],
        200.0 + 60.0,
    );
}

#[test]
fn top_row_next_to_removed_corner() {
    let e = equation(5, 1);
    assert_terms(
        &e,
        &[((5, 1), -22.0), ((5, 2), 10.0), ((4, 1), 10.0)],
        100.0 + 60.0,
    );
}

#[test]
fn right_edge_flux() {
    let e = equation(2, 4);
    assert_terms(
        &e,
        &[((2, 4), -40.0), ((2, 3), 20.0), ((3, 4), 10.0), ((1, 4), 10.0)],
        200.0 + 2.0,
    );
}

#[test]
fn flux_and_convection_share_the_corner() {
    // One quadrant, area 0.2, each condition gets 0.1.
    let e = equation(4, 4);
    assert_terms(
        &e,
        &[((4, 4), -21.0), ((4, 3), 10.0), ((3, 4), 10.0)],
        100.0 + 1.0 + 30.0,
    );
}

#[test]
fn left_corner_convection() {
    let e = equation(4, 0);
    assert_terms(
        &e,
        &[((4, 0), -22.0), ((4, 1), 10.0), ((3, 0), 10.0)],
        100.0 + 60.0,
    );
}

#[test]
fn notch_without_conditions() {
    let grid = demo_plate(&PlateParams::default());
    let set = QuadrantSet::of(&grid, c(4, 1)).unwrap();
    assert_eq!(QuadrantPattern::classify(set), QuadrantPattern::Notch);
    let e = cell_equation(&grid, c(4, 1)).unwrap();
    assert_close(e.constant_term(), 300.0, TOL);
    // Left and up each conduct through one half face only.
    assert_close(e.coefficient(c(4, 0)), 10.0, TOL);
    assert_close(e.coefficient(c(5, 1)), 10.0, TOL);
    assert_close(e.coefficient(c(4, 2)), 20.0, TOL);
    assert_close(e.coefficient(c(3, 1)), 20.0, TOL);
    assert_close(e.coefficient(c(4, 1)), -60.0, TOL);
}

#[test]
fn rows_sum_to_zero_without_boundaries() {
    // Conduction is conservative: every balance without boundary terms
    // vanishes at a uniform temperature, leaving only generation.
    let params = PlateParams {
        generation: 0.0,
        ..PlateParams::default()
    };
    let grid = demo_plate_unconstrained(&params);
    for (cell, e) in assemble(&grid).unwrap().iter() {
        let at_uniform = e.evaluate(|_| Some(42.0)).unwrap();
        assert_close(at_uniform, 0.0, 1e-9);
        assert!(e.unknowns().all(|u| grid.is_occupied(u)), "{cell}: {e}");
    }
}

#[test]
fn removed_cell_cannot_be_assembled() {
    let grid = demo_plate(&PlateParams::default());
    assert!(matches!(
        cell_equation(&grid, c(5, 0)),
        Err(AssemblyError::Grid(_))
    ));
}

#[test]
fn interior_condition_fails_whole_assembly() {
    let mut grid = demo_plate(&PlateParams::default());
    grid.add_boundary_condition(c(2, 2), BoundaryCondition::Flux { value: 1.0 })
        .unwrap();
    assert_eq!(
        assemble(&grid),
        Err(AssemblyError::BoundaryOnInteriorCell {
            cell: c(2, 2),
            count: 1
        })
    );
}
