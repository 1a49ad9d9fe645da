//! Full solve of the demonstration plate.

use heatgrid_assembly::assemble;
use heatgrid_core::CellIndex;
use heatgrid_solver::{solve, LinearSystem, SolveError, SolverConfig, SolverStrategy};
use heatgrid_test_utils::{demo_plate, demo_plate_unconstrained, PlateParams};

fn plate_system() -> LinearSystem {
    let grid = demo_plate(&PlateParams::default());
    LinearSystem::from(assemble(&grid).unwrap())
}

#[test]
fn every_cell_gets_a_finite_temperature() {
    let system = plate_system();
    let solution = solve(&system, &SolverConfig::default()).unwrap();
    assert_eq!(solution.len(), 28);
    assert!(solution.iter().all(|(_, t)| t.is_finite()));
    assert!(solution.max_residual(&system).unwrap() < 1e-8);
}

#[test]
fn bottom_row_is_exactly_fixed() {
    let solution = solve(&plate_system(), &SolverConfig::default()).unwrap();
    for col in 0..5 {
        assert_eq!(solution.get(CellIndex::new(0, col)), Some(100.0));
    }
}

#[test]
fn generation_heats_the_plate_above_the_base() {
    let solution = solve(&plate_system(), &SolverConfig::default()).unwrap();
    for (cell, t) in solution.iter() {
        if cell.row > 0 {
            assert!(t > 100.0, "{cell} = {t}");
        }
    }
}

#[test]
fn strategies_agree() {
    let system = plate_system();
    let partial = solve(&system, &SolverConfig::default()).unwrap();
    let full = solve(
        &system,
        &SolverConfig::with_strategy(SolverStrategy::FullPivotLu),
    )
    .unwrap();
    for (cell, t) in partial.iter() {
        let other = full.get(cell).unwrap();
        assert!((t - other).abs() < 1e-8, "{cell}: {t} vs {other}");
    }
}

#[test]
fn no_boundary_conditions_is_singular() {
    let params = PlateParams {
        generation: 0.0,
        ..PlateParams::default()
    };
    let grid = demo_plate_unconstrained(&params);
    let system = LinearSystem::from(assemble(&grid).unwrap());
    assert!(matches!(
        solve(&system, &SolverConfig::default()),
        Err(SolveError::SingularMatrix { .. })
    ));
}
