//! Benchmark profiles for heatgrid.
//!
//! - [`reference_profile`]: 20x20 plate (400 unknowns)
//! - [`stress_profile`]: 48x48 plate (2304 unknowns), where the dense
//!   factorization dominates
//! - [`square_plate`]: the underlying builder for any size

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use heatgrid_core::{BoundaryCondition, CellIndex, Material, Spacing};
use heatgrid_grid::{Grid, GridError};

/// Build an `n × n` plate with a fixed bottom edge, convective top edge
/// and heated right edge, with both top corners removed.
///
/// Plates smaller than 4x4 are returned fully occupied and unconstrained:
/// at `n == 3` the middle of the top edge would have no complete quadrant
/// once the corners go.
///
/// Material varies smoothly with position so conductances are not all equal.
pub fn square_plate(n: u32) -> Result<Grid, GridError> {
    let spacing = Spacing::uniform(1.0 / f64::from(n.max(1)));
    let mut grid = Grid::build(n, n, spacing, |p, _| {
        Material::new(15.0 + 10.0 * p.x, 5.0e3 * (1.0 + p.y))
    })?;
    if n < 4 {
        return Ok(grid);
    }
    let top = n - 1;
    let right = n - 1;
    grid.remove(CellIndex::new(top, 0))?;
    grid.remove(CellIndex::new(top, right))?;

    let convection = BoundaryCondition::Convection {
        coefficient: 25.0,
        ambient: 20.0,
    };
    for col in 0..n {
        grid.add_boundary_condition(
            CellIndex::new(0, col),
            BoundaryCondition::ConstantTemperature { value: 80.0 },
        )?;
    }
    for col in 1..right {
        grid.add_boundary_condition(CellIndex::new(top, col), convection)?;
    }
    for row in 1..top {
        grid.add_boundary_condition(
            CellIndex::new(row, right),
            BoundaryCondition::Flux { value: 500.0 },
        )?;
    }
    grid.add_boundary_condition(CellIndex::new(top - 1, 0), convection)?;
    grid.add_boundary_condition(CellIndex::new(top - 1, right), convection)?;
    Ok(grid)
}

/// 20x20 plate.
pub fn reference_profile() -> Result<Grid, GridError> {
    square_plate(20)
}

/// 48x48 plate.
pub fn stress_profile() -> Result<Grid, GridError> {
    square_plate(48)
}
