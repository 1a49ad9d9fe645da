//! Reusable problem fixtures.
//!
//! - [`demo_plate`] — the chamfered 5-wide × 6-tall plate with a fixed
//!   bottom edge, convective top, heated right edge and two corner
//!   convection cells.
//! - [`demo_plate_unconstrained`] — the same geometry with no boundary
//!   conditions attached.

use heatgrid_core::{BoundaryCondition, CellIndex, Material, Spacing};
use heatgrid_grid::Grid;

use crate::uniform_grid;

/// Parameters of the demonstration plate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlateParams {
    pub width: u32,
    pub height: u32,
    pub spacing: Spacing,
    pub conductivity: f64,
    pub generation: f64,
    pub fixed_temperature: f64,
    pub convection_coefficient: f64,
    pub ambient: f64,
    pub flux: f64,
}

impl Default for PlateParams {
    fn default() -> Self {
        Self {
            width: 5,
            height: 6,
            spacing: Spacing::uniform(0.2),
            conductivity: 20.0,
            generation: 1.0e4,
            fixed_temperature: 100.0,
            convection_coefficient: 10.0,
            ambient: 30.0,
            flux: 10.0,
        }
    }
}

impl PlateParams {
    pub fn material(&self) -> Material {
        Material::new(self.conductivity, self.generation)
    }

    pub fn convection(&self) -> BoundaryCondition {
        BoundaryCondition::Convection {
            coefficient: self.convection_coefficient,
            ambient: self.ambient,
        }
    }

    pub fn top_row(&self) -> u32 {
        self.height - 1
    }

    pub fn right_col(&self) -> u32 {
        self.width - 1
    }
}

/// The plate geometry with both top corners removed and nothing attached.
pub fn demo_plate_unconstrained(params: &PlateParams) -> Grid {
    let mut grid = uniform_grid(
        params.width,
        params.height,
        params.spacing,
        params.material(),
    );
    for col in [0, params.right_col()] {
        let corner = CellIndex::new(params.top_row(), col);
        if let Err(e) = grid.remove(corner) {
            panic!("fixture corner {corner} not removable: {e}");
        }
    }
    grid
}

/// The fully constrained demonstration plate.
///
/// - bottom row: `ConstantTemperature(fixed_temperature)`
/// - top row, interior columns: convection
/// - top corners: removed
/// - right column below the top row: `Flux(flux)`
/// - `(top − 1, 0)` and `(top − 1, right)`: additional convection
pub fn demo_plate(params: &PlateParams) -> Grid {
    let mut grid = demo_plate_unconstrained(params);
    let attach = |grid: &mut Grid, row: u32, col: u32, bc: BoundaryCondition| {
        if let Err(e) = grid.add_boundary_condition(CellIndex::new(row, col), bc) {
            panic!("fixture boundary at ({row}, {col}) rejected: {e}");
        }
    };

    for col in 0..params.width {
        attach(
            &mut grid,
            0,
            col,
            BoundaryCondition::ConstantTemperature {
                value: params.fixed_temperature,
            },
        );
    }
    for col in 1..params.right_col() {
        attach(&mut grid, params.top_row(), col, params.convection());
    }
    for row in 0..params.top_row() {
        attach(
            &mut grid,
            row,
            params.right_col(),
            BoundaryCondition::Flux { value: params.flux },
        );
    }
    attach(&mut grid, params.top_row() - 1, 0, params.convection());
    attach(
        &mut grid,
        params.top_row() - 1,
        params.right_col(),
        params.convection(),
    );
    grid
}
