//! The end-to-end conduction model: build, constrain, assemble, solve.

use heatgrid_assembly::{assemble, Assembly};
use heatgrid_core::{BoundaryCondition, CellIndex, LinearExpr, Material, Position, Spacing};
use heatgrid_grid::{Cell, Grid};
use heatgrid_solver::{solve, LinearSystem, MatrixForm, Solution};

use crate::config::ModelConfig;
use crate::error::Result;

/// A grid plus the settings needed to solve it.
///
/// Typical flow: [`new`](Self::new) → [`remove`](Self::remove) /
/// [`add_boundary_condition`](Self::add_boundary_condition) /
/// [`set_override`](Self::set_override) → [`solve`](Self::solve).
/// [`assemble`](Self::assemble) and [`build_matrix`](Self::build_matrix)
/// expose the intermediate artefacts for inspection or rendering.
#[derive(Clone, Debug)]
pub struct ConductionModel {
    config: ModelConfig,
    grid: Grid,
}

impl ConductionModel {
    /// Validate `config` and build its grid, asking `factory` for each
    /// cell's material.
    pub fn new(
        config: ModelConfig,
        factory: impl FnMut(Position, Spacing) -> Material,
    ) -> Result<Self> {
        config.validate()?;
        let grid = Grid::build(config.width, config.height, config.spacing, factory)?;
        log::info!(
            "built {}x{} grid, spacing ({}, {})",
            config.width,
            config.height,
            config.spacing.dx,
            config.spacing.dy
        );
        Ok(Self { config, grid })
    }

    /// Build with the same material everywhere.
    pub fn with_material(config: ModelConfig, material: Material) -> Result<Self> {
        Self::new(config, |_, _| material)
    }

    /// The configuration the model was built from.
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Read-only grid access.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for edits not covered by the helpers below.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Occupied cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.grid.cells()
    }

    /// Vacate a cell, scrubbing its neighbours' links.
    pub fn remove(&mut self, index: CellIndex) -> Result<Option<Cell>> {
        Ok(self.grid.remove(index)?)
    }

    /// Attach a boundary condition.
    pub fn add_boundary_condition(&mut self, index: CellIndex, bc: BoundaryCondition) -> Result<()> {
        Ok(self.grid.add_boundary_condition(index, bc)?)
    }

    /// Replace a cell's derived equation with `equation = 0`.
    pub fn set_override(&mut self, index: CellIndex, equation: LinearExpr) -> Result<()> {
        Ok(self.grid.set_override(index, equation)?)
    }

    /// Drop a cell's boundary conditions and override.
    pub fn clear_constraints(&mut self, index: CellIndex) -> Result<()> {
        Ok(self.grid.clear_constraints(index)?)
    }

    /// Solved temperature of a cell, `None` before the first solve.
    pub fn temperature(&self, index: CellIndex) -> Result<Option<f64>> {
        Ok(self.grid.cell(index)?.temperature())
    }

    /// Unknowns and equations in row-major order.
    pub fn assemble(&self) -> Result<Assembly> {
        Ok(assemble(&self.grid)?)
    }

    /// The assembled equations as a [`LinearSystem`].
    pub fn linear_system(&self) -> Result<LinearSystem> {
        Ok(LinearSystem::from(self.assemble()?))
    }

    /// `A`, `b`, and the unknown for each row.
    pub fn build_matrix(&self) -> Result<MatrixForm> {
        Ok(self.linear_system()?.to_matrix()?)
    }

    /// `T_x_y: expression = 0`, one line per cell.
    pub fn equation_listing(&self) -> Result<String> {
        Ok(self.assemble()?.to_string())
    }

    /// Assemble, solve, and write every temperature back onto its cell.
    ///
    /// On error the grid's temperatures are left untouched.
    pub fn solve(&mut self) -> Result<Solution> {
        let system = self.linear_system()?;
        let solution = solve(&system, &self.config.solver)?;
        solution.apply_to(&mut self.grid)?;
        if let Some(residual) = solution.max_residual(&system) {
            log::info!("max equation residual {residual:e}");
        }
        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use heatgrid_assembly::AssemblyError;

    fn c(r: u32, col: u32) -> CellIndex {
        CellIndex::new(r, col)
    }

    fn strip() -> ConductionModel {
        // 3 wide, 2 tall: bottom at 0, top at 30.
        let cfg = ModelConfig::new(3, 2, Spacing::uniform(1.0));
        let mut m = ConductionModel::with_material(cfg, Material::new(2.0, 0.0)).unwrap();
        for col in 0..3 {
            m.add_boundary_condition(c(0, col), BoundaryCondition::ConstantTemperature { value: 0.0 })
                .unwrap();
            m.add_boundary_condition(c(1, col), BoundaryCondition::ConstantTemperature { value: 30.0 })
                .unwrap();
        }
        m
    }

    #[test]
    fn invalid_config_fails_before_building() {
        let cfg = ModelConfig::new(0, 2, Spacing::uniform(1.0));
        assert!(matches!(
            ConductionModel::with_material(cfg, Material::default()),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn factory_sees_positions() {
        let cfg = ModelConfig::new(2, 2, Spacing::new(0.5, 2.0));
        let m = ConductionModel::new(cfg, |p, _| Material::new(1.0 + p.x, p.y)).unwrap();
        let cell = m.grid().cell(c(1, 1)).unwrap();
        assert_eq!(cell.conductivity(), 1.5);
        assert_eq!(cell.generation(), 2.0);
    }

    #[test]
    fn solve_writes_back() {
        let mut m = strip();
        assert_eq!(m.temperature(c(1, 1)).unwrap(), None);
        let s = m.solve().unwrap();
        assert_eq!(s.len(), 6);
        assert_eq!(m.temperature(c(1, 1)).unwrap(), Some(30.0));
        assert_eq!(m.temperature(c(0, 2)).unwrap(), Some(0.0));
    }

    #[test]
    fn matrix_matches_assembly() {
        let m = strip();
        let a = m.assemble().unwrap();
        let form = m.build_matrix().unwrap();
        assert_eq!(form.unknowns.as_slice(), a.unknowns());
        assert_eq!(form.a.shape(), (6, 6));
    }

    #[test]
    fn failed_solve_leaves_temperatures_unset() {
        let mut m = strip();
        m.add_boundary_condition(c(0, 0), BoundaryCondition::Flux { value: 1.0 })
            .unwrap();
        m.add_boundary_condition(c(0, 0), BoundaryCondition::Flux { value: 1.0 })
            .unwrap();
        assert!(matches!(
            m.solve(),
            Err(Error::Assembly(AssemblyError::TooManyBoundaryConditions { .. }))
        ));
        assert!(m.cells().all(|cell| cell.temperature().is_none()));
    }

    #[test]
    fn clearing_constraints_restores_conduction() {
        let mut m = strip();
        m.add_boundary_condition(c(0, 0), BoundaryCondition::Flux { value: 1.0 })
            .unwrap();
        m.add_boundary_condition(c(0, 0), BoundaryCondition::Flux { value: 1.0 })
            .unwrap();
        m.set_override(c(0, 2), LinearExpr::unknown(c(0, 2)) - 5.0)
            .unwrap();
        assert!(m.solve().is_err());

        m.clear_constraints(c(0, 0)).unwrap();
        m.clear_constraints(c(0, 2)).unwrap();
        let corner = m.grid().cell(c(0, 2)).unwrap();
        assert!(corner.boundary_conditions().is_empty());
        assert!(corner.override_equation().is_none());
        // Each freed corner conducts equally to a cell at 0 and one at 30.
        m.solve().unwrap();
        for cell in [c(0, 0), c(0, 2)] {
            let t = m.temperature(cell).unwrap().unwrap();
            assert!((t - 15.0).abs() < 1e-9, "{cell}: {t}");
        }
    }

    #[test]
    fn clearing_a_vacant_cell_fails() {
        let mut m = strip();
        m.remove(c(0, 0)).unwrap();
        assert!(matches!(m.clear_constraints(c(0, 0)), Err(Error::Grid(_))));
    }

    #[test]
    fn listing_has_one_line_per_cell() {
        let listing = strip().equation_listing().unwrap();
        assert_eq!(listing.lines().count(), 6);
        assert!(listing.starts_with("T_0_0: T_0_0 = 0\n"));
        assert!(listing.contains("T_2_1: T_2_1 - 30 = 0"));
    }
}
