//! A single control volume and everything attached to it.

use heatgrid_core::{BoundaryCondition, CellIndex, LinearExpr, Material, Position, Spacing};
use smallvec::SmallVec;

use crate::adjacency::Neighbors;

/// One occupied grid position.
///
/// Cells are created once when the grid is built and never reconstructed.
/// Afterwards they are only mutated to attach boundary conditions, set an
/// override, or receive a solved temperature. Adjacency is owned by the
/// [`Grid`](crate::Grid) and is read-only from here.
#[derive(Clone, Debug)]
pub struct Cell {
    index: CellIndex,
    position: Position,
    spacing: Spacing,
    material: Material,
    pub(crate) neighbors: Neighbors,
    boundary_conditions: SmallVec<[BoundaryCondition; 2]>,
    override_equation: Option<LinearExpr>,
    temperature: Option<f64>,
}

impl Cell {
    pub(crate) fn new(index: CellIndex, spacing: Spacing, material: Material) -> Self {
        Self {
            index,
            position: spacing.position_of(index),
            spacing,
            material,
            neighbors: Neighbors::default(),
            boundary_conditions: SmallVec::new(),
            override_equation: None,
            temperature: None,
        }
    }

    /// Grid index, which is also this cell's unknown.
    pub fn index(&self) -> CellIndex {
        self.index
    }

    /// Physical position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Lattice spacing the cell was built with.
    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    /// Material constants.
    pub fn material(&self) -> Material {
        self.material
    }

    /// Conductivity `k`.
    pub fn conductivity(&self) -> f64 {
        self.material.conductivity
    }

    /// Volumetric generation `q̇`.
    pub fn generation(&self) -> f64 {
        self.material.generation
    }

    /// The unknown-temperature symbol, `T_<col>_<row>`.
    pub fn symbol(&self) -> String {
        self.index.symbol()
    }

    /// The cell's unknown as a linear expression.
    pub fn unknown(&self) -> LinearExpr {
        LinearExpr::unknown(self.index)
    }

    /// Neighbour links.
    pub fn neighbors(&self) -> &Neighbors {
        &self.neighbors
    }

    /// Attached boundary conditions, in attachment order.
    pub fn boundary_conditions(&self) -> &[BoundaryCondition] {
        &self.boundary_conditions
    }

    /// Attach a boundary condition.
    ///
    /// Any count is accepted here; the assembler rejects more than two.
    pub fn add_boundary_condition(&mut self, bc: BoundaryCondition) {
        self.boundary_conditions.push(bc);
    }

    /// Detach every boundary condition.
    pub fn clear_boundary_conditions(&mut self) {
        self.boundary_conditions.clear();
    }

    /// The manual override equation, if set.
    pub fn override_equation(&self) -> Option<&LinearExpr> {
        self.override_equation.as_ref()
    }

    /// Replace this cell's derived equation with `equation` (`= 0`).
    pub fn set_override(&mut self, equation: LinearExpr) {
        self.override_equation = Some(equation);
    }

    /// Remove the manual override.
    pub fn clear_override(&mut self) -> Option<LinearExpr> {
        self.override_equation.take()
    }

    /// Solved temperature, `None` until a solve writes it back.
    pub fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    /// Store a solved temperature.
    pub fn set_temperature(&mut self, value: f64) {
        self.temperature = Some(value);
    }
}
