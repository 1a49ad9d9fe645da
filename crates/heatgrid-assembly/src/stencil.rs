//! Conduction and generation terms of a cell's energy balance.
//!
//! Each complete quadrant contributes a quarter of the control volume:
//! half-face conduction to its two orthogonal neighbours and a quarter of
//! the cell's volumetric generation. With spacing `(Δx, Δy)` and
//! conductivity `k` the conductances are
//!
//! - horizontal neighbour: `k · (Δy/2) / Δx`
//! - vertical neighbour: `k · (Δx/2) / Δy`
//!
//! An orthogonal neighbour shared by two complete quadrants therefore
//! conducts through a full face.

use heatgrid_core::{CellIndex, Direction, LinearExpr};
use heatgrid_grid::{Grid, GridError};

use crate::quadrant::QuadrantSet;

/// A half-face conduction path from the cell to one orthogonal neighbour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConductionLink {
    /// The neighbour at the other end.
    pub neighbor: CellIndex,
    /// Direction from the cell to the neighbour.
    pub direction: Direction,
    /// Conductance `k · (half perpendicular spacing) / (axial spacing)`.
    pub conductance: f64,
}

/// The quadrant-derived part of one cell's balance, before boundary terms.
#[derive(Clone, Debug, PartialEq)]
pub struct Stencil {
    /// The cell this stencil belongs to.
    pub cell: CellIndex,
    /// Complete quadrants around the cell.
    pub quadrants: QuadrantSet,
    /// One link per (complete quadrant, orthogonal direction) pair.
    pub links: Vec<ConductionLink>,
    /// Total generation `q̇ · ¼ΔxΔy` per complete quadrant.
    pub generation: f64,
}

impl Stencil {
    /// Derive the stencil of the cell at `index` from its neighbour topology.
    pub fn derive(grid: &Grid, index: CellIndex) -> Result<Self, GridError> {
        let cell = grid.cell(index)?;
        let quadrants = QuadrantSet::of(grid, index)?;
        let k = cell.conductivity();
        let spacing = cell.spacing();
        let (dx, dy) = (spacing.dx, spacing.dy);

        let mut links = Vec::with_capacity(quadrants.len() * 2);
        let mut generation = 0.0;
        for q in quadrants.iter() {
            for (direction, conductance) in [
                (q.horizontal(), k * (dy / 2.0) / dx),
                (q.vertical(), k * (dx / 2.0) / dy),
            ] {
                // Completeness already guarantees the neighbour resolves.
                let Some(neighbor) = grid.neighbor(index, direction) else {
                    continue;
                };
                links.push(ConductionLink {
                    neighbor: neighbor.index(),
                    direction,
                    conductance,
                });
            }
            generation += cell.generation() * 0.25 * dx * dy;
        }

        Ok(Self {
            cell: index,
            quadrants,
            links,
            generation,
        })
    }

    /// `Σ g · (T_neighbour − T_self)` as a linear expression.
    pub fn conduction(&self) -> LinearExpr {
        let mut expr = LinearExpr::zero();
        for link in &self.links {
            expr.add_term(link.neighbor, link.conductance);
            expr.add_term(self.cell, -link.conductance);
        }
        expr
    }

    /// Conduction plus generation: the whole balance of a cell without
    /// boundary conditions.
    pub fn balance(&self) -> LinearExpr {
        self.conduction() + self.generation
    }

    /// Net conducted heat for concrete temperatures.
    ///
    /// Each link is evaluated as a difference, so equal temperatures give
    /// exactly zero. Returns `None` if a temperature is missing.
    pub fn net_conduction(&self, lookup: impl Fn(CellIndex) -> Option<f64>) -> Option<f64> {
        let own = lookup(self.cell)?;
        let mut sum = 0.0;
        for link in &self.links {
            sum += link.conductance * (lookup(link.neighbor)? - own);
        }
        Some(sum)
    }
}
