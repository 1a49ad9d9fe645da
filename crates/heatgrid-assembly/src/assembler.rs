//! Per-cell equations and whole-grid assembly.

use std::fmt;

use heatgrid_core::{CellIndex, LinearExpr};
use heatgrid_grid::Grid;

use crate::error::AssemblyError;
use crate::exposure::QuadrantPattern;
use crate::stencil::Stencil;

/// Maximum number of boundary conditions a single cell may carry.
pub const MAX_BOUNDARY_CONDITIONS: usize = 2;

/// Derive the equation (`expression = 0`) governing the cell at `index`.
///
/// Precedence, highest first:
///
/// 1. A manual override is returned verbatim, whatever the topology or
///    attached conditions.
/// 2. More than [`MAX_BOUNDARY_CONDITIONS`] conditions, or any condition on
///    an interior cell, is an error.
/// 3. The first `ConstantTemperature` condition wins outright: the equation
///    becomes `T − value`, discarding conduction, generation and any other
///    condition.
/// 4. Otherwise conduction + generation, plus each condition's contribution
///    scaled by the exposed area (split evenly when there are two).
pub fn cell_equation(grid: &Grid, index: CellIndex) -> Result<LinearExpr, AssemblyError> {
    let cell = grid.cell(index)?;
    if let Some(equation) = cell.override_equation() {
        log::debug!("{index}: using manual override");
        return Ok(equation.clone());
    }

    let bcs = cell.boundary_conditions();
    if bcs.len() > MAX_BOUNDARY_CONDITIONS {
        return Err(AssemblyError::TooManyBoundaryConditions {
            cell: index,
            count: bcs.len(),
        });
    }

    let stencil = Stencil::derive(grid, index)?;
    let pattern = QuadrantPattern::classify(stencil.quadrants);
    if pattern == QuadrantPattern::Interior && !bcs.is_empty() {
        return Err(AssemblyError::BoundaryOnInteriorCell {
            cell: index,
            count: bcs.len(),
        });
    }

    if let Some(value) = bcs.iter().find_map(|bc| bc.fixed_temperature()) {
        if bcs.len() > 1 {
            log::warn!(
                "{index}: constant temperature {value} discards {} other boundary condition(s)",
                bcs.len() - 1
            );
        }
        return Ok(cell.unknown() - value);
    }

    let mut equation = stencil.balance();
    if bcs.is_empty() {
        return Ok(equation);
    }

    let area = pattern
        .exposed_area(cell.spacing())
        .ok_or(AssemblyError::NoExposedArea { cell: index })?;
    let share = area / bcs.len() as f64;
    for bc in bcs {
        equation += bc.contribution(index) * share;
    }
    log::debug!(
        "{index}: {:?} pattern, exposed area {area}, {} boundary condition(s)",
        pattern,
        bcs.len()
    );
    Ok(equation)
}

/// The ordered unknowns and equations of a whole grid.
///
/// Both lists follow the same row-major traversal, so `equations()[i]`
/// governs `unknowns()[i]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Assembly {
    unknowns: Vec<CellIndex>,
    equations: Vec<LinearExpr>,
}

impl Assembly {
    /// Unknowns in row-major order.
    pub fn unknowns(&self) -> &[CellIndex] {
        &self.unknowns
    }

    /// Equations, aligned with [`unknowns`](Self::unknowns).
    pub fn equations(&self) -> &[LinearExpr] {
        &self.equations
    }

    /// Number of unknowns (and equations).
    pub fn len(&self) -> usize {
        self.unknowns.len()
    }

    /// Whether the grid had no occupied cells.
    pub fn is_empty(&self) -> bool {
        self.unknowns.is_empty()
    }

    /// `(unknown, equation)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, &LinearExpr)> + '_ {
        self.unknowns.iter().copied().zip(self.equations.iter())
    }

    /// The equation governing `cell`, if it is part of the assembly.
    pub fn equation_for(&self, cell: CellIndex) -> Option<&LinearExpr> {
        self.iter().find(|(c, _)| *c == cell).map(|(_, e)| e)
    }

    /// Split into `(unknowns, equations)`.
    pub fn into_parts(self) -> (Vec<CellIndex>, Vec<LinearExpr>) {
        (self.unknowns, self.equations)
    }
}

impl fmt::Display for Assembly {
    /// One `T_x_y: expression = 0` line per cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (cell, equation) in self.iter() {
            writeln!(f, "{cell}: {equation} = 0")?;
        }
        Ok(())
    }
}

/// Assemble every occupied cell of `grid` in row-major order.
///
/// Unknowns and equations are produced by one traversal, which is what
/// keeps matrix rows aligned with matrix columns downstream.
pub fn assemble(grid: &Grid) -> Result<Assembly, AssemblyError> {
    let mut unknowns = Vec::with_capacity(grid.active_count());
    let mut equations = Vec::with_capacity(grid.active_count());
    for cell in grid.cells() {
        equations.push(cell_equation(grid, cell.index())?);
        unknowns.push(cell.index());
    }
    log::info!(
        "assembled {} equations on a {}x{} grid",
        equations.len(),
        grid.width(),
        grid.height()
    );
    Ok(Assembly {
        unknowns,
        equations,
    })
}
