//! Solved temperatures keyed by cell.

use heatgrid_core::CellIndex;
use heatgrid_grid::{Grid, GridError};
use indexmap::IndexMap;
use nalgebra::DVector;

use crate::error::SolveError;
use crate::system::LinearSystem;

/// One temperature per unknown, in system order.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    temperatures: IndexMap<CellIndex, f64>,
}

impl Solution {
    /// Pair `values` with `unknowns`, rejecting non-finite entries.
    pub(crate) fn new(unknowns: &[CellIndex], values: &DVector<f64>) -> Result<Self, SolveError> {
        if unknowns.len() != values.len() {
            return Err(SolveError::DimensionMismatch {
                expected: unknowns.len(),
                actual: values.len(),
            });
        }
        let mut temperatures = IndexMap::with_capacity(unknowns.len());
        for (&cell, &value) in unknowns.iter().zip(values.iter()) {
            if !value.is_finite() {
                return Err(SolveError::NonFiniteSolution { cell });
            }
            temperatures.insert(cell, value);
        }
        Ok(Self { temperatures })
    }

    /// Temperature of `cell`, if it was an unknown.
    pub fn get(&self, cell: CellIndex) -> Option<f64> {
        self.temperatures.get(&cell).copied()
    }

    /// Number of solved cells.
    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    /// Whether nothing was solved.
    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }

    /// `(cell, temperature)` in system order.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, f64)> + '_ {
        self.temperatures.iter().map(|(c, t)| (*c, *t))
    }

    /// Lowest and highest temperature, or `None` when empty.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.temperatures.values().fold(None, |acc, &t| match acc {
            None => Some((t, t)),
            Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
        })
    }

    /// Write every temperature onto its originating cell.
    pub fn apply_to(&self, grid: &mut Grid) -> Result<(), GridError> {
        for (&cell, &t) in &self.temperatures {
            grid.set_temperature(cell, t)?;
        }
        Ok(())
    }

    /// Largest `|equation|` over the system when evaluated at this
    /// solution. `None` if an equation mentions an unsolved cell.
    pub fn max_residual(&self, system: &LinearSystem) -> Option<f64> {
        let mut worst: f64 = 0.0;
        for equation in system.equations() {
            let r = equation.evaluate(|cell| self.get(cell))?;
            worst = worst.max(r.abs());
        }
        Some(worst)
    }
}
