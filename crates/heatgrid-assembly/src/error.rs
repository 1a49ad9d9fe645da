//! Error types for equation assembly.

use heatgrid_core::CellIndex;
use heatgrid_grid::GridError;
use thiserror::Error;

/// A cell's configuration cannot be turned into an equation.
///
/// These are structural modelling errors. Assembly is deterministic, so
/// retrying without changing the grid reproduces the same error.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AssemblyError {
    /// More than two boundary conditions on one cell.
    #[error("cell {cell} has {count} boundary conditions; at most 2 are supported")]
    TooManyBoundaryConditions {
        /// The offending cell.
        cell: CellIndex,
        /// Number of attached conditions.
        count: usize,
    },
    /// Boundary conditions on a cell with all four quadrants complete.
    #[error("cell {cell} is interior but has {count} boundary condition(s)")]
    BoundaryOnInteriorCell {
        /// The offending cell.
        cell: CellIndex,
        /// Number of attached conditions.
        count: usize,
    },
    /// A flux-type condition on a cell with no complete quadrant, where no
    /// exposed area is defined.
    #[error("cell {cell} has no complete quadrant, so its boundary area is undefined")]
    NoExposedArea {
        /// The offending cell.
        cell: CellIndex,
    },
    /// Grid lookup failed.
    #[error(transparent)]
    Grid(#[from] GridError),
}
