//! Error types for grid construction and indexing.

use heatgrid_core::{CellIndex, PropertyError};
use thiserror::Error;

/// Errors arising from grid construction or cell access.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GridError {
    /// An index is outside the `rows × cols` lattice.
    #[error("cell ({row}, {col}) out of bounds: [0, {rows}) x [0, {cols})")]
    IndexOutOfBounds {
        /// Requested row.
        row: u32,
        /// Requested column.
        col: u32,
        /// Number of rows in the grid.
        rows: u32,
        /// Number of columns in the grid.
        cols: u32,
    },
    /// The slot is in bounds but has been vacated.
    #[error("cell {0} has been removed")]
    Vacant(CellIndex),
    /// Attempted to build a grid with zero cells.
    #[error("grid must have at least one cell")]
    EmptyGrid,
    /// A dimension exceeds the supported maximum.
    #[error("{name} = {value} exceeds maximum {max}")]
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The largest accepted size.
        max: u32,
    },
    /// Lattice spacing is not finite and positive.
    #[error("invalid spacing: {0}")]
    InvalidSpacing(#[from] PropertyError),
}
