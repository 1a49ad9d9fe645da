//! Error types for building and solving the linear system.

use heatgrid_core::CellIndex;
use thiserror::Error;

/// The assembled system cannot be turned into temperatures.
///
/// Every variant points at a modelling mistake upstream (missing or
/// double-counted boundary conditions, a bad override, a disconnected
/// region) rather than a numerical accident, so none are retried.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SolveError {
    /// Matrix or vector shapes disagree.
    #[error("invalid matrix dimensions: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Required size.
        expected: usize,
        /// Size found.
        actual: usize,
    },
    /// The same unknown appears twice in the unknown list.
    #[error("unknown {cell} listed more than once")]
    DuplicateUnknown {
        /// The repeated unknown.
        cell: CellIndex,
    },
    /// The factorization hit a zero (or relatively negligible) pivot.
    #[error("singular matrix: pivot {pivot} vanished")]
    SingularMatrix {
        /// Elimination step at which the pivot vanished.
        pivot: usize,
    },
    /// An equation references an unknown that is not part of the system.
    #[error("equation {row} references {cell}, which is not an unknown of the system")]
    UnknownOutsideSystem {
        /// Equation (row) index.
        row: usize,
        /// The foreign unknown.
        cell: CellIndex,
    },
    /// The solve produced NaN or infinity.
    #[error("solution for {cell} is not finite")]
    NonFiniteSolution {
        /// First cell with a non-finite value.
        cell: CellIndex,
    },
    /// There is nothing to solve.
    #[error("the system has no unknowns")]
    EmptySystem,
    /// Solver configuration rejected by [`SolverConfig::validate`](crate::SolverConfig::validate).
    #[error("invalid solver configuration: {reason}")]
    InvalidConfig {
        /// What is wrong.
        reason: String,
    },
}
