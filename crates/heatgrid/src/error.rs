//! Top-level error type.

use heatgrid_assembly::AssemblyError;
use heatgrid_core::PropertyError;
use heatgrid_grid::GridError;
use heatgrid_solver::SolveError;
use thiserror::Error;

use crate::config::ConfigError;

/// Any failure surfaced by [`ConductionModel`](crate::ConductionModel).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// The model configuration was rejected.
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    /// A material or boundary value was rejected.
    #[error("property: {0}")]
    Property(#[from] PropertyError),
    /// Grid construction or indexing failed.
    #[error("grid: {0}")]
    Grid(#[from] GridError),
    /// A cell could not be turned into an equation.
    #[error("assembly: {0}")]
    Assembly(#[from] AssemblyError),
    /// The linear system could not be solved.
    #[error("solve: {0}")]
    Solve(#[from] SolveError),
}

/// Result alias for model operations.
pub type Result<T> = std::result::Result<T, Error>;
