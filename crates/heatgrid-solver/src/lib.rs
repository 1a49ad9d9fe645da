//! Linear system construction and direct solve for heatgrid.
//!
//! [`LinearSystem`] holds the unknowns and equations produced by
//! assembly, index-aligned. [`LinearSystem::to_matrix`] separates them into
//! `A·x = b` ([`MatrixForm`]), and [`solve`] runs a dense LU through the
//! [`LinearSolver`] seam, returning a [`Solution`] that can be written back
//! onto the grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod dense;
pub mod error;
pub mod solution;
pub mod solve;
pub mod system;

pub use config::{SolverConfig, SolverStrategy};
pub use dense::{DenseLu, LinearSolver};
pub use error::SolveError;
pub use solution::Solution;
pub use solve::{solve, solve_with};
pub use system::{LinearSystem, MatrixForm};
