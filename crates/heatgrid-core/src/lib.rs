//! Core types for the heatgrid conduction solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other heatgrid crate: cell indices and
//! unknown names, the eight neighbour directions, grid spacing, material
//! constants, boundary conditions, and the sparse [`LinearExpr`] that
//! per-cell energy balances are written in.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod direction;
pub mod error;
pub mod expr;
pub mod geometry;
pub mod id;
pub mod material;

pub use boundary::{BoundaryCondition, BoundaryKind};
pub use direction::Direction;
pub use error::PropertyError;
pub use expr::LinearExpr;
pub use geometry::{Position, Spacing};
pub use id::CellIndex;
pub use material::Material;
