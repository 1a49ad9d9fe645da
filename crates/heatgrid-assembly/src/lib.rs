//! Control-volume equation assembly for heatgrid.
//!
//! Turns each occupied [`Cell`](heatgrid_grid::Cell) of a
//! [`Grid`](heatgrid_grid::Grid) into one linear energy-balance equation
//! (`expression = 0`) in the temperatures of the cell and its orthogonal
//! neighbours.
//!
//! The pipeline per cell is:
//!
//! 1. [`QuadrantSet::of`] finds which of the four surrounding rectangles
//!    are fully occupied.
//! 2. [`Stencil::derive`] turns those quadrants into half-face conduction
//!    links and a generation term.
//! 3. [`QuadrantPattern`] maps the quadrant layout to the exposed boundary
//!    length that boundary conditions are scaled by.
//! 4. [`cell_equation`] combines the above with the cell's boundary
//!    conditions or manual override.
//!
//! [`assemble`] runs this over the whole grid in row-major order.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod assembler;
pub mod error;
pub mod exposure;
pub mod quadrant;
pub mod stencil;

pub use assembler::{assemble, cell_equation, Assembly, MAX_BOUNDARY_CONDITIONS};
pub use error::AssemblyError;
pub use exposure::QuadrantPattern;
pub use quadrant::{Quadrant, QuadrantSet};
pub use stencil::{ConductionLink, Stencil};
