//! Structured 2D cell storage for heatgrid.
//!
//! A [`Grid`] is an arena of optional [`Cell`]s addressed by
//! [`CellIndex`](heatgrid_core::CellIndex). Every occupied cell carries an
//! 8-directional [`Neighbors`] map that the grid keeps bidirectionally
//! consistent: building and [`connect_neighbors`](Grid::connect_neighbors)
//! link every in-bounds occupied pair, and [`remove`](Grid::remove) scrubs
//! the reverse links of a vacated slot before emptying it.
//!
//! Neighbour lookups through [`Grid::neighbor`] additionally check slot
//! occupancy, so a link can never resolve to a vacated slot.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adjacency;
pub mod cell;
pub mod error;
pub mod grid;

pub use adjacency::Neighbors;
pub use cell::Cell;
pub use error::GridError;
pub use grid::Grid;
