//! Heatgrid: steady-state 2D heat conduction on structured grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all heatgrid sub-crates and adds [`ConductionModel`], which wires them
//! together: build a grid → attach boundary conditions (and optionally
//! remove cells or override equations) → assemble one control-volume
//! energy balance per cell → solve → write temperatures back.
//!
//! # Quick start
//!
//! ```rust
//! use heatgrid::prelude::*;
//!
//! // A 4×3 plate, bottom held at 20 °C, top cooled by air at 20 °C.
//! let config = ModelConfig::new(4, 3, Spacing::uniform(0.1));
//! let mut model = ConductionModel::with_material(config, Material::new(15.0, 0.0)).unwrap();
//! for col in 0..4 {
//!     model
//!         .add_boundary_condition(CellIndex::new(0, col), BoundaryCondition::ConstantTemperature { value: 20.0 })
//!         .unwrap();
//! }
//! for col in 1..3 {
//!     model
//!         .add_boundary_condition(
//!             CellIndex::new(2, col),
//!             BoundaryCondition::Convection { coefficient: 5.0, ambient: 20.0 },
//!         )
//!         .unwrap();
//! }
//!
//! let solution = model.solve().unwrap();
//! assert_eq!(solution.len(), 12);
//! let top = model.temperature(CellIndex::new(2, 1)).unwrap().unwrap();
//! assert!((top - 20.0).abs() < 1e-9);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `heatgrid-core` | Indices, directions, materials, boundary conditions, `LinearExpr` |
//! | [`grid`] | `heatgrid-grid` | The cell arena and adjacency maintenance |
//! | [`assembly`] | `heatgrid-assembly` | Quadrants, stencils, exposed area, per-cell equations |
//! | [`solver`] | `heatgrid-solver` | Linear system, matrix form, dense LU |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary types (`heatgrid-core`).
pub use heatgrid_core as types;

/// Cell storage and adjacency (`heatgrid-grid`).
pub use heatgrid_grid as grid;

/// Equation assembly (`heatgrid-assembly`).
///
/// [`assembly::cell_equation`] is the per-cell entry point;
/// [`assembly::assemble`] covers the whole grid.
pub use heatgrid_assembly as assembly;

/// Linear system and direct solve (`heatgrid-solver`).
pub use heatgrid_solver as solver;

pub mod config;
pub mod error;
pub mod model;

pub use config::{ConfigError, ModelConfig};
pub use error::{Error, Result};
pub use model::ConductionModel;

/// Common imports for typical heatgrid usage.
///
/// ```rust
/// use heatgrid::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use heatgrid_core::{
        BoundaryCondition, BoundaryKind, CellIndex, Direction, LinearExpr, Material, Position,
        Spacing,
    };

    // Grid
    pub use heatgrid_grid::{Cell, Grid};

    // Assembly and solve
    pub use heatgrid_assembly::Assembly;
    pub use heatgrid_solver::{MatrixForm, Solution, SolverConfig, SolverStrategy};

    // Matrix types used by `MatrixForm`
    pub use nalgebra::{DMatrix, DVector};

    // Errors
    pub use heatgrid_assembly::AssemblyError;
    pub use heatgrid_grid::GridError;
    pub use heatgrid_solver::SolveError;

    // Model
    pub use crate::{ConductionModel, ConfigError, Error, ModelConfig};
}
