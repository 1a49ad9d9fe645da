//! Lattice spacing and physical positions.

use crate::error::{self, PropertyError};
use crate::id::CellIndex;

/// Uniform lattice spacing `(Δx, Δy)` in physical units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spacing {
    /// Distance between adjacent columns.
    pub dx: f64,
    /// Distance between adjacent rows.
    pub dy: f64,
}

impl Spacing {
    /// Create a spacing without validation.
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Create a spacing, rejecting non-finite or non-positive components.
    pub fn try_new(dx: f64, dy: f64) -> Result<Self, PropertyError> {
        Ok(Self {
            dx: error::positive("dx", dx)?,
            dy: error::positive("dy", dy)?,
        })
    }

    /// Equal spacing on both axes.
    pub const fn uniform(d: f64) -> Self {
        Self { dx: d, dy: d }
    }

    /// Area of one full control volume, `Δx·Δy`.
    pub fn cell_area(&self) -> f64 {
        self.dx * self.dy
    }

    /// Physical position of the lattice point at `index`.
    pub fn position_of(&self, index: CellIndex) -> Position {
        Position {
            x: f64::from(index.col) * self.dx,
            y: f64::from(index.row) * self.dy,
        }
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

/// Physical `(x, y)` coordinates of a lattice point.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Position {
    /// Horizontal coordinate (`col · Δx`).
    pub x: f64,
    /// Vertical coordinate (`row · Δy`).
    pub y: f64,
}
