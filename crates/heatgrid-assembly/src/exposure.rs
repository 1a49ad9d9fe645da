//! Effective boundary-exposed area from a cell's quadrant pattern.
//!
//! Boundary contributions are per unit area, so each one is scaled by the
//! length of cell surface the boundary acts on. That length follows from
//! which quadrants are complete:
//!
//! | complete | pattern                         | area          |
//! |----------|---------------------------------|---------------|
//! | 0        | isolated                        | undefined     |
//! | 1        | corner                          | `(Δx+Δy)/2`   |
//! | 2        | both left or both right         | `Δy`          |
//! | 2        | both up or both down            | `Δx`          |
//! | 2        | opposite corners                | `Δx+Δy`       |
//! | 3        | edge with one notch             | `(Δx+Δy)/2`   |
//! | 4        | interior                        | undefined     |

use heatgrid_core::Spacing;

use crate::quadrant::{Quadrant, QuadrantSet};

/// Classification of a [`QuadrantSet`] for area purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuadrantPattern {
    /// No complete quadrant.
    Isolated,
    /// One complete quadrant: an outer corner.
    Corner,
    /// Two quadrants on the same vertical side (left pair or right pair):
    /// the exposed face runs along the y-axis.
    VerticalEdge,
    /// Two quadrants on the same horizontal side (up pair or down pair):
    /// the exposed face runs along the x-axis.
    HorizontalEdge,
    /// Two diagonally opposite quadrants.
    Opposite,
    /// Three complete quadrants: an inner corner.
    Notch,
    /// All four quadrants: a strictly interior cell.
    Interior,
}

impl QuadrantPattern {
    /// Classify a quadrant set.
    pub fn classify(set: QuadrantSet) -> Self {
        use Quadrant::*;
        match set.len() {
            0 => Self::Isolated,
            1 => Self::Corner,
            2 => {
                let has = |q| set.contains(q);
                if (has(LeftUp) && has(LeftDown)) || (has(RightUp) && has(RightDown)) {
                    Self::VerticalEdge
                } else if (has(LeftUp) && has(RightUp)) || (has(LeftDown) && has(RightDown)) {
                    Self::HorizontalEdge
                } else {
                    Self::Opposite
                }
            }
            3 => Self::Notch,
            _ => Self::Interior,
        }
    }

    /// Exposed length a boundary condition acts on, or `None` when the
    /// pattern leaves no defined boundary surface.
    ///
    /// The `Opposite` area of `Δx+Δy` has no derivation behind it and is
    /// kept only for compatibility with existing models.
    pub fn exposed_area(self, spacing: Spacing) -> Option<f64> {
        let Spacing { dx, dy } = spacing;
        match self {
            Self::Isolated | Self::Interior => None,
            Self::Corner | Self::Notch => Some((dx + dy) / 2.0),
            Self::VerticalEdge => Some(dy),
            Self::HorizontalEdge => Some(dx),
            Self::Opposite => Some(dx + dy),
        }
    }
}
