//! Boundary conditions attached to individual cells.

use std::fmt;

use crate::error::{self, PropertyError};
use crate::expr::LinearExpr;
use crate::id::CellIndex;

/// A boundary condition on one cell's exposed surface.
///
/// The set of variants is closed. Contributions are per unit of exposed
/// area; the assembler scales them by the area implied by the cell's
/// neighbour topology.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundaryCondition {
    /// Dirichlet: the cell's temperature is pinned to `value`.
    ///
    /// Replaces the cell's entire balance with `T − value = 0`.
    ConstantTemperature {
        /// Imposed temperature.
        value: f64,
    },
    /// Robin: heat exchange `h·(T∞ − T)` with an ambient fluid.
    Convection {
        /// Convection coefficient `h` (W/m²·K).
        coefficient: f64,
        /// Fluid temperature `T∞`.
        ambient: f64,
    },
    /// Neumann: a constant imposed flux `q''` into the domain (W/m²).
    Flux {
        /// Imposed flux.
        value: f64,
    },
}

/// Discriminant of a [`BoundaryCondition`], for grouping and display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    /// [`BoundaryCondition::ConstantTemperature`].
    ConstantTemperature,
    /// [`BoundaryCondition::Convection`].
    Convection,
    /// [`BoundaryCondition::Flux`].
    Flux,
}

impl BoundaryCondition {
    /// Fixed temperature, rejecting non-finite values.
    pub fn try_constant_temperature(value: f64) -> Result<Self, PropertyError> {
        Ok(Self::ConstantTemperature {
            value: error::finite("temperature", value)?,
        })
    }

    /// Convection, rejecting non-finite values.
    pub fn try_convection(coefficient: f64, ambient: f64) -> Result<Self, PropertyError> {
        Ok(Self::Convection {
            coefficient: error::finite("convection coefficient", coefficient)?,
            ambient: error::finite("ambient temperature", ambient)?,
        })
    }

    /// Imposed flux, rejecting non-finite values.
    pub fn try_flux(value: f64) -> Result<Self, PropertyError> {
        Ok(Self::Flux {
            value: error::finite("heat flux", value)?,
        })
    }

    /// The variant tag.
    pub fn kind(&self) -> BoundaryKind {
        match self {
            Self::ConstantTemperature { .. } => BoundaryKind::ConstantTemperature,
            Self::Convection { .. } => BoundaryKind::Convection,
            Self::Flux { .. } => BoundaryKind::Flux,
        }
    }

    /// The pinned temperature, if this is a Dirichlet condition.
    pub fn fixed_temperature(&self) -> Option<f64> {
        match self {
            Self::ConstantTemperature { value } => Some(*value),
            _ => None,
        }
    }

    /// Per-unit-area heat input to `cell`.
    ///
    /// Dirichlet conditions contribute nothing here; they replace the
    /// equation outright and are handled by the assembler.
    pub fn contribution(&self, cell: CellIndex) -> LinearExpr {
        match *self {
            Self::ConstantTemperature { .. } => LinearExpr::zero(),
            Self::Convection {
                coefficient,
                ambient,
            } => LinearExpr::term(cell, -coefficient) + coefficient * ambient,
            Self::Flux { value } => LinearExpr::constant(value),
        }
    }
}

impl fmt::Display for BoundaryCondition {
    /// Short label for renderers: `T=100`, `h=10, T∞=30`, `q''=10`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstantTemperature { value } => write!(f, "T={value}"),
            Self::Convection {
                coefficient,
                ambient,
            } => write!(f, "h={coefficient}, T∞={ambient}"),
            Self::Flux { value } => write!(f, "q''={value}"),
        }
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstantTemperature => write!(f, "constant temperature"),
            Self::Convection => write!(f, "convection"),
            Self::Flux => write!(f, "heat flux"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELL: CellIndex = CellIndex::new(4, 1);

    #[test]
    fn convection_pulls_toward_ambient() {
        let bc = BoundaryCondition::Convection {
            coefficient: 10.0,
            ambient: 30.0,
        };
        let e = bc.contribution(CELL);
        assert_eq!(e.coefficient(CELL), -10.0);
        assert_eq!(e.constant_term(), 300.0);
        // At ambient temperature there is no exchange.
        assert_eq!(e.evaluate(|_| Some(30.0)), Some(0.0));
    }

    #[test]
    fn flux_is_constant() {
        let e = BoundaryCondition::Flux { value: 10.0 }.contribution(CELL);
        assert_eq!(e, LinearExpr::constant(10.0));
    }

    #[test]
    fn constant_temperature_contributes_nothing() {
        let bc = BoundaryCondition::ConstantTemperature { value: 100.0 };
        assert!(bc.contribution(CELL).is_zero());
        assert_eq!(bc.fixed_temperature(), Some(100.0));
        assert_eq!(BoundaryCondition::Flux { value: 1.0 }.fixed_temperature(), None);
    }

    #[test]
    fn display_labels() {
        assert_eq!(
            BoundaryCondition::ConstantTemperature { value: 100.0 }.to_string(),
            "T=100"
        );
        assert_eq!(
            BoundaryCondition::Convection {
                coefficient: 10.0,
                ambient: 30.0
            }
            .to_string(),
            "h=10, T∞=30"
        );
        assert_eq!(BoundaryCondition::Flux { value: 10.0 }.to_string(), "q''=10");
    }

    #[test]
    fn checked_constructors() {
        assert!(BoundaryCondition::try_flux(f64::NAN).is_err());
        assert!(BoundaryCondition::try_convection(10.0, f64::INFINITY).is_err());
        assert_eq!(
            BoundaryCondition::try_constant_temperature(100.0).map(|b| b.kind()),
            Ok(BoundaryKind::ConstantTemperature)
        );
    }
}
