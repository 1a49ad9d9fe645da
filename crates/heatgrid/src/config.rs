//! Model configuration and its validation.

use heatgrid_core::Spacing;
use heatgrid_grid::Grid;
use heatgrid_solver::SolverConfig;
use thiserror::Error;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`ModelConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Width or height is zero.
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
    },
    /// Width or height exceeds [`Grid::MAX_DIM`].
    #[error("{name} = {value} exceeds maximum {max}")]
    DimensionTooLarge {
        /// `"width"` or `"height"`.
        name: &'static str,
        /// The configured value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// A spacing component is NaN, infinite, zero, or negative.
    #[error("spacing {axis} must be finite and positive, got {value}")]
    InvalidSpacing {
        /// `"dx"` or `"dy"`.
        axis: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// Solver settings are invalid.
    #[error("invalid solver config: {reason}")]
    InvalidSolver {
        /// Description of the violated constraint.
        reason: String,
    },
}

// ── ModelConfig ────────────────────────────────────────────────────

/// Everything needed to build a [`ConductionModel`](crate::ConductionModel)
/// apart from the per-cell material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelConfig {
    /// Number of columns (x-axis).
    pub width: u32,
    /// Number of rows (y-axis).
    pub height: u32,
    /// Uniform lattice spacing.
    pub spacing: Spacing,
    /// Direct solver settings.
    pub solver: SolverConfig,
}

impl ModelConfig {
    /// A `width × height` grid with the default solver.
    pub fn new(width: u32, height: u32, spacing: Spacing) -> Self {
        Self {
            width,
            height,
            spacing,
            solver: SolverConfig::default(),
        }
    }

    /// Replace the solver settings.
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Non-empty lattice.
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        // 2. Each axis fits the grid's offset arithmetic.
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value > Grid::MAX_DIM {
                return Err(ConfigError::DimensionTooLarge {
                    name,
                    value,
                    max: Grid::MAX_DIM,
                });
            }
        }
        // 3. Spacing finite and positive.
        for (axis, value) in [("dx", self.spacing.dx), ("dy", self.spacing.dy)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidSpacing { axis, value });
            }
        }
        // 4. Solver settings.
        self.solver
            .validate()
            .map_err(|e| ConfigError::InvalidSolver {
                reason: e.to_string(),
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ModelConfig {
        ModelConfig::new(5, 6, Spacing::uniform(0.2))
    }

    #[test]
    fn default_plate_is_valid() {
        assert_eq!(base().validate(), Ok(()));
    }

    #[test]
    fn zero_dimension_rejected() {
        let cfg = ModelConfig { width: 0, ..base() };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::EmptyGrid {
                width: 0,
                height: 6
            })
        );
    }

    #[test]
    fn bad_spacing_rejected() {
        for (dx, dy, axis) in [(0.0, 0.2, "dx"), (0.2, -1.0, "dy"), (f64::NAN, 0.2, "dx")] {
            let cfg = ModelConfig {
                spacing: Spacing::new(dx, dy),
                ..base()
            };
            assert!(matches!(
                cfg.validate(),
                Err(ConfigError::InvalidSpacing { axis: a, .. }) if a == axis
            ));
        }
    }

    #[test]
    fn bad_solver_rejected() {
        let cfg = base().with_solver(SolverConfig::default().pivot_tolerance(-1.0));
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidSolver { .. })));
    }
}
