//! Solver selection and numerical tolerances.

use std::fmt;

use crate::error::SolveError;

/// Dense LU variant used for the direct solve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SolverStrategy {
    /// LU with row pivoting (default).
    #[default]
    PartialPivotLu,
    /// LU with row and column pivoting. Slower, more robust on badly
    /// scaled systems.
    FullPivotLu,
}

impl SolverStrategy {
    /// Parse from a short name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "lu" | "partial" | "partial-lu" => Some(Self::PartialPivotLu),
            "full" | "full-lu" => Some(Self::FullPivotLu),
            _ => None,
        }
    }

    /// Human-readable strategy name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PartialPivotLu => "partial-pivot LU",
            Self::FullPivotLu => "full-pivot LU",
        }
    }
}

impl fmt::Display for SolverStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for the direct solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    /// Factorization variant.
    pub strategy: SolverStrategy,
    /// After each row is scaled to unit max-abs, a pivot whose magnitude is
    /// at most `pivot_tolerance` times the largest pivot is treated as zero.
    /// Must be in `[0, 1)`.
    pub pivot_tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: SolverStrategy::PartialPivotLu,
            pivot_tolerance: 1e-12,
        }
    }
}

impl SolverConfig {
    /// Default tolerance with the given strategy.
    pub fn with_strategy(strategy: SolverStrategy) -> Self {
        Self {
            strategy,
            ..Default::default()
        }
    }

    /// Replace the pivot tolerance.
    pub fn pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.pivot_tolerance = tolerance;
        self
    }

    /// Check the configuration before use.
    pub fn validate(&self) -> Result<(), SolveError> {
        let tol = self.pivot_tolerance;
        if !tol.is_finite() || !(0.0..1.0).contains(&tol) {
            return Err(SolveError::InvalidConfig {
                reason: format!("pivot_tolerance must be in [0, 1), got {tol}"),
            });
        }
        Ok(())
    }
}
