//! Dense direct solvers.

use nalgebra::{DMatrix, DVector};

use crate::config::{SolverConfig, SolverStrategy};
use crate::error::SolveError;

/// A direct solver for square systems `A·x = b`.
pub trait LinearSolver {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Solve `A·x = b`.
    ///
    /// Fails on non-square or mismatched shapes and on singular `A`; it
    /// never returns an approximate answer for a singular system.
    fn solve(&self, a: &DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>, SolveError>;
}

/// LU factorization via nalgebra, with a relative pivot check.
///
/// Rows are scaled to unit max-abs before factorizing, so the pivot check
/// does not depend on how each equation happens to be scaled (a row built
/// from `k = 1e7` next to one built from `k = 1e-6`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DenseLu {
    strategy: SolverStrategy,
    pivot_tolerance: f64,
}

impl DenseLu {
    /// Solver for the given configuration.
    pub fn new(config: &SolverConfig) -> Self {
        Self {
            strategy: config.strategy,
            pivot_tolerance: config.pivot_tolerance,
        }
    }
}

impl Default for DenseLu {
    fn default() -> Self {
        Self::new(&SolverConfig::default())
    }
}

impl LinearSolver for DenseLu {
    fn name(&self) -> &'static str {
        self.strategy.name()
    }

    fn solve(&self, a: &DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>, SolveError> {
        check_shape(a, b)?;
        if a.nrows() == 0 {
            return Err(SolveError::EmptySystem);
        }
        let (a, b) = equilibrate_rows(a, b)?;
        let (pivots, x) = match self.strategy {
            SolverStrategy::PartialPivotLu => {
                let lu = a.lu();
                (lu.u().diagonal(), lu.solve(&b))
            }
            SolverStrategy::FullPivotLu => {
                let lu = a.full_piv_lu();
                (lu.u().diagonal(), lu.solve(&b))
            }
        };
        check_pivots(&pivots, self.pivot_tolerance)?;
        x.ok_or(SolveError::SingularMatrix {
            pivot: pivots.len() - 1,
        })
    }
}

fn check_shape(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<(), SolveError> {
    if a.nrows() != a.ncols() {
        return Err(SolveError::DimensionMismatch {
            expected: a.nrows(),
            actual: a.ncols(),
        });
    }
    if a.nrows() != b.len() {
        return Err(SolveError::DimensionMismatch {
            expected: a.nrows(),
            actual: b.len(),
        });
    }
    Ok(())
}

/// Divide each row of `[A | b]` by the largest magnitude in its row of `A`.
///
/// The solution is unchanged. A row of zeros is singular outright.
fn equilibrate_rows(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
) -> Result<(DMatrix<f64>, DVector<f64>), SolveError> {
    let mut a = a.clone();
    let mut b = b.clone();
    for i in 0..a.nrows() {
        let scale = a.row(i).amax();
        if scale == 0.0 || !scale.is_finite() {
            return Err(SolveError::SingularMatrix { pivot: i });
        }
        for v in a.row_mut(i).iter_mut() {
            *v /= scale;
        }
        b[i] /= scale;
    }
    Ok((a, b))
}

/// Reject a factorization whose pivots include a zero, a non-finite value,
/// or one at most `tolerance` times the largest pivot in magnitude.
fn check_pivots(pivots: &DVector<f64>, tolerance: f64) -> Result<(), SolveError> {
    let largest = pivots.amax();
    for (i, p) in pivots.iter().enumerate() {
        if !p.is_finite() || *p == 0.0 || p.abs() <= tolerance * largest {
            log::debug!("pivot {i} = {p:e} against largest {largest:e}");
            return Err(SolveError::SingularMatrix { pivot: i });
        }
    }
    Ok(())
}
