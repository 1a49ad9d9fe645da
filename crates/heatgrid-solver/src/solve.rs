//! Direct solve of an assembled system.

use nalgebra::{DMatrix, DVector};

use crate::config::SolverConfig;
use crate::dense::{DenseLu, LinearSolver};
use crate::error::SolveError;
use crate::solution::Solution;
use crate::system::{LinearSystem, MatrixForm};

/// Solve `system` with a [`DenseLu`] built from `config`.
pub fn solve(system: &LinearSystem, config: &SolverConfig) -> Result<Solution, SolveError> {
    config.validate()?;
    solve_with(system, &DenseLu::new(config))
}

/// Solve `system` with an arbitrary [`LinearSolver`].
///
/// Rows that fix their unknown on their own (see
/// [`MatrixForm::fixed_values`]) are taken verbatim and moved to the
/// right-hand side of the remaining rows; only the rest goes through the
/// factorization. Fixed temperatures are therefore reproduced exactly.
pub fn solve_with<S>(system: &LinearSystem, solver: &S) -> Result<Solution, SolveError>
where
    S: LinearSolver + ?Sized,
{
    if system.is_empty() {
        return Err(SolveError::EmptySystem);
    }
    let form = system.to_matrix()?;
    let x = eliminate_and_solve(&form, solver)?;
    let solution = Solution::new(&form.unknowns, &x)?;
    if let Some((lo, hi)) = solution.range() {
        log::info!(
            "solved {} unknowns with {} (T in [{lo:.3}, {hi:.3}])",
            solution.len(),
            solver.name()
        );
    }
    Ok(solution)
}

fn eliminate_and_solve<S>(form: &MatrixForm, solver: &S) -> Result<DVector<f64>, SolveError>
where
    S: LinearSolver + ?Sized,
{
    let n = form.len();
    let fixed = form.fixed_values();
    let free: Vec<usize> = (0..n).filter(|&i| fixed[i].is_none()).collect();

    let mut x = DVector::zeros(n);
    for (i, value) in fixed.iter().enumerate() {
        if let Some(v) = value {
            x[i] = *v;
        }
    }
    log::debug!("{} fixed, {} free unknowns", n - free.len(), free.len());
    if free.is_empty() {
        return Ok(x);
    }

    let m = free.len();
    let mut a = DMatrix::zeros(m, m);
    let mut b = DVector::zeros(m);
    for (r, &i) in free.iter().enumerate() {
        let mut rhs = form.b[i];
        for (j, value) in fixed.iter().enumerate() {
            if let Some(v) = value {
                rhs -= form.a[(i, j)] * v;
            }
        }
        b[r] = rhs;
        for (c, &j) in free.iter().enumerate() {
            a[(r, c)] = form.a[(i, j)];
        }
    }

    let reduced = solver.solve(&a, &b)?;
    for (r, &i) in free.iter().enumerate() {
        x[i] = reduced[r];
    }
    Ok(x)
}
