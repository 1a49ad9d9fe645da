//! The ordered system of per-cell equations and its matrix form.

use heatgrid_assembly::Assembly;
use heatgrid_core::{CellIndex, LinearExpr};
use indexmap::IndexSet;
use nalgebra::{DMatrix, DVector};

use crate::error::SolveError;

/// Unknowns and their governing equations, index-aligned.
///
/// Equation `i` governs unknown `i`; the same index becomes row `i` and
/// column `i` of the matrix form.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearSystem {
    unknowns: IndexSet<CellIndex>,
    equations: Vec<LinearExpr>,
}

impl LinearSystem {
    /// Build a system from parallel lists.
    pub fn new(unknowns: Vec<CellIndex>, equations: Vec<LinearExpr>) -> Result<Self, SolveError> {
        if unknowns.len() != equations.len() {
            return Err(SolveError::DimensionMismatch {
                expected: unknowns.len(),
                actual: equations.len(),
            });
        }
        let mut set = IndexSet::with_capacity(unknowns.len());
        for cell in unknowns {
            if !set.insert(cell) {
                return Err(SolveError::DuplicateUnknown { cell });
            }
        }
        Ok(Self {
            unknowns: set,
            equations,
        })
    }

    /// Ordered unknowns.
    pub fn unknowns(&self) -> impl ExactSizeIterator<Item = CellIndex> + '_ {
        self.unknowns.iter().copied()
    }

    /// Equations, aligned with [`unknowns`](Self::unknowns).
    pub fn equations(&self) -> &[LinearExpr] {
        &self.equations
    }

    /// Number of unknowns.
    pub fn len(&self) -> usize {
        self.unknowns.len()
    }

    /// Whether there are no unknowns.
    pub fn is_empty(&self) -> bool {
        self.unknowns.is_empty()
    }

    /// Column (and row) index of `cell`.
    pub fn column_of(&self, cell: CellIndex) -> Option<usize> {
        self.unknowns.get_index_of(&cell)
    }

    /// Separate coefficients from constants: `A·x = b` with
    /// `A[i][j]` the coefficient of unknown `j` in equation `i` and
    /// `b[i] = −constant_i`.
    pub fn to_matrix(&self) -> Result<MatrixForm, SolveError> {
        let n = self.len();
        let mut a = DMatrix::zeros(n, n);
        let mut b = DVector::zeros(n);
        for (row, equation) in self.equations.iter().enumerate() {
            for (cell, coefficient) in equation.terms() {
                let col = self
                    .column_of(cell)
                    .ok_or(SolveError::UnknownOutsideSystem { row, cell })?;
                a[(row, col)] += coefficient;
            }
            b[row] = -equation.constant_term();
        }
        Ok(MatrixForm {
            a,
            b,
            unknowns: self.unknowns().collect(),
        })
    }
}

impl From<Assembly> for LinearSystem {
    fn from(assembly: Assembly) -> Self {
        let (unknowns, equations) = assembly.into_parts();
        Self {
            unknowns: unknowns.into_iter().collect(),
            equations,
        }
    }
}

/// `A·x = b` together with the unknown each column stands for.
#[derive(Clone, Debug, PartialEq)]
pub struct MatrixForm {
    /// Coefficient matrix, `n × n`.
    pub a: DMatrix<f64>,
    /// Right-hand side, length `n`.
    pub b: DVector<f64>,
    /// Unknown for each row and column.
    pub unknowns: Vec<CellIndex>,
}

impl MatrixForm {
    /// Number of unknowns.
    pub fn len(&self) -> usize {
        self.unknowns.len()
    }

    /// Whether the system is empty.
    pub fn is_empty(&self) -> bool {
        self.unknowns.is_empty()
    }

    /// Values fixed by their own row alone.
    ///
    /// Row `i` fixes unknown `i` when its only nonzero coefficient is the
    /// diagonal, as produced by a constant-temperature condition. The value
    /// is `b[i] / A[i][i]`, computed without touching any other row.
    pub fn fixed_values(&self) -> Vec<Option<f64>> {
        (0..self.len())
            .map(|i| {
                let row = self.a.row(i);
                let diag = row[i];
                let alone = row.iter().enumerate().all(|(j, v)| j == i || *v == 0.0);
                (diag != 0.0 && alone).then(|| self.b[i] / diag)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(r: u32, col: u32) -> CellIndex {
        CellIndex::new(r, col)
    }

    fn pair() -> LinearSystem {
        // T0 − 100 = 0
        // 10·T0 − 12·T1 + 5 = 0
        LinearSystem::new(
            vec![c(0, 0), c(1, 0)],
            vec![
                LinearExpr::unknown(c(0, 0)) - 100.0,
                LinearExpr::term(c(0, 0), 10.0) + LinearExpr::term(c(1, 0), -12.0) + 5.0,
            ],
        )
        .unwrap()
    }

    #[test]
    fn matrix_rows_follow_unknown_order() {
        let m = pair().to_matrix().unwrap();
        assert_eq!(m.a.shape(), (2, 2));
        assert_eq!(m.a[(0, 0)], 1.0);
        assert_eq!(m.a[(0, 1)], 0.0);
        assert_eq!(m.a[(1, 0)], 10.0);
        assert_eq!(m.a[(1, 1)], -12.0);
        assert_eq!(m.b[0], 100.0);
        assert_eq!(m.b[1], -5.0);
        assert_eq!(m.unknowns, vec![c(0, 0), c(1, 0)]);
    }

    #[test]
    fn fixed_rows_detected() {
        let m = pair().to_matrix().unwrap();
        assert_eq!(m.fixed_values(), vec![Some(100.0), None]);
    }

    #[test]
    fn scaled_fixed_row() {
        let s = LinearSystem::new(
            vec![c(0, 0)],
            vec![LinearExpr::term(c(0, 0), 4.0) - 10.0],
        )
        .unwrap();
        assert_eq!(s.to_matrix().unwrap().fixed_values(), vec![Some(2.5)]);
    }

    #[test]
    fn foreign_unknown_is_rejected() {
        let s = LinearSystem::new(
            vec![c(0, 0)],
            vec![LinearExpr::unknown(c(0, 0)) - LinearExpr::unknown(c(3, 3))],
        )
        .unwrap();
        assert_eq!(
            s.to_matrix(),
            Err(SolveError::UnknownOutsideSystem {
                row: 0,
                cell: c(3, 3)
            })
        );
    }

    #[test]
    fn construction_checks() {
        assert!(matches!(
            LinearSystem::new(vec![c(0, 0)], vec![]),
            Err(SolveError::DimensionMismatch {
                expected: 1,
                actual: 0
            })
        ));
        assert_eq!(
            LinearSystem::new(
                vec![c(0, 0), c(0, 0)],
                vec![LinearExpr::zero(), LinearExpr::zero()]
            ),
            Err(SolveError::DuplicateUnknown { cell: c(0, 0) })
        );
    }
}
