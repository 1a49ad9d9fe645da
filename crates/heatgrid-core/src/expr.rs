//! Sparse linear expressions over cell unknowns.
//!
//! Every per-cell energy balance is an affine expression
//! `Σ cᵢ·Tᵢ + c₀` that is implicitly set equal to zero. [`LinearExpr`]
//! stores the coefficients keyed by [`CellIndex`] plus the constant term,
//! which is all the matrix builder needs: row coefficients go into `A`,
//! the negated constant goes into `b`.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use indexmap::IndexMap;

use crate::id::CellIndex;

/// An affine combination of unknown cell temperatures.
///
/// Terms keep first-insertion order so that printed equations are stable
/// across runs. Terms whose coefficients cancel to zero are kept in the map
/// but are skipped by [`terms`](Self::terms) and by `Display`.
#[derive(Clone, Debug, Default)]
pub struct LinearExpr {
    coefficients: IndexMap<CellIndex, f64>,
    constant: f64,
}

impl LinearExpr {
    /// The zero expression.
    pub fn zero() -> Self {
        Self::default()
    }

    /// A constant with no unknowns.
    pub fn constant(value: f64) -> Self {
        Self {
            coefficients: IndexMap::new(),
            constant: value,
        }
    }

    /// The bare unknown `T` of `cell`.
    pub fn unknown(cell: CellIndex) -> Self {
        Self::term(cell, 1.0)
    }

    /// `coefficient · T(cell)`.
    pub fn term(cell: CellIndex, coefficient: f64) -> Self {
        let mut coefficients = IndexMap::with_capacity(1);
        coefficients.insert(cell, coefficient);
        Self {
            coefficients,
            constant: 0.0,
        }
    }

    /// Add `coefficient · T(cell)` in place.
    pub fn add_term(&mut self, cell: CellIndex, coefficient: f64) {
        *self.coefficients.entry(cell).or_insert(0.0) += coefficient;
    }

    /// Add a constant in place.
    pub fn add_constant(&mut self, value: f64) {
        self.constant += value;
    }

    /// Coefficient of `T(cell)`, zero if the unknown does not appear.
    pub fn coefficient(&self, cell: CellIndex) -> f64 {
        self.coefficients.get(&cell).copied().unwrap_or(0.0)
    }

    /// The constant term `c₀`.
    pub fn constant_term(&self) -> f64 {
        self.constant
    }

    /// Non-zero `(cell, coefficient)` pairs in insertion order.
    pub fn terms(&self) -> impl Iterator<Item = (CellIndex, f64)> + '_ {
        self.coefficients
            .iter()
            .filter(|(_, c)| **c != 0.0)
            .map(|(cell, c)| (*cell, *c))
    }

    /// Unknowns with non-zero coefficients.
    pub fn unknowns(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.terms().map(|(cell, _)| cell)
    }

    /// `true` when every coefficient and the constant are zero.
    pub fn is_zero(&self) -> bool {
        self.constant == 0.0 && self.terms().next().is_none()
    }

    /// Evaluate the expression with temperatures from `lookup`.
    ///
    /// Returns `None` if any unknown with a non-zero coefficient has no value.
    pub fn evaluate(&self, lookup: impl Fn(CellIndex) -> Option<f64>) -> Option<f64> {
        let mut sum = self.constant;
        for (cell, c) in self.terms() {
            sum += c * lookup(cell)?;
        }
        Some(sum)
    }
}

impl PartialEq for LinearExpr {
    /// Structural equality after dropping zero coefficients.
    fn eq(&self, other: &Self) -> bool {
        if self.constant != other.constant {
            return false;
        }
        self.terms().all(|(cell, c)| other.coefficient(cell) == c)
            && other.terms().all(|(cell, c)| self.coefficient(cell) == c)
    }
}

impl From<f64> for LinearExpr {
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}

impl From<CellIndex> for LinearExpr {
    fn from(cell: CellIndex) -> Self {
        Self::unknown(cell)
    }
}

impl AddAssign<&LinearExpr> for LinearExpr {
    fn add_assign(&mut self, rhs: &LinearExpr) {
        for (cell, c) in &rhs.coefficients {
            self.add_term(*cell, *c);
        }
        self.constant += rhs.constant;
    }
}

impl AddAssign for LinearExpr {
    fn add_assign(&mut self, rhs: LinearExpr) {
        *self += &rhs;
    }
}

impl AddAssign<f64> for LinearExpr {
    fn add_assign(&mut self, rhs: f64) {
        self.constant += rhs;
    }
}

impl SubAssign<&LinearExpr> for LinearExpr {
    fn sub_assign(&mut self, rhs: &LinearExpr) {
        for (cell, c) in &rhs.coefficients {
            self.add_term(*cell, -*c);
        }
        self.constant -= rhs.constant;
    }
}

impl SubAssign for LinearExpr {
    fn sub_assign(&mut self, rhs: LinearExpr) {
        *self -= &rhs;
    }
}

impl SubAssign<f64> for LinearExpr {
    fn sub_assign(&mut self, rhs: f64) {
        self.constant -= rhs;
    }
}

impl MulAssign<f64> for LinearExpr {
    fn mul_assign(&mut self, rhs: f64) {
        for c in self.coefficients.values_mut() {
            *c *= rhs;
        }
        self.constant *= rhs;
    }
}

impl Add for LinearExpr {
    type Output = LinearExpr;

    fn add(mut self, rhs: LinearExpr) -> LinearExpr {
        self += &rhs;
        self
    }
}

impl Add<f64> for LinearExpr {
    type Output = LinearExpr;

    fn add(mut self, rhs: f64) -> LinearExpr {
        self.constant += rhs;
        self
    }
}

impl Sub for LinearExpr {
    type Output = LinearExpr;

    fn sub(mut self, rhs: LinearExpr) -> LinearExpr {
        self -= &rhs;
        self
    }
}

impl Sub<f64> for LinearExpr {
    type Output = LinearExpr;

    fn sub(mut self, rhs: f64) -> LinearExpr {
        self.constant -= rhs;
        self
    }
}

impl Mul<f64> for LinearExpr {
    type Output = LinearExpr;

    fn mul(mut self, rhs: f64) -> LinearExpr {
        self *= rhs;
        self
    }
}

impl Mul<LinearExpr> for f64 {
    type Output = LinearExpr;

    fn mul(self, rhs: LinearExpr) -> LinearExpr {
        rhs * self
    }
}

impl Neg for LinearExpr {
    type Output = LinearExpr;

    fn neg(self) -> LinearExpr {
        self * -1.0
    }
}

impl fmt::Display for LinearExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (cell, c) in self.terms() {
            let (sign, mag) = if c < 0.0 { ("-", -c) } else { ("+", c) };
            if first {
                if sign == "-" {
                    f.write_str("-")?;
                }
            } else {
                write!(f, " {sign} ")?;
            }
            if mag == 1.0 {
                write!(f, "{cell}")?;
            } else {
                write!(f, "{mag}*{cell}")?;
            }
            first = false;
        }
        if first {
            return write!(f, "{}", self.constant);
        }
        if self.constant != 0.0 {
            let (sign, mag) = if self.constant < 0.0 {
                ("-", -self.constant)
            } else {
                ("+", self.constant)
            };
            write!(f, " {sign} {mag}")?;
        }
        Ok(())
    }
}
