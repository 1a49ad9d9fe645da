//! Strongly-typed cell indices and the unknown-temperature names derived from them.

use std::fmt;

/// Identifies a grid slot by its integer `(row, col)` indices.
///
/// `row` indexes the y-axis and grows upward; `col` indexes the x-axis and
/// grows to the right. The index doubles as the cell's unknown-temperature
/// symbol: two independent assemblies of the same grid always produce
/// identically named unknowns because the name is derived from the indices
/// alone.
///
/// Ordering is row-major (`row` first, then `col`), which is the traversal
/// order used for both unknown and equation enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex {
    /// Row (y-axis) index.
    pub row: u32,
    /// Column (x-axis) index.
    pub col: u32,
}

impl CellIndex {
    /// Create an index from `(row, col)`.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Offset this index by `(d_row, d_col)`.
    ///
    /// Returns `None` if either component would become negative or overflow.
    /// Upper bounds are the grid's concern, not the index's.
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(Self { row, col })
    }

    /// Name of the unknown temperature for this cell: `T_<col>_<row>`
    /// (x-index first, then y-index).
    pub fn symbol(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T_{}_{}", self.col, self.row)
    }
}

impl From<(u32, u32)> for CellIndex {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_is_x_then_y() {
        assert_eq!(CellIndex::new(5, 2).symbol(), "T_2_5");
        assert_eq!(CellIndex::new(0, 0).to_string(), "T_0_0");
    }

    #[test]
    fn offset_rejects_negative() {
        let c = CellIndex::new(0, 3);
        assert_eq!(c.offset(-1, 0), None);
        assert_eq!(c.offset(1, -1), Some(CellIndex::new(1, 2)));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![
            CellIndex::new(1, 0),
            CellIndex::new(0, 2),
            CellIndex::new(0, 1),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                CellIndex::new(0, 1),
                CellIndex::new(0, 2),
                CellIndex::new(1, 0)
            ]
        );
    }
}
