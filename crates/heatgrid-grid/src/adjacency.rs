//! Per-cell neighbour maps and lattice offset helpers.

use heatgrid_core::{CellIndex, Direction};

/// A cell's links to its eight lattice neighbours.
///
/// Links are stored as indices, never as references, so a map can outlive
/// the neighbour it names. The owning [`Grid`](crate::Grid) keeps the maps
/// symmetric: if `a.get(Right) == Some(b)` then `b.get(Left) == Some(a)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Neighbors {
    links: [Option<CellIndex>; 8],
}

impl Neighbors {
    /// The neighbour linked in direction `dir`, if any.
    pub fn get(&self, dir: Direction) -> Option<CellIndex> {
        self.links[dir.slot()]
    }

    /// Whether a neighbour is linked in direction `dir`.
    pub fn has(&self, dir: Direction) -> bool {
        self.get(dir).is_some()
    }

    pub(crate) fn set(&mut self, dir: Direction, neighbor: Option<CellIndex>) {
        self.links[dir.slot()] = neighbor;
    }

    pub(crate) fn clear(&mut self) {
        self.links = [None; 8];
    }

    /// All eight `(direction, link)` pairs in [`Direction::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, Option<CellIndex>)> + '_ {
        Direction::ALL.iter().map(|d| (*d, self.get(*d)))
    }

    /// Linked neighbours only.
    pub fn linked(&self) -> impl Iterator<Item = (Direction, CellIndex)> + '_ {
        self.iter().filter_map(|(d, n)| n.map(|n| (d, n)))
    }

    /// Number of linked neighbours (0–8).
    pub fn count(&self) -> usize {
        self.links.iter().filter(|n| n.is_some()).count()
    }

    /// Whether any link points at `target`.
    pub fn references(&self, target: CellIndex) -> bool {
        self.links.contains(&Some(target))
    }
}

/// Resolve the lattice neighbour of `index` in direction `dir`.
///
/// Returns `None` when the offset leaves `[0, rows) × [0, cols)`. Cells
/// outside the lattice are absent, not an error.
pub(crate) fn step(index: CellIndex, dir: Direction, rows: u32, cols: u32) -> Option<CellIndex> {
    let (dr, dc) = dir.offset();
    let n = index.offset(dr, dc)?;
    (n.row < rows && n.col < cols).then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(r: u32, col: u32) -> CellIndex {
        CellIndex::new(r, col)
    }

    #[test]
    fn step_interior_reaches_all_eight() {
        let n = Direction::ALL
            .iter()
            .filter_map(|d| step(c(2, 2), *d, 5, 5))
            .count();
        assert_eq!(n, 8);
    }

    #[test]
    fn step_corner_absorbs() {
        let found: Vec<_> = Direction::ALL
            .iter()
            .filter_map(|d| step(c(0, 0), *d, 5, 5))
            .collect();
        assert_eq!(found.len(), 3);
        assert!(found.contains(&c(1, 0)));
        assert!(found.contains(&c(0, 1)));
        assert!(found.contains(&c(1, 1)));
    }

    #[test]
    fn step_edge_has_five() {
        let n = Direction::ALL
            .iter()
            .filter_map(|d| step(c(0, 2), *d, 5, 5))
            .count();
        assert_eq!(n, 5);
    }

    #[test]
    fn up_increases_row() {
        assert_eq!(step(c(1, 1), Direction::Up, 5, 5), Some(c(2, 1)));
        assert_eq!(step(c(1, 1), Direction::RightDown, 5, 5), Some(c(0, 2)));
        assert_eq!(step(c(4, 4), Direction::RightUp, 5, 5), None);
    }

    #[test]
    fn neighbors_set_get_clear() {
        let mut n = Neighbors::default();
        n.set(Direction::Left, Some(c(0, 0)));
        n.set(Direction::RightUp, Some(c(1, 2)));
        assert_eq!(n.count(), 2);
        assert!(n.references(c(1, 2)));
        assert_eq!(n.get(Direction::Left), Some(c(0, 0)));
        n.clear();
        assert_eq!(n, Neighbors::default());
    }
}
