//! The cell arena and its adjacency maintenance.

use heatgrid_core::{
    BoundaryCondition, CellIndex, Direction, LinearExpr, Material, Position, Spacing,
};

use crate::adjacency;
use crate::cell::Cell;
use crate::error::GridError;

/// A `height × width` lattice of optional cells with uniform spacing.
///
/// Slots are stored row-major: slot `row * width + col`. A vacated slot
/// models a non-rectangular domain (e.g. a chamfered corner).
#[derive(Clone, Debug)]
pub struct Grid {
    rows: u32,
    cols: u32,
    spacing: Spacing,
    slots: Vec<Option<Cell>>,
}

impl Grid {
    /// Maximum dimension size: neighbour offsets use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Build a fully occupied `width × height` grid and link all neighbours.
    ///
    /// `factory` is called once per cell in row-major order with the cell's
    /// physical position and the lattice spacing, and returns that cell's
    /// material, so callers can vary properties across the domain.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0,
    /// `Err(GridError::DimensionTooLarge)` if either exceeds [`Self::MAX_DIM`],
    /// or `Err(GridError::InvalidSpacing)` for a non-positive spacing.
    ///
    /// # Examples
    ///
    /// ```
    /// use heatgrid_core::{CellIndex, Direction, Material, Spacing};
    /// use heatgrid_grid::Grid;
    ///
    /// let grid = Grid::build(5, 6, Spacing::uniform(0.2), |_, _| Material::new(20.0, 1e4)).unwrap();
    /// assert_eq!(grid.active_count(), 30);
    ///
    /// // Corner cell (0, 0) has three neighbours: up, right and right-up.
    /// let corner = grid.cell(CellIndex::new(0, 0)).unwrap();
    /// assert_eq!(corner.neighbors().count(), 3);
    /// assert_eq!(corner.neighbors().get(Direction::Up), Some(CellIndex::new(1, 0)));
    /// ```
    pub fn build(
        width: u32,
        height: u32,
        spacing: Spacing,
        mut factory: impl FnMut(Position, Spacing) -> Material,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        let spacing = Spacing::try_new(spacing.dx, spacing.dy)?;

        let mut slots = Vec::with_capacity(width as usize * height as usize);
        for row in 0..height {
            for col in 0..width {
                let index = CellIndex::new(row, col);
                let material = factory(spacing.position_of(index), spacing);
                slots.push(Some(Cell::new(index, spacing, material)));
            }
        }

        let mut grid = Self {
            rows: height,
            cols: width,
            spacing,
            slots,
        };
        grid.connect_neighbors();
        Ok(grid)
    }

    /// Build a grid where every cell shares `material`.
    pub fn with_material(
        width: u32,
        height: u32,
        spacing: Spacing,
        material: Material,
    ) -> Result<Self, GridError> {
        Self::build(width, height, spacing, |_, _| material)
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.cols
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.rows
    }

    /// Lattice spacing.
    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    /// Number of occupied slots.
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Check that `index` is inside the lattice.
    pub fn check_bounds(&self, index: CellIndex) -> Result<(), GridError> {
        if index.row >= self.rows || index.col >= self.cols {
            return Err(GridError::IndexOutOfBounds {
                row: index.row,
                col: index.col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn slot(&self, index: CellIndex) -> usize {
        index.row as usize * self.cols as usize + index.col as usize
    }

    /// The slot at `index`: `Ok(None)` if vacated, `Err` if out of range.
    pub fn get(&self, index: CellIndex) -> Result<Option<&Cell>, GridError> {
        self.check_bounds(index)?;
        Ok(self.slots[self.slot(index)].as_ref())
    }

    /// The occupied cell at `index`.
    pub fn cell(&self, index: CellIndex) -> Result<&Cell, GridError> {
        self.get(index)?.ok_or(GridError::Vacant(index))
    }

    /// Mutable access to the occupied cell at `index`.
    pub fn cell_mut(&mut self, index: CellIndex) -> Result<&mut Cell, GridError> {
        self.check_bounds(index)?;
        let slot = self.slot(index);
        self.slots[slot].as_mut().ok_or(GridError::Vacant(index))
    }

    /// Whether `index` is in bounds and occupied.
    pub fn is_occupied(&self, index: CellIndex) -> bool {
        matches!(self.get(index), Ok(Some(_)))
    }

    /// The neighbour of `index` in direction `dir`.
    ///
    /// Follows the cell's link and then re-checks occupancy of the target
    /// slot, so a stale link can never yield a vacated cell.
    pub fn neighbor(&self, index: CellIndex, dir: Direction) -> Option<&Cell> {
        let target = self.cell(index).ok()?.neighbors().get(dir)?;
        self.get(target).ok().flatten()
    }

    /// Occupied cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Occupied cells in row-major order, mutably.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> + '_ {
        self.slots.iter_mut().filter_map(Option::as_mut)
    }

    /// Indices of occupied cells in row-major order.
    pub fn active_indices(&self) -> Vec<CellIndex> {
        self.cells().map(Cell::index).collect()
    }

    /// Rebuild every neighbour link from scratch.
    ///
    /// Clears all links, then links each occupied cell to every occupied
    /// in-bounds slot among its eight offsets. Running this twice on an
    /// unchanged grid yields identical maps.
    pub fn connect_neighbors(&mut self) {
        for cell in self.cells_mut() {
            cell.neighbors.clear();
        }
        let (rows, cols) = (self.rows, self.cols);
        for slot in 0..self.slots.len() {
            let Some(index) = self.slots[slot].as_ref().map(Cell::index) else {
                continue;
            };
            for dir in Direction::ALL {
                let link = adjacency::step(index, dir, rows, cols)
                    .filter(|n| self.slots[self.slot(*n)].is_some());
                if let Some(cell) = self.slots[slot].as_mut() {
                    cell.neighbors.set(dir, link);
                }
            }
        }
        log::trace!(
            "connected neighbours for {} cells on a {}x{} grid",
            self.active_count(),
            self.cols,
            self.rows
        );
    }

    /// Vacate the slot at `index`, returning the removed cell.
    ///
    /// Every neighbour's reverse link to `index` is cleared first, in all
    /// eight directions. Removing an already vacated slot returns `Ok(None)`.
    pub fn remove(&mut self, index: CellIndex) -> Result<Option<Cell>, GridError> {
        self.check_bounds(index)?;
        let slot = self.slot(index);
        if self.slots[slot].is_none() {
            return Ok(None);
        }
        for dir in Direction::ALL {
            let Some(n) = adjacency::step(index, dir, self.rows, self.cols) else {
                continue;
            };
            let n_slot = self.slot(n);
            if let Some(neighbor) = self.slots[n_slot].as_mut() {
                neighbor.neighbors.set(dir.opposite(), None);
            }
        }
        log::debug!("removed cell {index} ({}, {})", index.row, index.col);
        Ok(self.slots[slot].take())
    }

    /// Attach a boundary condition to the cell at `index`.
    pub fn add_boundary_condition(
        &mut self,
        index: CellIndex,
        bc: BoundaryCondition,
    ) -> Result<(), GridError> {
        self.cell_mut(index)?.add_boundary_condition(bc);
        Ok(())
    }

    /// Set a manual override equation on the cell at `index`.
    pub fn set_override(&mut self, index: CellIndex, equation: LinearExpr) -> Result<(), GridError> {
        self.cell_mut(index)?.set_override(equation);
        Ok(())
    }

    /// Detach every boundary condition and the override from the cell at
    /// `index`, returning it to a plain conduction cell.
    pub fn clear_constraints(&mut self, index: CellIndex) -> Result<(), GridError> {
        let cell = self.cell_mut(index)?;
        cell.clear_boundary_conditions();
        cell.clear_override();
        Ok(())
    }

    /// Store a solved temperature on the cell at `index`.
    pub fn set_temperature(&mut self, index: CellIndex, value: f64) -> Result<(), GridError> {
        self.cell_mut(index)?.set_temperature(value);
        Ok(())
    }

    /// Whether every link is mirrored by its reverse link and targets an
    /// occupied slot.
    pub fn is_adjacency_consistent(&self) -> bool {
        self.cells().all(|cell| {
            cell.neighbors().linked().all(|(dir, n)| {
                matches!(
                    self.get(n),
                    Ok(Some(other)) if other.neighbors().get(dir.opposite()) == Some(cell.index())
                )
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(r: u32, col: u32) -> CellIndex {
        CellIndex::new(r, col)
    }

    fn unit(width: u32, height: u32) -> Grid {
        Grid::with_material(width, height, Spacing::default(), Material::default()).unwrap()
    }

    #[test]
    fn build_links_interior_cell_fully() {
        let g = unit(5, 5);
        let cell = g.cell(c(2, 2)).unwrap();
        assert_eq!(cell.neighbors().count(), 8);
        assert_eq!(cell.neighbors().get(Direction::LeftDown), Some(c(1, 1)));
        assert!(g.is_adjacency_consistent());
    }

    #[test]
    fn factory_sees_positions_in_row_major_order() {
        let mut seen = Vec::new();
        let g = Grid::build(3, 2, Spacing::new(0.5, 2.0), |p, s| {
            seen.push((p.x, p.y));
            assert_eq!(s, Spacing::new(0.5, 2.0));
            Material::new(p.x, 0.0)
        })
        .unwrap();
        assert_eq!(
            seen,
            vec![(0.0, 0.0), (0.5, 0.0), (1.0, 0.0), (0.0, 2.0), (0.5, 2.0), (1.0, 2.0)]
        );
        assert_eq!(g.cell(c(1, 2)).unwrap().conductivity(), 1.0);
    }

    #[test]
    fn build_rejects_empty_and_bad_spacing() {
        assert_eq!(
            Grid::with_material(0, 3, Spacing::default(), Material::default()).unwrap_err(),
            GridError::EmptyGrid
        );
        assert!(matches!(
            Grid::with_material(3, 3, Spacing::new(0.0, 1.0), Material::default()),
            Err(GridError::InvalidSpacing(_))
        ));
    }

    #[test]
    fn out_of_range_is_an_error_not_absent() {
        let g = unit(5, 6);
        assert!(matches!(
            g.get(c(6, 0)),
            Err(GridError::IndexOutOfBounds { row: 6, rows: 6, .. })
        ));
        assert!(g.get(c(0, 5)).is_err());
        assert!(g.get(c(5, 4)).unwrap().is_some());
    }

    #[test]
    fn remove_scrubs_all_reverse_links() {
        let mut g = unit(5, 6);
        let removed = g.remove(c(2, 2)).unwrap();
        assert_eq!(removed.map(|cell| cell.index()), Some(c(2, 2)));
        assert!(g.cells().all(|cell| !cell.neighbors().references(c(2, 2))));
        assert!(g.is_adjacency_consistent());
        assert_eq!(g.active_count(), 29);
        assert_eq!(g.cell(c(2, 2)).unwrap_err(), GridError::Vacant(c(2, 2)));
    }

    #[test]
    fn remove_twice_is_a_no_op() {
        let mut g = unit(3, 3);
        assert!(g.remove(c(0, 0)).unwrap().is_some());
        assert!(g.remove(c(0, 0)).unwrap().is_none());
        assert!(g.remove(c(3, 0)).is_err());
    }

    #[test]
    fn neighbor_checks_occupancy() {
        let mut g = unit(3, 3);
        g.remove(c(1, 1)).unwrap();
        assert!(g.neighbor(c(0, 0), Direction::RightUp).is_none());
        assert_eq!(
            g.neighbor(c(0, 0), Direction::Up).map(Cell::index),
            Some(c(1, 0))
        );
    }

    #[test]
    fn reconnect_is_idempotent_after_removal() {
        let mut g = unit(4, 4);
        g.remove(c(3, 0)).unwrap();
        let before: Vec<_> = g.cells().map(|cell| *cell.neighbors()).collect();
        g.connect_neighbors();
        let once: Vec<_> = g.cells().map(|cell| *cell.neighbors()).collect();
        g.connect_neighbors();
        let twice: Vec<_> = g.cells().map(|cell| *cell.neighbors()).collect();
        assert_eq!(before, once);
        assert_eq!(once, twice);
    }

    #[test]
    fn mutation_helpers_reject_vacant_slots() {
        let mut g = unit(3, 3);
        g.remove(c(2, 2)).unwrap();
        let bc = BoundaryCondition::Flux { value: 1.0 };
        assert_eq!(
            g.add_boundary_condition(c(2, 2), bc),
            Err(GridError::Vacant(c(2, 2)))
        );
        g.add_boundary_condition(c(2, 1), bc).unwrap();
        g.set_temperature(c(2, 1), 42.0).unwrap();
        let cell = g.cell(c(2, 1)).unwrap();
        assert_eq!(cell.boundary_conditions(), &[bc]);
        assert_eq!(cell.temperature(), Some(42.0));
    }
}
