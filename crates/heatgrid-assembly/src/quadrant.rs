//! The four unit rectangles that can surround a cell.

use heatgrid_core::{CellIndex, Direction};
use heatgrid_grid::{Grid, GridError};

/// One of the four rectangles diagonally adjacent to a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Bounded by `left`, `up` and `left_up`.
    LeftUp,
    /// Bounded by `right`, `up` and `right_up`.
    RightUp,
    /// Bounded by `left`, `down` and `left_down`.
    LeftDown,
    /// Bounded by `right`, `down` and `right_down`.
    RightDown,
}

impl Quadrant {
    /// All quadrants in evaluation order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::LeftUp,
        Quadrant::RightUp,
        Quadrant::LeftDown,
        Quadrant::RightDown,
    ];

    /// The orthogonal neighbour along the x-axis.
    pub const fn horizontal(self) -> Direction {
        match self {
            Quadrant::LeftUp | Quadrant::LeftDown => Direction::Left,
            Quadrant::RightUp | Quadrant::RightDown => Direction::Right,
        }
    }

    /// The orthogonal neighbour along the y-axis.
    pub const fn vertical(self) -> Direction {
        match self {
            Quadrant::LeftUp | Quadrant::RightUp => Direction::Up,
            Quadrant::LeftDown | Quadrant::RightDown => Direction::Down,
        }
    }

    /// The diagonal neighbour that closes the rectangle.
    pub const fn diagonal(self) -> Direction {
        match self {
            Quadrant::LeftUp => Direction::LeftUp,
            Quadrant::RightUp => Direction::RightUp,
            Quadrant::LeftDown => Direction::LeftDown,
            Quadrant::RightDown => Direction::RightDown,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Quadrant::LeftUp => 0b0001,
            Quadrant::RightUp => 0b0010,
            Quadrant::LeftDown => 0b0100,
            Quadrant::RightDown => 0b1000,
        }
    }
}

/// The set of complete quadrants around one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct QuadrantSet(u8);

impl QuadrantSet {
    /// No quadrants.
    pub const EMPTY: QuadrantSet = QuadrantSet(0);
    /// All four quadrants.
    pub const FULL: QuadrantSet = QuadrantSet(0b1111);

    /// Complete quadrants of the cell at `index`.
    ///
    /// A quadrant is complete only when both orthogonal neighbours and the
    /// diagonal neighbour resolve to occupied cells. The diagonal never
    /// conducts; it only gates completeness.
    pub fn of(grid: &Grid, index: CellIndex) -> Result<Self, GridError> {
        grid.cell(index)?;
        let present = |dir| grid.neighbor(index, dir).is_some();
        let mut set = Self::EMPTY;
        for q in Quadrant::ALL {
            if present(q.horizontal()) && present(q.vertical()) && present(q.diagonal()) {
                set.insert(q);
            }
        }
        Ok(set)
    }

    /// Add `q` to the set.
    pub fn insert(&mut self, q: Quadrant) {
        self.0 |= q.bit();
    }

    /// Whether `q` is complete.
    pub fn contains(&self, q: Quadrant) -> bool {
        self.0 & q.bit() != 0
    }

    /// Number of complete quadrants (0–4).
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether no quadrant is complete.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Complete quadrants in [`Quadrant::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = Quadrant> + '_ {
        Quadrant::ALL.into_iter().filter(|q| self.contains(*q))
    }
}

impl FromIterator<Quadrant> for QuadrantSet {
    fn from_iter<I: IntoIterator<Item = Quadrant>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for q in iter {
            set.insert(q);
        }
        set
    }
}
