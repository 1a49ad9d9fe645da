//! The eight neighbour directions of a square-lattice cell.

use std::fmt;

/// A direction from a cell to one of its eight lattice neighbours.
///
/// "Up" increases the row index, "right" increases the column index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// `row + 1`.
    Up,
    /// `row - 1`.
    Down,
    /// `col - 1`.
    Left,
    /// `col + 1`.
    Right,
    /// `row + 1`, `col - 1`.
    LeftUp,
    /// `row + 1`, `col + 1`.
    RightUp,
    /// `row - 1`, `col - 1`.
    LeftDown,
    /// `row - 1`, `col + 1`.
    RightDown,
}

impl Direction {
    /// All eight directions, cardinals first, in storage order.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::LeftUp,
        Direction::RightUp,
        Direction::LeftDown,
        Direction::RightDown,
    ];

    /// The four orthogonal directions.
    pub const CARDINAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Position of this direction in [`Direction::ALL`].
    pub const fn slot(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
            Direction::LeftUp => 4,
            Direction::RightUp => 5,
            Direction::LeftDown => 6,
            Direction::RightDown => 7,
        }
    }

    /// `(d_row, d_col)` offset for this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (1, 0),
            Direction::Down => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::LeftUp => (1, -1),
            Direction::RightUp => (1, 1),
            Direction::LeftDown => (-1, -1),
            Direction::RightDown => (-1, 1),
        }
    }

    /// The direction pointing back from the neighbour to this cell.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::LeftUp => Direction::RightDown,
            Direction::RightUp => Direction::LeftDown,
            Direction::LeftDown => Direction::RightUp,
            Direction::RightDown => Direction::LeftUp,
        }
    }

    /// Whether this is one of the four diagonal directions.
    pub const fn is_diagonal(self) -> bool {
        let (dr, dc) = self.offset();
        dr != 0 && dc != 0
    }

    /// Lower-case name, matching the neighbour-map keys renderers expect.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::LeftUp => "left_up",
            Direction::RightUp => "right_up",
            Direction::LeftDown => "left_down",
            Direction::RightDown => "right_down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
