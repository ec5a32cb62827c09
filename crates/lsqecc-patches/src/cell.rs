//! Grid cells and cell sides.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A discrete coordinate on the slice grid.
///
/// Rows grow downward, so the [`Side::Top`] neighbour of `(r, c)` is
/// `(r - 1, c)`. Ordering is row-major.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Cell {
    /// Row index.
    pub row: i32,
    /// Column index.
    pub col: i32,
}

impl Cell {
    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell adjacent to this one across `side`.
    #[inline]
    pub fn neighbour(self, side: Side) -> Cell {
        match side {
            Side::Top => Cell::new(self.row - 1, self.col),
            Side::Bottom => Cell::new(self.row + 1, self.col),
            Side::Left => Cell::new(self.row, self.col - 1),
            Side::Right => Cell::new(self.row, self.col + 1),
        }
    }

    /// All four orthogonal neighbours, in [`Side::ALL`] order.
    pub fn neighbours(self) -> impl Iterator<Item = Cell> {
        Side::ALL.into_iter().map(move |side| self.neighbour(side))
    }

    /// Manhattan distance to another cell.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The side of `self` that faces `other`, if the two cells are
    /// orthogonally adjacent.
    pub fn side_towards(self, other: Cell) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|&side| self.neighbour(side) == other)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Cell::new(row, col)
    }
}

/// One of the four sides of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// All sides in a fixed order.
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// The side facing the opposite direction.
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        };
        f.write_str(name)
    }
}
