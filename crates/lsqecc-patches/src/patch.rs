//! Patches and their logical faces.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cell::{Cell, Side};
use crate::pauli::PauliOperator;

/// Opaque identifier for a patch placed within a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PatchId(pub u32);

impl fmt::Display for PatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

impl From<u32> for PatchId {
    fn from(id: u32) -> Self {
        PatchId(id)
    }
}

/// Operator exposed on each side of a patch cell.
///
/// `None` marks a side with no logical face: an edge shared with another
/// cell of the same patch, or an inactive boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellBoundaries {
    pub top: Option<PauliOperator>,
    pub bottom: Option<PauliOperator>,
    pub left: Option<PauliOperator>,
    pub right: Option<PauliOperator>,
}

impl CellBoundaries {
    /// Boundaries of the standard square patch: X faces on top and bottom,
    /// Z faces on left and right.
    pub fn square() -> Self {
        Self {
            top: Some(PauliOperator::X),
            bottom: Some(PauliOperator::X),
            left: Some(PauliOperator::Z),
            right: Some(PauliOperator::Z),
        }
    }

    /// Operator on a given side.
    #[inline]
    pub fn get(&self, side: Side) -> Option<PauliOperator> {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Set the operator on a given side.
    pub fn set(&mut self, side: Side, op: Option<PauliOperator>) {
        match side {
            Side::Top => self.top = op,
            Side::Bottom => self.bottom = op,
            Side::Left => self.left = op,
            Side::Right => self.right = op,
        }
    }
}

/// A single grid cell belonging to a patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatchCell {
    /// Position on the grid.
    pub cell: Cell,
    /// Logical faces exposed by this cell.
    pub boundaries: CellBoundaries,
}

/// A surface-code patch occupying one or more grid cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    /// Identifier of the patch.
    pub id: PatchId,
    /// Cells covered by the patch. The first cell is canonical.
    pub cells: Vec<PatchCell>,
}

impl Patch {
    /// Create a patch from its cells.
    pub fn new(id: PatchId, cells: Vec<PatchCell>) -> Self {
        Self { id, cells }
    }

    /// Create a single-cell square patch (see [`CellBoundaries::square`]).
    pub fn basic_square(id: PatchId, cell: Cell) -> Self {
        Self::new(
            id,
            vec![PatchCell {
                cell,
                boundaries: CellBoundaries::square(),
            }],
        )
    }

    /// Create a single-cell patch with explicit boundaries.
    pub fn single_cell(id: PatchId, cell: Cell, boundaries: CellBoundaries) -> Self {
        Self::new(id, vec![PatchCell { cell, boundaries }])
    }

    /// A representative cell of the patch.
    ///
    /// # Panics
    ///
    /// Panics if the patch has no cells. [`Slice::place_patch`] rejects such
    /// patches, so every patch obtained from a slice has at least one.
    ///
    /// [`Slice::place_patch`]: crate::Slice::place_patch
    pub fn a_cell(&self) -> Cell {
        self.cells[0].cell
    }

    /// Check whether the patch covers `cell`.
    pub fn covers(&self, cell: Cell) -> bool {
        self.cells.iter().any(|pc| pc.cell == cell)
    }

    /// Iterate over the `(cell, side)` pairs exposing `op`.
    pub fn faces(&self, op: PauliOperator) -> impl Iterator<Item = (Cell, Side)> + '_ {
        self.cells.iter().flat_map(move |pc| {
            Side::ALL
                .into_iter()
                .filter(move |&side| pc.boundaries.get(side) == Some(op))
                .map(move |side| (pc.cell, side))
        })
    }
}
