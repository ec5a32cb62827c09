//! Routing regions: ancilla paths between two patch faces.

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, Side};
use crate::patch::PatchId;
use crate::pauli::PauliOperator;
use crate::slice::Slice;

/// The patch face a routing region attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceAnchor {
    /// Patch owning the face.
    pub patch: PatchId,
    /// Operator of the face.
    pub op: PauliOperator,
    /// Patch cell carrying the face.
    pub cell: Cell,
    /// Side of `cell` on which the face lies.
    pub side: Side,
}

impl FaceAnchor {
    /// The free cell directly across the face, where an ancilla path starts
    /// or ends.
    #[inline]
    pub fn entry_cell(&self) -> Cell {
        self.cell.neighbour(self.side)
    }
}

/// One ancilla cell of a routing region.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoutingCell {
    /// Position on the grid.
    pub cell: Cell,
    /// Sides joined to the neighbouring ancilla cell or patch face.
    pub connections: Vec<Side>,
}

/// A connected set of free cells joining a source face to a target face.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoutingRegion {
    /// Ancilla cells ordered from source to target.
    pub cells: Vec<RoutingCell>,
    /// Face the region starts from.
    pub source: FaceAnchor,
    /// Face the region ends on.
    pub target: FaceAnchor,
}

impl RoutingRegion {
    /// Build a region from an ordered path of cells.
    ///
    /// `path` must be non-empty, its first cell must be the entry cell of
    /// `source`, its last the entry cell of `target`, and consecutive cells
    /// must be orthogonally adjacent. Returns `None` otherwise.
    pub fn from_path(path: &[Cell], source: FaceAnchor, target: FaceAnchor) -> Option<Self> {
        let (&first, &last) = (path.first()?, path.last()?);
        if first != source.entry_cell() || last != target.entry_cell() {
            return None;
        }

        let mut cells = Vec::with_capacity(path.len());
        for (i, &cell) in path.iter().enumerate() {
            let mut connections = Vec::with_capacity(2);
            if i == 0 {
                connections.push(source.side.opposite());
            } else {
                connections.push(cell.side_towards(path[i - 1])?);
            }
            if i + 1 == path.len() {
                connections.push(target.side.opposite());
            } else {
                connections.push(cell.side_towards(path[i + 1])?);
            }
            cells.push(RoutingCell { cell, connections });
        }

        Some(Self {
            cells,
            source,
            target,
        })
    }

    /// Number of ancilla cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the region has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the ancilla cell positions from source to target.
    pub fn path(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().map(|rc| rc.cell)
    }

    /// Check whether the region uses `cell`.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.iter().any(|rc| rc.cell == cell)
    }

    /// Total traversal cost of the region under the slice's cost model.
    pub fn cost(&self, slice: &Slice) -> u64 {
        self.path().map(|c| u64::from(slice.cell_cost(c))).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(patch: u32, cell: Cell, side: Side) -> FaceAnchor {
        FaceAnchor {
            patch: PatchId(patch),
            op: PauliOperator::Z,
            cell,
            side,
        }
    }

    #[test]
    fn test_from_path_connections() {
        // p0 at (0,0), p1 at (0,3); path runs along row 0.
        let source = anchor(0, Cell::new(0, 0), Side::Right);
        let target = anchor(1, Cell::new(0, 3), Side::Left);
        let path = [Cell::new(0, 1), Cell::new(0, 2)];

        let region = RoutingRegion::from_path(&path, source, target).unwrap();
        assert_eq!(region.len(), 2);
        assert_eq!(region.cells[0].connections, vec![Side::Left, Side::Right]);
        assert_eq!(region.cells[1].connections, vec![Side::Left, Side::Right]);
        assert!(region.contains(Cell::new(0, 2)));
        assert!(!region.contains(Cell::new(0, 3)));
    }

    #[test]
    fn test_from_path_turning() {
        let source = anchor(0, Cell::new(0, 0), Side::Bottom);
        let target = anchor(1, Cell::new(0, 1), Side::Bottom);
        let path = [Cell::new(1, 0), Cell::new(1, 1)];

        let region = RoutingRegion::from_path(&path, source, target).unwrap();
        assert_eq!(region.cells[0].connections, vec![Side::Top, Side::Right]);
        assert_eq!(region.cells[1].connections, vec![Side::Left, Side::Top]);
    }

    #[test]
    fn test_from_path_rejects_bad_paths() {
        let source = anchor(0, Cell::new(0, 0), Side::Right);
        let target = anchor(1, Cell::new(0, 3), Side::Left);

        assert!(RoutingRegion::from_path(&[], source, target).is_none());
        // Gap between cells.
        assert!(
            RoutingRegion::from_path(&[Cell::new(0, 1), Cell::new(0, 3)], source, target)
                .is_none()
        );
        // Does not end at the target face.
        assert!(RoutingRegion::from_path(&[Cell::new(0, 1)], source, target).is_none());
    }

    #[test]
    fn test_cost_and_serde() {
        let mut slice = Slice::new(1, 4);
        slice.set_cell_cost(Cell::new(0, 2), 4).unwrap();

        let source = anchor(0, Cell::new(0, 0), Side::Right);
        let target = anchor(1, Cell::new(0, 3), Side::Left);
        let region =
            RoutingRegion::from_path(&[Cell::new(0, 1), Cell::new(0, 2)], source, target).unwrap();
        assert_eq!(region.cost(&slice), 5);

        let json = serde_json::to_string(&region).unwrap();
        let back: RoutingRegion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, region);
    }
}
