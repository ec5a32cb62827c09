//! Occupancy grid for one compilation time step.

use rustc_hash::FxHashMap;
use std::fmt;

use crate::cell::Cell;
use crate::error::{SliceError, SliceResult};
use crate::patch::{Patch, PatchId};

/// The occupancy grid at one time step.
///
/// A slice records which cells are covered by which patch, and an optional
/// per-cell traversal cost used by the router. Cells not covered by any
/// patch are free.
#[derive(Debug, Clone)]
pub struct Slice {
    /// Number of rows in the grid.
    rows: u32,
    /// Number of columns in the grid.
    cols: u32,
    /// Patches in placement order.
    patches: Vec<Patch>,
    /// Map from covered cell to owning patch.
    occupancy: FxHashMap<Cell, PatchId>,
    /// Non-uniform cell costs. Cells missing from the map cost 1.
    costs: FxHashMap<Cell, u32>,
}

impl Slice {
    /// Create an empty slice of the given size.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            patches: vec![],
            occupancy: FxHashMap::default(),
            costs: FxHashMap::default(),
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Place a patch on the slice.
    ///
    /// Fails without modifying the slice if the patch is empty, reuses an
    /// existing id, or covers a cell that is out of bounds or occupied.
    pub fn place_patch(&mut self, patch: Patch) -> SliceResult<()> {
        if patch.cells.is_empty() {
            return Err(SliceError::EmptyPatch(patch.id));
        }
        if self.patches.iter().any(|p| p.id == patch.id) {
            return Err(SliceError::DuplicatePatch(patch.id));
        }
        for pc in &patch.cells {
            self.check_bounds(pc.cell)?;
            if let Some(&occupant) = self.occupancy.get(&pc.cell) {
                return Err(SliceError::CellOccupied {
                    cell: pc.cell,
                    occupant,
                });
            }
        }

        for pc in &patch.cells {
            self.occupancy.insert(pc.cell, patch.id);
        }
        self.patches.push(patch);
        Ok(())
    }

    /// Remove a patch, freeing its cells.
    pub fn remove_patch(&mut self, id: PatchId) -> SliceResult<Patch> {
        let idx = self
            .patches
            .iter()
            .position(|p| p.id == id)
            .ok_or(SliceError::PatchNotFound(id))?;
        let patch = self.patches.remove(idx);
        for pc in &patch.cells {
            self.occupancy.remove(&pc.cell);
        }
        Ok(patch)
    }

    /// Look up a patch by id.
    pub fn get_patch_by_id(&self, id: PatchId) -> SliceResult<&Patch> {
        self.patches
            .iter()
            .find(|p| p.id == id)
            .ok_or(SliceError::PatchNotFound(id))
    }

    /// Iterate over the placed patches.
    pub fn patches(&self) -> impl Iterator<Item = &Patch> {
        self.patches.iter()
    }

    /// The patch covering `cell`, if any.
    #[inline]
    pub fn patch_at(&self, cell: Cell) -> Option<PatchId> {
        self.occupancy.get(&cell).copied()
    }

    /// Check whether `cell` lies on the grid.
    #[inline]
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as u32) < self.rows
            && (cell.col as u32) < self.cols
    }

    /// Check whether `cell` is on the grid and not covered by a patch.
    #[inline]
    pub fn is_cell_free(&self, cell: Cell) -> bool {
        self.is_in_bounds(cell) && !self.occupancy.contains_key(&cell)
    }

    /// Free orthogonal neighbours of `cell`.
    pub fn free_neighbours(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        cell.neighbours().filter(|&n| self.is_cell_free(n))
    }

    /// Set the traversal cost of a cell. Costs are clamped to at least 1.
    pub fn set_cell_cost(&mut self, cell: Cell, cost: u32) -> SliceResult<()> {
        self.check_bounds(cell)?;
        self.costs.insert(cell, cost.max(1));
        Ok(())
    }

    /// Traversal cost of a cell.
    #[inline]
    pub fn cell_cost(&self, cell: Cell) -> u32 {
        self.costs.get(&cell).copied().unwrap_or(1)
    }

    /// Iterate over every cell on the grid in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols as i32;
        (0..self.rows as i32).flat_map(move |row| (0..cols).map(move |col| Cell::new(row, col)))
    }

    fn check_bounds(&self, cell: Cell) -> SliceResult<()> {
        if self.is_in_bounds(cell) {
            Ok(())
        } else {
            Err(SliceError::CellOutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows as i32 {
            for col in 0..self.cols as i32 {
                let glyph = match self.patch_at(Cell::new(row, col)) {
                    None => '.',
                    Some(PatchId(id)) => char::from_digit(id % 36, 36).unwrap_or('#'),
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
