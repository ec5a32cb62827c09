//! Error types for the patches crate.

use crate::cell::Cell;
use crate::patch::PatchId;
use thiserror::Error;

/// Errors that can occur when building or querying a slice.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SliceError {
    /// Patch not found in slice.
    #[error("Patch {0} not found in slice")]
    PatchNotFound(PatchId),

    /// Cell lies outside the slice grid.
    #[error("Cell {cell} is outside the {rows}x{cols} slice")]
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Number of rows in the slice.
        rows: u32,
        /// Number of columns in the slice.
        cols: u32,
    },

    /// Cell is already covered by another patch.
    #[error("Cell {cell} is already occupied by patch {occupant}")]
    CellOccupied {
        /// The contested cell.
        cell: Cell,
        /// The patch currently covering it.
        occupant: PatchId,
    },

    /// A patch with the same id is already placed.
    #[error("Patch {0} is already placed in slice")]
    DuplicatePatch(PatchId),

    /// Patch has no cells.
    #[error("Patch {0} has no cells")]
    EmptyPatch(PatchId),

    /// String could not be parsed as a Pauli operator.
    #[error("Invalid Pauli operator '{0}'")]
    InvalidOperator(String),
}

/// Result type for slice operations.
pub type SliceResult<T> = Result<T, SliceError>;
