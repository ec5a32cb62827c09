//! Lattice-Surgery Slice Model
//!
//! This crate provides the data structures the lattice-surgery router reads:
//! a 2-D grid ("slice") holding surface-code patches, the logical faces those
//! patches expose, and the ancilla regions a route produces.
//!
//! # Core Components
//!
//! - **Cells**: [`Cell`] grid coordinates and the four [`Side`]s of a cell
//! - **Operators**: [`PauliOperator`] labelling the logical faces of a patch
//! - **Patches**: [`Patch`] made of [`PatchCell`]s, addressed by [`PatchId`]
//! - **Slice**: [`Slice`] occupancy grid with an optional per-cell cost model
//! - **Regions**: [`RoutingRegion`] ancilla path between two [`FaceAnchor`]s
//!
//! # Example: Two Square Patches
//!
//! ```rust
//! use lsqecc_patches::{Cell, Patch, PatchId, PauliOperator, Slice};
//!
//! let mut slice = Slice::new(3, 5);
//! slice.place_patch(Patch::basic_square(PatchId(0), Cell::new(1, 0))).unwrap();
//! slice.place_patch(Patch::basic_square(PatchId(1), Cell::new(1, 4))).unwrap();
//!
//! let p0 = slice.get_patch_by_id(PatchId(0)).unwrap();
//! assert_eq!(p0.faces(PauliOperator::Z).count(), 2);
//! assert!(slice.is_cell_free(Cell::new(1, 2)));
//! print!("{slice}");
//! ```

pub mod cell;
pub mod error;
pub mod patch;
pub mod pauli;
pub mod region;
pub mod slice;

pub use cell::{Cell, Side};
pub use error::{SliceError, SliceResult};
pub use patch::{CellBoundaries, Patch, PatchCell, PatchId};
pub use pauli::PauliOperator;
pub use region::{FaceAnchor, RoutingCell, RoutingRegion};
pub use slice::Slice;
