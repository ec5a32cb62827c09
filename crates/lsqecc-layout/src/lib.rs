//! Lattice-Surgery Ancilla Routing
//!
//! This crate finds ancilla regions for lattice-surgery operations: given a
//! [`Slice`](lsqecc_patches::Slice) holding surface-code patches, it finds a
//! connected path of free cells from a face of a source patch to a face of a
//! target patch, each face selected by a Pauli operator.
//!
//! # Architecture
//!
//! ```text
//!        Compiler lowering stage
//!                 │
//!                 ▼
//!        ┌─────────────────┐
//!        │  dyn Router     │ ◄── RouterConfig (router kind, provider, EDPC)
//!        └─────────────────┘
//!            │          │
//!            │          ▼
//!            │   CachedRouter ── memo: PathIdentifier → RoutingRegion
//!            │          │ miss
//!            ▼          ▼
//!           DirectRouter
//!                 │
//!                 ├── Petgraph  (petgraph::algo::astar on an explicit graph)
//!                 ├── Dijkstra  (best-first over the implicit grid)
//!                 └── AStar     (best-first + Manhattan heuristic)
//! ```
//!
//! # Example: Routing Between Two Patches
//!
//! ```rust
//! use lsqecc_layout::{CachedRouter, Router};
//! use lsqecc_patches::{Cell, Patch, PatchId, PauliOperator, Slice};
//!
//! let mut slice = Slice::new(3, 5);
//! slice.place_patch(Patch::basic_square(PatchId(0), Cell::new(1, 0))).unwrap();
//! slice.place_patch(Patch::basic_square(PatchId(1), Cell::new(1, 4))).unwrap();
//!
//! let router = CachedRouter::new();
//! let region = router
//!     .find_routing_ancilla(&slice, PatchId(0), PauliOperator::Z, PatchId(1), PauliOperator::Z)
//!     .unwrap()
//!     .expect("free corridor between the patches");
//!
//! assert_eq!(region.len(), 3);
//! assert!(region.contains(Cell::new(1, 2)));
//! ```
//!
//! # Extended Routing (EDPC)
//!
//! [`DirectRouter`] with a custom provider can be switched into extended
//! mode, where the ancilla region keeps one cell of clearance from every
//! patch other than the two being joined. The `petgraph` provider and the
//! [`CachedRouter`] reject it with [`RouteError::EdpcUnsupported`].
//!
//! ```rust
//! use lsqecc_layout::{DirectRouter, GraphSearchProvider, Router};
//!
//! let mut router = DirectRouter::with_provider(GraphSearchProvider::Petgraph);
//! assert!(router.set_edpc().is_err());
//!
//! router.set_graph_search_provider(GraphSearchProvider::AStar).unwrap();
//! router.set_edpc().unwrap();
//! assert!(router.edpc_enabled());
//! ```
//!
//! # Concurrency
//!
//! Queries are synchronous and take `&self`. The [`CachedRouter`] guards its
//! memo table with a mutex, released while a search runs. Searches have no
//! timeout; callers bound them if needed.

pub mod cached;
pub mod config;
pub mod direct;
pub mod error;
pub mod router;
pub mod search;

pub use cached::{CachedRouter, PathIdentifier};
pub use config::{ConfigError, RouterConfig, RouterKind};
pub use direct::DirectRouter;
pub use error::{RouteError, RouteResult};
pub use router::{GraphSearchProvider, Router};
