//! Graph search over the free cells of a slice.
//!
//! The search graph has one node per free cell, with edges between
//! orthogonally adjacent free cells. The cost of a path is the sum of the
//! slice's cell costs over the cells it uses. A path starts at a free cell
//! across one of the source patch's faces exposing the requested operator
//! (an "entry" cell) and ends at an entry cell of the target face.
//!
//! Three strategies share this problem definition:
//! - [`library`]: the general-purpose A* from `petgraph`, run on an explicit
//!   graph with a zero heuristic
//! - [`dijkstra`]: a best-first search over the implicit grid
//! - [`astar`]: the same engine guided by a Manhattan-distance heuristic
//!
//! In extended (EDPC) mode the custom strategies only use cells that keep one
//! cell of clearance from every patch other than the source and the target.

pub mod astar;
pub mod dijkstra;
pub mod library;

use lsqecc_patches::{Cell, FaceAnchor, Patch, PatchId, PauliOperator, RoutingRegion, Slice};
use tracing::trace;

use crate::router::GraphSearchProvider;

/// A single routing query, resolved against a slice.
pub struct SearchProblem<'a> {
    slice: &'a Slice,
    /// Source entry cells with the face each one attaches to.
    sources: Vec<(Cell, FaceAnchor)>,
    /// Target entry cells with the face each one attaches to.
    targets: Vec<(Cell, FaceAnchor)>,
    participants: [PatchId; 2],
    edpc: bool,
}

impl<'a> SearchProblem<'a> {
    /// Resolve the faces of `source` and `target` into entry cells.
    pub fn new(
        slice: &'a Slice,
        source: &Patch,
        source_op: PauliOperator,
        target: &Patch,
        target_op: PauliOperator,
        edpc: bool,
    ) -> Self {
        let mut problem = Self {
            slice,
            sources: vec![],
            targets: vec![],
            participants: [source.id, target.id],
            edpc,
        };
        problem.sources = problem.entries(source, source_op);
        problem.targets = problem.entries(target, target_op);
        problem
    }

    fn entries(&self, patch: &Patch, op: PauliOperator) -> Vec<(Cell, FaceAnchor)> {
        let mut entries: Vec<(Cell, FaceAnchor)> = vec![];
        for (cell, side) in patch.faces(op) {
            let anchor = FaceAnchor {
                patch: patch.id,
                op,
                cell,
                side,
            };
            let entry = anchor.entry_cell();
            if self.is_routable(entry) && !entries.iter().any(|(c, _)| *c == entry) {
                entries.push((entry, anchor));
            }
        }
        entries
    }

    /// The slice being routed on.
    #[inline]
    pub fn slice(&self) -> &'a Slice {
        self.slice
    }

    /// Whether extended routing constraints apply.
    #[inline]
    pub fn edpc(&self) -> bool {
        self.edpc
    }

    /// Source entry cells in face order.
    pub fn sources(&self) -> impl Iterator<Item = Cell> + '_ {
        self.sources.iter().map(|(c, _)| *c)
    }

    /// Target entry cells in face order.
    pub fn targets(&self) -> impl Iterator<Item = Cell> + '_ {
        self.targets.iter().map(|(c, _)| *c)
    }

    /// Check whether `cell` is a target entry cell.
    #[inline]
    pub fn is_target(&self, cell: Cell) -> bool {
        self.targets.iter().any(|(c, _)| *c == cell)
    }

    /// Check whether a route may use `cell`.
    pub fn is_routable(&self, cell: Cell) -> bool {
        self.slice.is_cell_free(cell) && (!self.edpc || self.has_clearance(cell))
    }

    /// No orthogonal neighbour is covered by a non-participating patch.
    fn has_clearance(&self, cell: Cell) -> bool {
        cell.neighbours().all(|n| {
            self.slice
                .patch_at(n)
                .is_none_or(|id| self.participants.contains(&id))
        })
    }

    /// Turn a path of entry-to-entry cells into a routing region.
    pub fn finish(&self, path: &[Cell]) -> Option<RoutingRegion> {
        let first = *path.first()?;
        let last = *path.last()?;
        let source = self.sources.iter().find(|(c, _)| *c == first)?.1;
        let target = self.targets.iter().find(|(c, _)| *c == last)?.1;
        RoutingRegion::from_path(path, source, target)
    }
}

/// Run the strategy selected by `provider` on `problem`.
pub fn run(provider: GraphSearchProvider, problem: &SearchProblem<'_>) -> Option<RoutingRegion> {
    if problem.sources.is_empty() || problem.targets.is_empty() {
        trace!(
            sources = problem.sources.len(),
            targets = problem.targets.len(),
            "No free entry cells next to the requested faces"
        );
        return None;
    }

    let path = match provider {
        GraphSearchProvider::Petgraph => library::shortest_path(problem),
        GraphSearchProvider::Dijkstra => dijkstra::shortest_path(problem),
        GraphSearchProvider::AStar => astar::shortest_path(problem),
    }?;
    problem.finish(&path)
}
