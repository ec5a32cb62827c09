//! Router trait and graph search provider selection.

use lsqecc_patches::{PatchId, PauliOperator, RoutingRegion, Slice};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;
use crate::error::RouteResult;

/// Graph search strategy used to find ancilla paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphSearchProvider {
    /// General-purpose search from the `petgraph` crate.
    #[serde(alias = "boost")]
    Petgraph,
    /// Custom Dijkstra search over the slice grid.
    #[default]
    #[serde(alias = "djikstra")]
    Dijkstra,
    /// Custom A* search with a Manhattan-distance heuristic.
    AStar,
}

impl GraphSearchProvider {
    /// All providers.
    pub const ALL: [GraphSearchProvider; 3] = [
        GraphSearchProvider::Petgraph,
        GraphSearchProvider::Dijkstra,
        GraphSearchProvider::AStar,
    ];

    /// Whether this provider implements extended (EDPC) routing.
    pub fn supports_edpc(self) -> bool {
        !matches!(self, GraphSearchProvider::Petgraph)
    }
}

impl fmt::Display for GraphSearchProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GraphSearchProvider::Petgraph => "petgraph",
            GraphSearchProvider::Dijkstra => "dijkstra",
            GraphSearchProvider::AStar => "astar",
        };
        f.write_str(s)
    }
}

impl FromStr for GraphSearchProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "petgraph" | "boost" => Ok(GraphSearchProvider::Petgraph),
            "dijkstra" | "djikstra" => Ok(GraphSearchProvider::Dijkstra),
            "astar" | "a*" => Ok(GraphSearchProvider::AStar),
            other => Err(ConfigError::ValidationError(format!(
                "Unknown graph search provider: {other}"
            ))),
        }
    }
}

/// A router that finds ancilla regions between patch faces.
///
/// Routers are the capability the compiler's lowering stage consumes once
/// per lattice-surgery operation that needs ancilla space. Two
/// implementations exist: [`DirectRouter`](crate::DirectRouter), which
/// searches on every query, and [`CachedRouter`](crate::CachedRouter),
/// which memoizes results.
pub trait Router: Send + Sync {
    /// Get the name of this router.
    fn name(&self) -> &str;

    /// Find an ancilla region joining the `source_op` face of `source` to
    /// the `target_op` face of `target`.
    ///
    /// The slice is only read. Returns `Ok(None)` when no connecting path of
    /// free cells exists. Errors are limited to slice lookups, such as an
    /// unknown patch id.
    fn find_routing_ancilla(
        &self,
        slice: &Slice,
        source: PatchId,
        source_op: PauliOperator,
        target: PatchId,
        target_op: PauliOperator,
    ) -> RouteResult<Option<RoutingRegion>>;

    /// Select the search strategy for subsequent queries.
    fn set_graph_search_provider(&mut self, provider: GraphSearchProvider) -> RouteResult<()>;

    /// The active search strategy.
    fn graph_search_provider(&self) -> GraphSearchProvider;

    /// Enable extended (EDPC) routing.
    ///
    /// Fails with a configuration error when the router or its active
    /// provider cannot produce extended regions.
    fn set_edpc(&mut self) -> RouteResult<()>;

    /// Whether extended routing is enabled.
    fn edpc_enabled(&self) -> bool;
}
