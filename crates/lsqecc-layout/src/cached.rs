//! Router that memoizes routing regions.
//!
//! # Stale routes
//!
//! Cached regions are returned without re-checking the slice. If a patch is
//! later placed on a cell used by a cached route, a repeated query still
//! returns that route, running straight through the new patch. Callers must
//! not reuse a [`CachedRouter`] across slices whose occupancy changes along
//! previously cached routes, or must call [`CachedRouter::clear_cache`] when
//! it does.
//!
//! The router also assumes every patch is a single-cell square patch: the
//! cache key records one representative cell per patch.

use std::sync::{Mutex, MutexGuard};

use lsqecc_patches::{Cell, PatchId, PauliOperator, RoutingRegion, Slice};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::direct::DirectRouter;
use crate::error::{RouteError, RouteResult};
use crate::router::{GraphSearchProvider, Router};

/// Cache key for a routing query.
///
/// Keys are directional: a query from A to B and one from B to A are
/// distinct entries, since the two ends attach to different faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathIdentifier {
    pub source_cell: Cell,
    pub source_op: PauliOperator,
    pub target_cell: Cell,
    pub target_op: PauliOperator,
}

impl PathIdentifier {
    /// Build the key for a query against `slice`.
    pub fn for_query(
        slice: &Slice,
        source: PatchId,
        source_op: PauliOperator,
        target: PatchId,
        target_op: PauliOperator,
    ) -> RouteResult<Self> {
        Ok(Self {
            source_cell: slice.get_patch_by_id(source)?.a_cell(),
            source_op,
            target_cell: slice.get_patch_by_id(target)?.a_cell(),
            target_op,
        })
    }
}

/// Router that wraps a [`DirectRouter`] and memoizes its results.
///
/// Only successful searches are cached; a query that found no route is
/// searched again next time. Extended routing is not available.
#[derive(Debug, Default)]
pub struct CachedRouter {
    router_impl: DirectRouter,
    cached_routes: Mutex<FxHashMap<PathIdentifier, RoutingRegion>>,
}

impl CachedRouter {
    /// Create a cached router with the default provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cached router with the given provider.
    pub fn with_provider(provider: GraphSearchProvider) -> Self {
        Self {
            router_impl: DirectRouter::with_provider(provider),
            cached_routes: Mutex::default(),
        }
    }

    /// The wrapped router.
    pub fn inner(&self) -> &DirectRouter {
        &self.router_impl
    }

    /// Number of cached routes.
    pub fn cached_route_count(&self) -> usize {
        self.routes().len()
    }

    /// Look up a cached route without searching.
    pub fn cached(&self, key: &PathIdentifier) -> Option<RoutingRegion> {
        self.routes().get(key).cloned()
    }

    /// Drop every cached route.
    pub fn clear_cache(&self) {
        self.routes().clear();
    }

    fn routes(&self) -> MutexGuard<'_, FxHashMap<PathIdentifier, RoutingRegion>> {
        self.cached_routes
            .lock()
            .expect("route cache lock poisoned")
    }
}

impl Router for CachedRouter {
    fn name(&self) -> &str {
        "CachedRouter"
    }

    #[instrument(skip(self, slice))]
    fn find_routing_ancilla(
        &self,
        slice: &Slice,
        source: PatchId,
        source_op: PauliOperator,
        target: PatchId,
        target_op: PauliOperator,
    ) -> RouteResult<Option<RoutingRegion>> {
        let key = PathIdentifier::for_query(slice, source, source_op, target, target_op)?;

        if let Some(region) = self.cached(&key) {
            debug!("Route cache hit");
            return Ok(Some(region));
        }

        // The lock is released while searching.
        debug!("Route cache miss");
        let found = self.router_impl.find_routing_ancilla(
            slice, source, source_op, target, target_op,
        )?;

        Ok(found.map(|region| self.routes().entry(key).or_insert(region).clone()))
    }

    fn set_graph_search_provider(&mut self, provider: GraphSearchProvider) -> RouteResult<()> {
        self.router_impl.set_graph_search_provider(provider)
    }

    fn graph_search_provider(&self) -> GraphSearchProvider {
        self.router_impl.graph_search_provider()
    }

    fn set_edpc(&mut self) -> RouteResult<()> {
        Err(RouteError::EdpcUnsupported {
            router: self.name().to_string(),
            reason: "cached routes cannot be combined with extended routing".to_string(),
        })
    }

    fn edpc_enabled(&self) -> bool {
        false
    }
}
