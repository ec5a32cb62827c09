//! Router that runs a graph search on every query.

use std::sync::atomic::{AtomicU64, Ordering};

use lsqecc_patches::{PatchId, PauliOperator, RoutingRegion, Slice};
use tracing::{debug, instrument};

use crate::error::{RouteError, RouteResult};
use crate::router::{GraphSearchProvider, Router};
use crate::search::{self, SearchProblem};

/// Router that searches the slice's free cells on every query.
///
/// Holds the active [`GraphSearchProvider`] and the extended-routing (EDPC)
/// flag. The provider and the flag are validated against each other
/// whenever either changes, so a router never runs EDPC on a provider that
/// lacks it.
#[derive(Debug, Default)]
pub struct DirectRouter {
    provider: GraphSearchProvider,
    edpc: bool,
    /// Number of graph searches run so far.
    searches: AtomicU64,
}

impl DirectRouter {
    /// Create a router with the default provider and EDPC disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a router with the given provider.
    pub fn with_provider(provider: GraphSearchProvider) -> Self {
        Self {
            provider,
            ..Self::default()
        }
    }

    /// Number of graph searches this router has run.
    pub fn searches_run(&self) -> u64 {
        self.searches.load(Ordering::Relaxed)
    }
}

impl Router for DirectRouter {
    fn name(&self) -> &str {
        "DirectRouter"
    }

    #[instrument(skip(self, slice), fields(provider = %self.provider, edpc = self.edpc))]
    fn find_routing_ancilla(
        &self,
        slice: &Slice,
        source: PatchId,
        source_op: PauliOperator,
        target: PatchId,
        target_op: PauliOperator,
    ) -> RouteResult<Option<RoutingRegion>> {
        let source_patch = slice.get_patch_by_id(source)?;
        let target_patch = slice.get_patch_by_id(target)?;

        let problem = SearchProblem::new(
            slice,
            source_patch,
            source_op,
            target_patch,
            target_op,
            self.edpc,
        );
        self.searches.fetch_add(1, Ordering::Relaxed);
        let region = search::run(self.provider, &problem);

        match &region {
            Some(r) => debug!(cells = r.len(), "Found routing region"),
            None => debug!("No routing region"),
        }
        Ok(region)
    }

    fn set_graph_search_provider(&mut self, provider: GraphSearchProvider) -> RouteResult<()> {
        if self.edpc && !provider.supports_edpc() {
            return Err(RouteError::IncompatibleProvider { provider });
        }
        debug!(from = %self.provider, to = %provider, "Switching graph search provider");
        self.provider = provider;
        Ok(())
    }

    fn graph_search_provider(&self) -> GraphSearchProvider {
        self.provider
    }

    fn set_edpc(&mut self) -> RouteResult<()> {
        if !self.provider.supports_edpc() {
            return Err(RouteError::EdpcUnsupported {
                router: self.name().to_string(),
                reason: format!("graph search provider '{}' has no EDPC mode", self.provider),
            });
        }
        self.edpc = true;
        Ok(())
    }

    fn edpc_enabled(&self) -> bool {
        self.edpc
    }
}
