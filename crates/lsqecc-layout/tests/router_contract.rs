//! Integration tests for the router contract.
//!
//! These tests check the behaviour shared by the direct and cached routers,
//! the EDPC configuration rules, directional caching, and the documented
//! stale-route limitation of the cached router.

use lsqecc_layout::{
    CachedRouter, DirectRouter, GraphSearchProvider, PathIdentifier, RouteError, Router,
};
use lsqecc_patches::{Cell, Patch, PatchId, PauliOperator, RoutingRegion, Slice};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Helper: place single-cell square patches at the given cells.
fn slice_with(rows: u32, cols: u32, patches: &[(u32, i32, i32)]) -> Slice {
    let mut slice = Slice::new(rows, cols);
    for &(id, row, col) in patches {
        slice
            .place_patch(Patch::basic_square(PatchId(id), Cell::new(row, col)))
            .unwrap();
    }
    slice
}

/// A 6x8 slice with a handful of patches and obstacles.
fn busy_slice() -> Slice {
    slice_with(
        6,
        8,
        &[
            (0, 1, 0),
            (1, 4, 7),
            (2, 0, 3),
            (3, 2, 3),
            (4, 3, 3),
            (5, 5, 5),
            (6, 2, 6),
        ],
    )
}

fn query(
    router: &dyn Router,
    slice: &Slice,
    source: u32,
    source_op: PauliOperator,
    target: u32,
    target_op: PauliOperator,
) -> Option<RoutingRegion> {
    router
        .find_routing_ancilla(slice, PatchId(source), source_op, PatchId(target), target_op)
        .unwrap()
}

/// Helper: assert a region is a connected path of cells that were free.
fn assert_valid_region(slice: &Slice, region: &RoutingRegion) {
    let path: Vec<Cell> = region.path().collect();
    assert!(!path.is_empty());
    for cell in &path {
        assert!(slice.is_cell_free(*cell), "{cell} is not free\n{slice}");
    }
    for pair in path.windows(2) {
        assert_eq!(pair[0].manhattan(pair[1]), 1, "gap in path\n{slice}");
    }
    assert_eq!(path[0], region.source.entry_cell());
    assert_eq!(path[path.len() - 1], region.target.entry_cell());
}

// ============================================================================
// Cached and direct routers agree on an unchanged slice
// ============================================================================

#[test]
fn test_cached_matches_direct() {
    init_tracing();
    let slice = busy_slice();
    let ops = [PauliOperator::X, PauliOperator::Z];

    for provider in GraphSearchProvider::ALL {
        let direct = DirectRouter::with_provider(provider);
        let cached = CachedRouter::with_provider(provider);

        for &source_op in &ops {
            for &target_op in &ops {
                let d = query(&direct, &slice, 0, source_op, 1, target_op);
                let c = query(&cached, &slice, 0, source_op, 1, target_op);
                assert_eq!(d, c, "{provider}: {source_op} -> {target_op}");
                if let Some(region) = &d {
                    assert_valid_region(&slice, region);
                }
            }
        }
    }
}

#[test]
fn test_providers_agree_on_cost() {
    let slice = busy_slice();
    let costs: Vec<_> = GraphSearchProvider::ALL
        .iter()
        .map(|&p| {
            query(
                &DirectRouter::with_provider(p),
                &slice,
                0,
                PauliOperator::X,
                1,
                PauliOperator::Z,
            )
            .map(|r| r.cost(&slice))
        })
        .collect();
    assert!(costs[0].is_some());
    assert!(costs.windows(2).all(|w| w[0] == w[1]), "{costs:?}");
}

// ============================================================================
// Repeated queries search at most once
// ============================================================================

#[test]
fn test_repeated_queries_search_once() {
    init_tracing();
    let slice = busy_slice();
    let router = CachedRouter::new();

    let first = query(&router, &slice, 0, PauliOperator::Z, 1, PauliOperator::X);
    for _ in 0..5 {
        let again = query(&router, &slice, 0, PauliOperator::Z, 1, PauliOperator::X);
        assert_eq!(again, first);
    }
    assert!(first.is_some());
    assert_eq!(router.inner().searches_run(), 1);

    let direct = DirectRouter::new();
    for _ in 0..3 {
        query(&direct, &slice, 0, PauliOperator::Z, 1, PauliOperator::X);
    }
    assert_eq!(direct.searches_run(), 3);
}

// ============================================================================
// EDPC configuration
// ============================================================================

#[test]
fn test_direct_edpc_by_provider() {
    let mut petgraph = DirectRouter::with_provider(GraphSearchProvider::Petgraph);
    assert!(matches!(
        petgraph.set_edpc(),
        Err(RouteError::EdpcUnsupported { .. })
    ));
    assert!(!petgraph.edpc_enabled());

    for provider in [GraphSearchProvider::Dijkstra, GraphSearchProvider::AStar] {
        let mut router = DirectRouter::with_provider(provider);
        router.set_edpc().unwrap();
        assert!(router.edpc_enabled(), "{provider}");
    }
}

#[test]
fn test_cached_edpc_always_fails() {
    for provider in GraphSearchProvider::ALL {
        let mut router: Box<dyn Router> = Box::new(CachedRouter::with_provider(provider));
        for _ in 0..2 {
            let err = router.set_edpc().unwrap_err();
            assert!(err.to_string().contains("CachedRouter"), "{err}");
            assert!(!router.edpc_enabled());
        }
    }
}

// ============================================================================
// Enclosed patches
// ============================================================================

#[test]
fn test_enclosed_patches_have_no_route() {
    // p0 and p1 are each boxed in on all four sides.
    let slice = slice_with(
        5,
        9,
        &[
            (0, 2, 2),
            (10, 1, 2),
            (11, 3, 2),
            (12, 2, 1),
            (13, 2, 3),
            (1, 2, 6),
            (20, 1, 6),
            (21, 3, 6),
            (22, 2, 5),
            (23, 2, 7),
        ],
    );

    for provider in GraphSearchProvider::ALL {
        let direct = DirectRouter::with_provider(provider);
        let cached = CachedRouter::with_provider(provider);
        for op in [PauliOperator::X, PauliOperator::Z] {
            assert!(query(&direct, &slice, 0, op, 1, op).is_none());
            assert!(query(&cached, &slice, 0, op, 1, op).is_none());
        }
        assert_eq!(cached.cached_route_count(), 0);
    }
}

// ============================================================================
// Directional cache keys
// ============================================================================

#[test]
fn test_swapped_query_is_a_distinct_key() {
    let slice = busy_slice();
    let forward =
        PathIdentifier::for_query(&slice, PatchId(0), PauliOperator::X, PatchId(1), PauliOperator::Z)
            .unwrap();
    let backward =
        PathIdentifier::for_query(&slice, PatchId(1), PauliOperator::Z, PatchId(0), PauliOperator::X)
            .unwrap();
    assert_ne!(forward, backward);

    let router = CachedRouter::new();
    let there = query(&router, &slice, 0, PauliOperator::X, 1, PauliOperator::Z).unwrap();
    let back = query(&router, &slice, 1, PauliOperator::Z, 0, PauliOperator::X).unwrap();

    // The reverse query is searched, not served from the forward entry.
    assert_eq!(router.inner().searches_run(), 2);
    assert_eq!(router.cached_route_count(), 2);
    assert_eq!(there.source.patch, PatchId(0));
    assert_eq!(back.source.patch, PatchId(1));
    assert_eq!(router.cached(&forward), Some(there));
    assert_eq!(router.cached(&backward), Some(back));
}

// ============================================================================
// Stale cached routes (documented limitation)
// ============================================================================

#[test]
fn test_stale_route_returned_after_occupancy_change() {
    init_tracing();
    let mut slice = slice_with(3, 5, &[(0, 1, 0), (1, 1, 4)]);
    let router = CachedRouter::new();

    let cached = query(&router, &slice, 0, PauliOperator::Z, 1, PauliOperator::Z).unwrap();
    let blocked = Cell::new(1, 2);
    assert!(cached.contains(blocked));

    slice
        .place_patch(Patch::basic_square(PatchId(2), blocked))
        .unwrap();

    // The cached router returns the old route, which now crosses p2.
    let stale = query(&router, &slice, 0, PauliOperator::Z, 1, PauliOperator::Z).unwrap();
    assert_eq!(stale, cached);
    assert_eq!(slice.patch_at(blocked), Some(PatchId(2)));
    assert_eq!(router.inner().searches_run(), 1);

    // A direct router sees the new patch and detours.
    let fresh = query(
        &DirectRouter::new(),
        &slice,
        0,
        PauliOperator::Z,
        1,
        PauliOperator::Z,
    )
    .unwrap();
    assert!(!fresh.contains(blocked));
    assert_valid_region(&slice, &fresh);

    // Clearing the cache is the caller's way out.
    router.clear_cache();
    let refreshed = query(&router, &slice, 0, PauliOperator::Z, 1, PauliOperator::Z).unwrap();
    assert_eq!(refreshed, fresh);
}

// ============================================================================
// Shared router across threads
// ============================================================================

#[test]
fn test_cached_router_shared_between_threads() {
    let slice = &busy_slice();
    let router = &CachedRouter::new();

    let results: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(move |_| {
                s.spawn(move || query(router, slice, 0, PauliOperator::X, 1, PauliOperator::X))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(results.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(router.cached_route_count(), 1);
    assert!(router.inner().searches_run() >= 1);
}
