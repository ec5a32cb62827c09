//! Library-backed search using `petgraph`.
//!
//! Builds an explicit graph of the slice's free cells plus two virtual
//! terminal nodes and hands it to `petgraph::algo::astar` with a zero
//! heuristic. Extended routing is not implemented here: the graph always
//! contains every free cell.

use lsqecc_patches::Cell;
use petgraph::algo::astar;
use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashMap;

use super::SearchProblem;

/// Node of the explicit search graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    Source,
    Target,
    Free(Cell),
}

/// Find a minimal-cost path with `petgraph`.
pub fn shortest_path(problem: &SearchProblem<'_>) -> Option<Vec<Cell>> {
    let slice = problem.slice();
    let mut graph: DiGraph<Node, u64> = DiGraph::new();
    let mut index: FxHashMap<Cell, NodeIndex> = FxHashMap::default();

    for cell in slice.cells().filter(|&c| slice.is_cell_free(c)) {
        index.insert(cell, graph.add_node(Node::Free(cell)));
    }
    for (&cell, &from) in &index {
        for next in slice.free_neighbours(cell) {
            if let Some(&to) = index.get(&next) {
                graph.add_edge(from, to, u64::from(slice.cell_cost(next)));
            }
        }
    }

    let source = graph.add_node(Node::Source);
    let target = graph.add_node(Node::Target);
    for cell in problem.sources() {
        let to = *index.get(&cell)?;
        graph.add_edge(source, to, u64::from(slice.cell_cost(cell)));
    }
    for cell in problem.targets() {
        let from = *index.get(&cell)?;
        graph.add_edge(from, target, 0);
    }

    let (_cost, nodes) = astar(
        &graph,
        source,
        |n| n == target,
        |e| *e.weight(),
        |_| 0,
    )?;

    Some(
        nodes
            .into_iter()
            .filter_map(|n| match graph[n] {
                Node::Free(cell) => Some(cell),
                Node::Source | Node::Target => None,
            })
            .collect(),
    )
}
