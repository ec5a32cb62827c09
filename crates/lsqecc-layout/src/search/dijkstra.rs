//! Best-first search over the implicit slice grid.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use lsqecc_patches::Cell;
use rustc_hash::FxHashMap;

use super::SearchProblem;

/// Find a minimal-cost path with Dijkstra's algorithm.
pub fn shortest_path(problem: &SearchProblem<'_>) -> Option<Vec<Cell>> {
    best_first(problem, |_| 0)
}

/// Open-list entry. The heap pops the lowest estimate first, breaking ties
/// on cost, then row, then column, so results are deterministic.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Frontier {
    est: u64,
    cost: u64,
    cell: Cell,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .est
            .cmp(&self.est)
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| other.cell.row.cmp(&self.cell.row))
            .then_with(|| other.cell.col.cmp(&self.cell.col))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shared engine for the custom strategies.
///
/// `heuristic` must never overestimate the remaining cost to a target entry
/// cell; the first target popped is then optimal.
pub(super) fn best_first(
    problem: &SearchProblem<'_>,
    heuristic: impl Fn(Cell) -> u64,
) -> Option<Vec<Cell>> {
    let slice = problem.slice();
    let mut best: FxHashMap<Cell, u64> = FxHashMap::default();
    let mut parent: FxHashMap<Cell, Cell> = FxHashMap::default();
    let mut heap = BinaryHeap::new();

    for cell in problem.sources() {
        let cost = u64::from(slice.cell_cost(cell));
        best.insert(cell, cost);
        heap.push(Frontier {
            est: cost + heuristic(cell),
            cost,
            cell,
        });
    }

    while let Some(Frontier { cost, cell, .. }) = heap.pop() {
        if best.get(&cell).is_some_and(|&b| cost > b) {
            continue;
        }
        if problem.is_target(cell) {
            return Some(reconstruct(&parent, cell));
        }

        for next in cell.neighbours() {
            if !problem.is_routable(next) {
                continue;
            }
            let next_cost = cost + u64::from(slice.cell_cost(next));
            if best.get(&next).is_some_and(|&b| b <= next_cost) {
                continue;
            }
            best.insert(next, next_cost);
            parent.insert(next, cell);
            heap.push(Frontier {
                est: next_cost + heuristic(next),
                cost: next_cost,
                cell: next,
            });
        }
    }

    None
}

fn reconstruct(parent: &FxHashMap<Cell, Cell>, end: Cell) -> Vec<Cell> {
    let mut path = vec![end];
    let mut node = end;
    while let Some(&prev) = parent.get(&node) {
        path.push(prev);
        node = prev;
    }
    path.reverse();
    path
}
