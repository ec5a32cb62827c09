//! A* search guided by Manhattan distance.

use lsqecc_patches::Cell;

use super::SearchProblem;
use super::dijkstra::best_first;

/// Find a minimal-cost path with A*.
///
/// Every cell costs at least 1, so the Manhattan distance to the nearest
/// target entry cell is admissible.
pub fn shortest_path(problem: &SearchProblem<'_>) -> Option<Vec<Cell>> {
    let targets: Vec<Cell> = problem.targets().collect();
    best_first(problem, |cell| {
        targets
            .iter()
            .map(|&t| u64::from(cell.manhattan(t)))
            .min()
            .unwrap_or(0)
    })
}
