use log::debug;
use std::collections::VecDeque;

use crate::{solver::GridSolver, Grid, NeighbourPolicy, Outcome, Position, PredecessorMap, WorkGrid};

/// Single-source breadth-first search from the start that stops the moment the goal is
/// discovered as a neighbour. With uniform edge cost the first discovery is already a shortest
/// path, so unlike A* there is no need to wait until the goal is dequeued.
#[derive(Clone, Copy, Debug, Default)]
pub struct WavefrontSolver;

impl GridSolver for WavefrontSolver {
    fn name(&self) -> &'static str {
        "wavefront"
    }

    fn search(&self, grid: &Grid, work: &mut WorkGrid) -> Outcome {
        let start = grid.start();
        let goal = grid.goal();
        let mut frontier: VecDeque<(Position, i32)> = VecDeque::new();
        // Spanning tree over every visited cell, not only the cells of the final path.
        let mut predecessors = PredecessorMap::default();
        let mut reached = None;

        work.set(start, 0);
        frontier.push_back((start, 0));
        'search: while let Some((position, distance)) = frontier.pop_front() {
            for neighbour in NeighbourPolicy::PassableUnvisited.neighbours(grid, work, position) {
                work.set(neighbour, distance + 1);
                frontier.push_back((neighbour, distance + 1));
                predecessors.insert(neighbour, position);
                if neighbour == goal {
                    reached = Some(distance + 1);
                    break 'search;
                }
            }
        }
        debug!(
            "{}: visited {} cells, {} left in frontier",
            self.name(),
            predecessors.len() + 1,
            frontier.len()
        );
        Outcome::from_search(reached, start, goal, &predecessors)
    }
}
