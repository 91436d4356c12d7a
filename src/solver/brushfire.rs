use log::debug;
use std::collections::VecDeque;

use crate::{solver::GridSolver, Grid, NeighbourPolicy, Outcome, Position, WorkGrid};

/// Multi-source breadth-first distance transform seeded with every obstacle. When it finishes,
/// each cell holds its 4-connected step distance to the nearest obstacle; obstacles hold 0.
/// Brushfire computes a clearance map, not a route, so its results never carry a path. If the
/// grid has no obstacles every cell stays unvisited.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrushfireSolver;

impl GridSolver for BrushfireSolver {
    fn name(&self) -> &'static str {
        "brushfire"
    }

    fn search(&self, grid: &Grid, work: &mut WorkGrid) -> Outcome {
        let mut frontier: VecDeque<(Position, i32)> = grid
            .positions()
            .filter(|&p| grid.is_obstacle(p))
            .map(|p| (p, 0))
            .collect();
        for &(seed, _) in &frontier {
            work.set(seed, 0);
        }
        debug!("{}: seeded {} obstacle cells", self.name(), frontier.len());

        while let Some((position, distance)) = frontier.pop_front() {
            for neighbour in NeighbourPolicy::Unvisited.neighbours(grid, work, position) {
                work.set(neighbour, distance + 1);
                frontier.push_back((neighbour, distance + 1));
            }
        }
        Outcome::field()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NoMeasure, StatusCode, NO_PATH_LENGTH, UNVISITED};

    #[test]
    fn distances_to_nearest_obstacle() {
        let grid = Grid::from_rows(&[[2, 0, 1], [0, 0, 1], [1, 0, 3]]).unwrap();
        let result = BrushfireSolver.solve(Ok(&grid), &mut NoMeasure);
        assert_eq!(result.status(), StatusCode::Success);
        assert_eq!(result.path_length(), NO_PATH_LENGTH);
        assert!(result.path().is_empty());
        assert_eq!(
            result.work_grid().to_rows(),
            vec![vec![2, 1, 0], vec![1, 1, 0], vec![0, 1, 1]]
        );
    }

    #[test]
    fn start_and_goal_are_labelled_like_free_cells() {
        let grid = Grid::from_rows(&[[1, 0, 2, 0, 3]]).unwrap();
        let result = BrushfireSolver.solve(Ok(&grid), &mut NoMeasure);
        assert_eq!(result.work_grid().to_rows(), vec![vec![0, 1, 2, 3, 4]]);
    }

    #[test]
    fn no_obstacles_leaves_grid_unvisited() {
        let grid = Grid::from_rows(&[[2, 0], [0, 3]]).unwrap();
        let result = BrushfireSolver.solve(Ok(&grid), &mut NoMeasure);
        assert_eq!(result.status(), StatusCode::Success);
        assert!(result.work_grid().rows().flatten().all(|&v| v == UNVISITED));
    }
}
