use log::{debug, info, warn};

use crate::{Grid, Measure, Outcome, SearchResult, StatusCode, WorkGrid};

pub mod astar;
pub mod brushfire;
pub mod wavefront;

use astar::{AStarSolver, Heuristic};
use brushfire::BrushfireSolver;
use wavefront::WavefrontSolver;

/// A grid as handed over by a loader: either a validated grid or the status it failed with.
pub type GridInput<'a> = Result<&'a Grid, StatusCode>;

pub trait GridSolver {
    fn name(&self) -> &'static str;

    /// Runs the search proper on `work`, a grid of unvisited cells matching `grid`. Performs no
    /// I/O and no measurement.
    fn search(&self, grid: &Grid, work: &mut WorkGrid) -> Outcome;

    /// Runs the solver on loader output. A failed input is passed through as a
    /// [rejected](SearchResult::rejected) result without doing any work; otherwise a fresh work
    /// grid is searched under `meter`.
    fn solve<M: Measure>(&self, input: GridInput, meter: &mut M) -> SearchResult {
        match input {
            Ok(grid) => self.solve_with(grid, grid.work_grid(), meter),
            Err(status) => {
                info!("{}: input rejected upstream with status {}", self.name(), status);
                SearchResult::rejected(status)
            }
        }
    }

    /// Searches `grid` on the caller-provided `work` grid, which becomes part of the result.
    fn solve_with<M: Measure>(
        &self,
        grid: &Grid,
        mut work: WorkGrid,
        meter: &mut M,
    ) -> SearchResult {
        debug_assert_eq!(
            (work.width(), work.height()),
            (grid.width(), grid.height()),
            "work grid does not match grid"
        );
        meter.begin();
        let outcome = self.search(grid, &mut work);
        let metrics = meter.end();
        match outcome.status {
            StatusCode::Success => debug!(
                "{}: success, path length {}, {} cells labelled in {:.2?}",
                self.name(),
                outcome.path_length,
                work.visited_count(),
                metrics.elapsed
            ),
            status => warn!("{}: finished with status {}", self.name(), status),
        }
        SearchResult::assemble(work, outcome, metrics)
    }
}

/// The solvers as one closed set, for callers that pick one at run time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    AStar(Heuristic),
    Brushfire,
    Wavefront,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Wavefront,
        Algorithm::AStar(Heuristic::Manhattan),
        Algorithm::AStar(Heuristic::Airplane),
        Algorithm::Brushfire,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::AStar(heuristic) => AStarSolver::new(*heuristic).name(),
            Algorithm::Brushfire => BrushfireSolver.name(),
            Algorithm::Wavefront => WavefrontSolver.name(),
        }
    }

    pub fn run<M: Measure>(&self, input: GridInput, meter: &mut M) -> SearchResult {
        match self {
            Algorithm::AStar(heuristic) => AStarSolver::new(*heuristic).solve(input, meter),
            Algorithm::Brushfire => BrushfireSolver.solve(input, meter),
            Algorithm::Wavefront => WavefrontSolver.solve(input, meter),
        }
    }
}

/// A* entry point taking the heuristic by name. An upstream failure wins over an unknown
/// heuristic; an unknown heuristic yields [StatusCode::InvalidHeuristic] with the work grid
/// untouched.
pub fn run_astar<M: Measure>(input: GridInput, heuristic: &str, meter: &mut M) -> SearchResult {
    let grid = match input {
        Ok(grid) => grid,
        Err(status) => return SearchResult::rejected(status),
    };
    match heuristic.parse::<Heuristic>() {
        Ok(heuristic) => AStarSolver::new(heuristic).solve(Ok(grid), meter),
        Err(err) => {
            warn!("{}", err);
            SearchResult::aborted(grid.work_grid(), err.status())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NoMeasure, NO_PATH_LENGTH, UNVISITED};

    fn example() -> Grid {
        Grid::from_rows(&[[2, 0, 1], [0, 0, 1], [1, 0, 3]]).unwrap()
    }

    #[test]
    fn upstream_status_is_passed_through_by_all() {
        for algorithm in Algorithm::ALL {
            let result = algorithm.run(Err(StatusCode::MalformedCell), &mut NoMeasure);
            assert_eq!(result, SearchResult::rejected(StatusCode::MalformedCell));
        }
        let result = run_astar(Err(StatusCode::SourceNotFound), "dijkstra", &mut NoMeasure);
        assert_eq!(result.status(), StatusCode::SourceNotFound);
    }

    #[test]
    fn unknown_heuristic_leaves_work_grid_untouched() {
        let grid = example();
        let result = run_astar(Ok(&grid), "euclid", &mut NoMeasure);
        assert_eq!(result.status().code(), 401);
        assert_eq!(result.path_length(), NO_PATH_LENGTH);
        assert_eq!(result.work_grid().height(), 3);
        assert!(result.work_grid().rows().flatten().all(|&v| v == UNVISITED));
    }

    #[test]
    fn heuristic_names_are_case_insensitive() {
        let grid = example();
        let result = run_astar(Ok(&grid), "Manhattan", &mut NoMeasure);
        assert_eq!(result.status(), StatusCode::Success);
        assert_eq!(result.path_length(), 4);
    }

    #[test]
    fn solve_with_keeps_the_given_work_grid() {
        let grid = example();
        let result = WavefrontSolver.solve_with(&grid, grid.work_grid(), &mut NoMeasure);
        assert_eq!(result.work_grid().get(grid.start()), Some(0));
        assert_eq!(result.work_grid().get(grid.goal()), Some(4));
    }

    #[test]
    fn names_are_distinct() {
        let mut names: Vec<&str> = Algorithm::ALL.iter().map(Algorithm::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Algorithm::ALL.len());
    }
}
