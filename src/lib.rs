//! # grid_planning
//!
//! Three interchangeable searches over a 2D occupancy grid:
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with a Manhattan or
//! airplane (Euclidean) heuristic, a single-source
//! [wavefront](https://en.wikipedia.org/wiki/Breadth-first_search) search that
//! stops as soon as the goal is discovered, and a multi-source
//! [brushfire](https://en.wikipedia.org/wiki/Distance_transform) distance
//! transform that labels every cell with its distance to the nearest obstacle.
//!
//! Movement is 4-directional with uniform cost. All solvers consume the same
//! [Grid], fill a [WorkGrid] and report a [SearchResult] whose
//! [StatusCode] is the only error channel, so downstream tooling can branch
//! on the status without knowing which solver ran.
//!
//! ```
//! use grid_planning::{Algorithm, Grid, NoMeasure, Position, StatusCode};
//!
//! let grid = Grid::from_rows(&[[2, 0, 1], [0, 0, 1], [1, 0, 3]]).unwrap();
//! let result = Algorithm::Wavefront.run(Ok(&grid), &mut NoMeasure);
//! assert_eq!(result.status(), StatusCode::Success);
//! assert_eq!(result.path_length(), 4);
//! assert_eq!(result.path().first(), Some(&Position::new(0, 0)));
//! ```
pub mod error;
pub mod grid;
pub mod measure;
pub mod neighbour;
pub mod path;
pub mod position;
pub mod result;
pub mod solver;
pub mod status;
pub mod work_grid;

pub use error::{GridError, UnknownHeuristic};
pub use grid::{Cell, Grid};
pub use measure::{Measure, Metrics, NoMeasure, Stopwatch};
pub use neighbour::NeighbourPolicy;
pub use path::{reconstruct_path, PredecessorMap};
pub use position::Position;
pub use result::{Outcome, SearchResult, NO_PATH_LENGTH};
pub use solver::astar::{AStarSolver, Heuristic};
pub use solver::brushfire::BrushfireSolver;
pub use solver::wavefront::WavefrontSolver;
pub use solver::{run_astar, Algorithm, GridSolver};
pub use status::StatusCode;
pub use work_grid::{WorkGrid, UNVISITED};

/// Inline capacity of neighbour lists; a cell has at most four neighbours.
pub(crate) const N_SMALLVEC_SIZE: usize = 4;
