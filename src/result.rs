use log::error;

use crate::{reconstruct_path, Metrics, Position, PredecessorMap, StatusCode, WorkGrid};

/// Path length reported when no path was computed.
pub const NO_PATH_LENGTH: i32 = -1;

/// What a search loop produced, before the work grid and metrics are attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub status: StatusCode,
    pub path_length: i32,
    pub path: Vec<Position>,
}

impl Outcome {
    /// A completed distance field: success without a path.
    pub fn field() -> Outcome {
        Outcome {
            status: StatusCode::Success,
            path_length: NO_PATH_LENGTH,
            path: Vec::new(),
        }
    }

    pub fn no_path() -> Outcome {
        Outcome {
            status: StatusCode::NoPath,
            path_length: NO_PATH_LENGTH,
            path: Vec::new(),
        }
    }

    /// Turns the end state of a point-to-point search into an outcome. `reached` holds the path
    /// length if the goal was reached. A predecessor chain that does not lead back to the start
    /// is reported as [StatusCode::NoPath].
    pub fn from_search(
        reached: Option<i32>,
        start: Position,
        goal: Position,
        predecessors: &PredecessorMap,
    ) -> Outcome {
        let Some(path_length) = reached else {
            return Outcome::no_path();
        };
        match reconstruct_path(start, goal, predecessors) {
            Some(path) => Outcome {
                status: StatusCode::Success,
                path_length,
                path,
            },
            None => {
                error!("Goal {} reached but no predecessor chain back to {}", goal, start);
                Outcome::no_path()
            }
        }
    }
}

/// Immutable snapshot of one solver run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    work_grid: WorkGrid,
    status: StatusCode,
    path_length: i32,
    path: Vec<Position>,
    metrics: Metrics,
}

impl SearchResult {
    /// The result of a run whose input had already failed upstream: the status is passed through
    /// with an empty work grid and no measurements.
    pub fn rejected(status: StatusCode) -> SearchResult {
        SearchResult::aborted(WorkGrid::empty(), status)
    }

    /// The result of a run the solver refused before searching; `work` is returned untouched.
    pub fn aborted(work: WorkGrid, status: StatusCode) -> SearchResult {
        SearchResult {
            work_grid: work,
            status,
            path_length: NO_PATH_LENGTH,
            path: Vec::new(),
            metrics: Metrics::default(),
        }
    }

    pub fn assemble(work: WorkGrid, outcome: Outcome, metrics: Metrics) -> SearchResult {
        SearchResult {
            work_grid: work,
            status: outcome.status,
            path_length: outcome.path_length,
            path: outcome.path,
            metrics,
        }
    }

    pub fn work_grid(&self) -> &WorkGrid {
        &self.work_grid
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn path_length(&self) -> i32 {
        self.path_length
    }

    pub fn path(&self) -> &[Position] {
        &self.path
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_result_is_empty() {
        let result = SearchResult::rejected(StatusCode::DuplicateStart);
        assert_eq!(result.status().code(), 422);
        assert!(result.work_grid().is_empty());
        assert_eq!(result.path_length(), NO_PATH_LENGTH);
        assert!(!result.has_path());
        assert_eq!(*result.metrics(), Metrics::default());
    }

    #[test]
    fn broken_chain_becomes_no_path() {
        let outcome = Outcome::from_search(
            Some(3),
            Position::new(0, 0),
            Position::new(0, 3),
            &PredecessorMap::default(),
        );
        assert_eq!(outcome, Outcome::no_path());
        assert_eq!(
            Outcome::from_search(
                None,
                Position::new(0, 0),
                Position::new(0, 0),
                &PredecessorMap::default()
            ),
            Outcome::no_path()
        );
    }
}
