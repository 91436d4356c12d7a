//! Error types of the core. Each maps onto a [StatusCode] through `status()`.

use thiserror::Error;

use crate::{Position, StatusCode};

/// Why a set of rows could not be turned into a [Grid](crate::Grid).
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell code {code} at {position}")]
    UnknownCell { position: Position, code: i32 },

    #[error("no start cell")]
    MissingStart,

    #[error("no goal cell")]
    MissingGoal,

    #[error("second start cell at {second}, first at {first}")]
    DuplicateStart { first: Position, second: Position },

    #[error("second goal cell at {second}, first at {first}")]
    DuplicateGoal { first: Position, second: Position },
}

impl GridError {
    pub fn status(&self) -> StatusCode {
        match self {
            GridError::RaggedRow { .. } => StatusCode::ReadFailure,
            GridError::UnknownCell { .. } => StatusCode::MalformedCell,
            GridError::MissingStart => StatusCode::MissingStart,
            GridError::MissingGoal => StatusCode::MissingGoal,
            GridError::DuplicateStart { .. } => StatusCode::DuplicateStart,
            GridError::DuplicateGoal { .. } => StatusCode::DuplicateGoal,
        }
    }
}

/// A heuristic name that is neither `manhattan` nor `airplane`.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("unknown heuristic {0:?}, expected \"manhattan\" or \"airplane\"")]
pub struct UnknownHeuristic(pub String);

impl UnknownHeuristic {
    pub fn status(&self) -> StatusCode {
        StatusCode::InvalidHeuristic
    }
}
