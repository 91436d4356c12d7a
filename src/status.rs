use core::fmt;

/// Terminal outcome of loading a grid or running a search. Loader failures and search failures
/// share this one taxonomy so that a result can be classified from its code alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// 200: the grid was valid and the run completed.
    Success,
    /// 401: A* was asked for a heuristic it does not know.
    InvalidHeuristic,
    /// 402: the grid has no start cell.
    MissingStart,
    /// 403: the grid has no goal cell.
    MissingGoal,
    /// 404: the frontier was exhausted before the goal was reached.
    NoPath,
    /// 422: the grid has more than one start cell.
    DuplicateStart,
    /// 423: the grid has more than one goal cell.
    DuplicateGoal,
    /// 500: a cell could not be read as a cell code.
    MalformedCell,
    /// 504: the grid source does not exist.
    SourceNotFound,
    /// 509: any other failure while reading the grid source.
    ReadFailure,
}

impl StatusCode {
    pub const ALL: [StatusCode; 10] = [
        StatusCode::Success,
        StatusCode::InvalidHeuristic,
        StatusCode::MissingStart,
        StatusCode::MissingGoal,
        StatusCode::NoPath,
        StatusCode::DuplicateStart,
        StatusCode::DuplicateGoal,
        StatusCode::MalformedCell,
        StatusCode::SourceNotFound,
        StatusCode::ReadFailure,
    ];

    pub const fn code(self) -> u16 {
        match self {
            StatusCode::Success => 200,
            StatusCode::InvalidHeuristic => 401,
            StatusCode::MissingStart => 402,
            StatusCode::MissingGoal => 403,
            StatusCode::NoPath => 404,
            StatusCode::DuplicateStart => 422,
            StatusCode::DuplicateGoal => 423,
            StatusCode::MalformedCell => 500,
            StatusCode::SourceNotFound => 504,
            StatusCode::ReadFailure => 509,
        }
    }

    pub fn from_code(code: u16) -> Option<StatusCode> {
        StatusCode::ALL.into_iter().find(|status| status.code() == code)
    }

    pub const fn is_success(self) -> bool {
        matches!(self, StatusCode::Success)
    }

    pub const fn reason(self) -> &'static str {
        match self {
            StatusCode::Success => "success",
            StatusCode::InvalidHeuristic => "invalid heuristic",
            StatusCode::MissingStart => "missing start",
            StatusCode::MissingGoal => "missing goal",
            StatusCode::NoPath => "no path",
            StatusCode::DuplicateStart => "duplicate start",
            StatusCode::DuplicateGoal => "duplicate goal",
            StatusCode::MalformedCell => "malformed cell",
            StatusCode::SourceNotFound => "source not found",
            StatusCode::ReadFailure => "read failure",
        }
    }
}

impl From<StatusCode> for u16 {
    fn from(status: StatusCode) -> u16 {
        status.code()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.reason())
    }
}
