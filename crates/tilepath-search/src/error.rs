use tilepath_core::{GridError, Point};

/// Why a search endpoint was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EndpointReason {
    /// The coordinate has no tile in the grid.
    #[error("outside the grid")]
    OutOfBounds,
    /// The tile cannot be entered.
    #[error("blocked")]
    Blocked,
}

/// Errors raised by searches. An unreachable goal is not an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("invalid endpoint {pos}: {reason}")]
    InvalidEndpoint { pos: Point, reason: EndpointReason },
    #[error(transparent)]
    Grid(#[from] GridError),
}
