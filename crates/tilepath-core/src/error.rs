use crate::geom::{Point, Range};

/// Errors raised by [`Grid`](crate::Grid) construction and lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Width or height was zero or negative.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    /// A coordinate fell outside the grid.
    #[error("{pos} is outside grid bounds {bounds}")]
    OutOfBounds { pos: Point, bounds: Range },
    /// A tile weight of zero was requested.
    #[error("tile {pos} weight must be at least 1, got {weight}")]
    InvalidWeight { pos: Point, weight: u32 },
    /// A serialized grid does not hold one tile per coordinate.
    #[error("expected {expected} tiles, found {found}")]
    TileCount { expected: usize, found: usize },
    /// A serialized tile is out of row-major order.
    #[error("expected tile {expected}, found tile {found}")]
    MisplacedTile { expected: Point, found: Point },
}
