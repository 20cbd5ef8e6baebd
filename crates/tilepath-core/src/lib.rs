//! **tilepath-core** — the tile grid model used by the *tilepath* search
//! crates.
//!
//! This crate provides geometry primitives, the structural [`Tile`], the
//! per-search [`TileState`] bookkeeping, the [`Grid`] that owns both, and
//! text [`Layout`]s for hand-authored maps.

pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;
pub mod tile;

pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::Grid;
pub use layout::{Layout, LayoutError};
pub use tile::{DEFAULT_WEIGHT, Tile, TileState, TileView};
