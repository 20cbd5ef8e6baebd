//! The [`Grid`] type: a fixed `width x height` map of [`Tile`]s.
//!
//! Structural tile data and per-search [`TileState`] bookkeeping live in two
//! parallel row-major arrays, so a search can be reset without touching
//! passability or weights.

use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::tile::{Tile, TileState, TileView};

/// A fixed-size rectangular map of tiles with origin at (0, 0).
///
/// With the `serde` feature a grid serializes as its size and tiles. Search
/// bookkeeping is not serialized, and deserializing re-checks everything
/// the constructors guarantee.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridRepr", into = "GridRepr")
)]
pub struct Grid {
    bounds: Range,
    tiles: Vec<Tile>,
    states: Vec<TileState>,
}

impl Grid {
    /// Create a grid where every tile is open with unit weight.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        Self::from_fn(width, height, |_| true)
    }

    /// Create a grid, asking `passable` about each coordinate in row-major
    /// order. Tiles for which it returns `false` are blocked.
    pub fn from_fn(
        width: i32,
        height: i32,
        mut passable: impl FnMut(Point) -> bool,
    ) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let bounds = Range::from_size(width, height);
        let tiles: Vec<Tile> = bounds
            .iter()
            .map(|p| Tile::new(p).with_blocked(!passable(p)))
            .collect();
        let states = vec![TileState::default(); tiles.len()];
        Ok(Self {
            bounds,
            tiles,
            states,
        })
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of tiles, always `width * height`.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false: dimensions are validated on construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        self.bounds.index(p)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        self.bounds.point(idx)
    }

    fn checked_index(&self, p: Point) -> Result<usize, GridError> {
        self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            bounds: self.bounds,
        })
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    pub fn tile(&self, p: Point) -> Result<&Tile, GridError> {
        let i = self.checked_index(p)?;
        Ok(&self.tiles[i])
    }

    pub fn state(&self, p: Point) -> Result<&TileState, GridError> {
        let i = self.checked_index(p)?;
        Ok(&self.states[i])
    }

    /// Tile and bookkeeping at `p`, for presentation layers.
    pub fn view(&self, p: Point) -> Result<TileView<'_>, GridError> {
        let i = self.checked_index(p)?;
        Ok(TileView {
            tile: &self.tiles[i],
            state: &self.states[i],
        })
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// All bookkeeping records, indexed like [`tiles`](Self::tiles).
    pub fn states(&self) -> &[TileState] {
        &self.states
    }

    /// Structural tiles and mutable bookkeeping at once, for search
    /// algorithms that read weights while relaxing costs.
    pub fn search_parts(&mut self) -> (&[Tile], &mut [TileState]) {
        (&self.tiles, &mut self.states)
    }

    /// Row-major iterator over tile views.
    pub fn views(&self) -> impl Iterator<Item = TileView<'_>> {
        self.tiles
            .iter()
            .zip(self.states.iter())
            .map(|(tile, state)| TileView { tile, state })
    }

    pub fn count_blocked(&self) -> usize {
        self.tiles.iter().filter(|t| t.blocked()).count()
    }

    // -----------------------------------------------------------------------
    // Structural edits
    // -----------------------------------------------------------------------

    /// Block or unblock the tile at `p`. Its bookkeeping is cleared.
    pub fn set_blocked(&mut self, p: Point, blocked: bool) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        self.tiles[i].set_blocked(blocked);
        self.states[i].reset();
        Ok(())
    }

    /// Set the cost of entering the tile at `p`. Its bookkeeping is cleared.
    pub fn set_weight(&mut self, p: Point, weight: u32) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        if weight == 0 {
            return Err(GridError::InvalidWeight { pos: p, weight });
        }
        self.tiles[i].set_weight(weight);
        self.states[i].reset();
        Ok(())
    }

    /// Clear the search bookkeeping of every tile.
    pub fn reset(&mut self) {
        for s in self.states.iter_mut() {
            s.reset();
        }
    }

    // -----------------------------------------------------------------------
    // Adjacency
    // -----------------------------------------------------------------------

    /// Passable tiles one cardinal step from `p`, ordered west, east, south,
    /// north.
    pub fn neighbors(&self, p: Point) -> Result<Vec<&Tile>, GridError> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(p, &mut buf)?;
        Ok(buf
            .into_iter()
            .filter_map(|n| self.index(n))
            .map(|i| &self.tiles[i])
            .collect())
    }

    /// Append the positions of the passable neighbors of `p` into `buf`, in
    /// the same order as [`neighbors`](Self::neighbors). The caller clears
    /// `buf`.
    pub fn neighbors_into(&self, p: Point, buf: &mut Vec<Point>) -> Result<(), GridError> {
        self.checked_index(p)?;
        for n in p.cardinal_neighbors() {
            match self.index(n) {
                Some(i) if !self.tiles[i].blocked() => buf.push(n),
                _ => {}
            }
        }
        Ok(())
    }
}

/// Serialized form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

#[cfg(feature = "serde")]
impl From<Grid> for GridRepr {
    fn from(grid: Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            tiles: grid.tiles,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self, GridError> {
        let GridRepr {
            width,
            height,
            tiles,
        } = repr;
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let expected = Range::from_size(width, height).area();
        if tiles.len() != expected {
            return Err(GridError::TileCount {
                expected,
                found: tiles.len(),
            });
        }
        let mut grid = Self::new(width, height)?;
        for (slot, tile) in grid.tiles.iter_mut().zip(tiles) {
            if tile.pos() != slot.pos() {
                return Err(GridError::MisplacedTile {
                    expected: slot.pos(),
                    found: tile.pos(),
                });
            }
            if tile.weight() == 0 {
                return Err(GridError::InvalidWeight {
                    pos: tile.pos(),
                    weight: 0,
                });
            }
            *slot = tile;
        }
        Ok(grid)
    }
}
