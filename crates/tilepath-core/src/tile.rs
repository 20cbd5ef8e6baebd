//! Grid cells: structural [`Tile`] data, per-search [`TileState`]
//! bookkeeping, and the read-only [`TileView`] pairing both.

use crate::geom::Point;

/// Cost of entering a tile when none is given.
pub const DEFAULT_WEIGHT: u32 = 1;

/// Structural data of a single grid cell.
///
/// A tile's position never changes. Passability and weight persist across
/// searches and are only edited through the owning [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pos: Point,
    blocked: bool,
    weight: u32,
}

impl Tile {
    /// An open tile with [`DEFAULT_WEIGHT`].
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            blocked: false,
            weight: DEFAULT_WEIGHT,
        }
    }

    pub(crate) const fn with_blocked(mut self, blocked: bool) -> Self {
        self.blocked = blocked;
        self
    }

    pub(crate) fn set_blocked(&mut self, blocked: bool) {
        self.blocked = blocked;
    }

    pub(crate) fn set_weight(&mut self, weight: u32) {
        self.weight = weight;
    }

    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub const fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.pos.y
    }

    /// Whether the tile may not be entered.
    #[inline]
    pub const fn blocked(&self) -> bool {
        self.blocked
    }

    /// Cost of entering this tile. Always at least 1.
    #[inline]
    pub const fn weight(&self) -> u32 {
        self.weight
    }

    /// Whether both tiles sit at the same coordinate.
    #[inline]
    pub fn same_position(&self, other: &Tile) -> bool {
        self.pos == other.pos
    }
}

impl From<Tile> for Point {
    fn from(t: Tile) -> Self {
        t.pos
    }
}

impl From<&Tile> for Point {
    fn from(t: &Tile) -> Self {
        t.pos
    }
}

// ---------------------------------------------------------------------------
// TileState
// ---------------------------------------------------------------------------

/// Search bookkeeping for one tile, valid only for the most recent search.
///
/// `f` is kept equal to `g + h` by every mutator. Costs are `u64` so that a
/// route of `u32` weights cannot overflow on any grid that fits in memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileState {
    g: u64,
    h: u32,
    f: u64,
    visited: bool,
    closed: bool,
    parent: Option<Point>,
}

impl TileState {
    /// Clear all bookkeeping. Idempotent.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record a (better) route to this tile: cost `g` from the start,
    /// estimate `h` to the goal, reached from `parent`.
    pub fn relax(&mut self, g: u64, h: u32, parent: Option<Point>) {
        self.g = g;
        self.h = h;
        self.f = g.saturating_add(u64::from(h));
        self.parent = parent;
    }

    /// Mark as having entered the open set.
    pub fn mark_visited(&mut self) {
        self.visited = true;
    }

    /// Mark as expanded; its cost is final for this search.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Accumulated cost from the start.
    #[inline]
    pub const fn g(&self) -> u64 {
        self.g
    }

    /// Heuristic estimate to the goal.
    #[inline]
    pub const fn h(&self) -> u32 {
        self.h
    }

    /// `g + h`, the open-set priority.
    #[inline]
    pub const fn f(&self) -> u64 {
        self.f
    }

    #[inline]
    pub const fn visited(&self) -> bool {
        self.visited
    }

    #[inline]
    pub const fn closed(&self) -> bool {
        self.closed
    }

    /// Tile this one was reached from on the best known route.
    #[inline]
    pub const fn parent(&self) -> Option<Point> {
        self.parent
    }
}

// ---------------------------------------------------------------------------
// TileView
// ---------------------------------------------------------------------------

/// Read-only view of a tile together with its search bookkeeping.
///
/// This is what presentation layers consume after a search.
#[derive(Debug, Clone, Copy)]
pub struct TileView<'g> {
    pub(crate) tile: &'g Tile,
    pub(crate) state: &'g TileState,
}

impl<'g> TileView<'g> {
    pub fn tile(&self) -> &'g Tile {
        self.tile
    }

    pub fn state(&self) -> &'g TileState {
        self.state
    }

    pub fn pos(&self) -> Point {
        self.tile.pos()
    }

    pub fn x(&self) -> i32 {
        self.tile.x()
    }

    pub fn y(&self) -> i32 {
        self.tile.y()
    }

    pub fn blocked(&self) -> bool {
        self.tile.blocked()
    }

    pub fn weight(&self) -> u32 {
        self.tile.weight()
    }

    pub fn visited(&self) -> bool {
        self.state.visited()
    }

    pub fn closed(&self) -> bool {
        self.state.closed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tile_is_open_with_unit_weight() {
        let t = Tile::new(Point::new(3, 4));
        assert_eq!((t.x(), t.y()), (3, 4));
        assert!(!t.blocked());
        assert_eq!(t.weight(), DEFAULT_WEIGHT);
    }

    #[test]
    fn same_position_ignores_structure() {
        let a = Tile::new(Point::new(1, 1));
        let b = Tile::new(Point::new(1, 1)).with_blocked(true);
        let c = Tile::new(Point::new(1, 2));
        assert!(a.same_position(&b));
        assert!(!a.same_position(&c));
    }

    #[test]
    fn relax_keeps_f_consistent() {
        let mut s = TileState::default();
        s.relax(3, 4, Some(Point::new(0, 1)));
        assert_eq!(s.f(), s.g() + u64::from(s.h()));
        assert_eq!(s.parent(), Some(Point::new(0, 1)));

        s.relax(2, 4, None);
        assert_eq!(s.f(), 6);
        assert_eq!(s.parent(), None);
    }

    #[test]
    fn costs_beyond_u32_are_exact() {
        let mut s = TileState::default();
        let g = 2 * u64::from(u32::MAX);
        s.relax(g, u32::MAX, None);
        assert_eq!(s.g(), g);
        assert_eq!(s.f(), 3 * u64::from(u32::MAX));
    }

    #[test]
    fn reset_clears_everything_and_is_idempotent() {
        let mut s = TileState::default();
        s.relax(5, 1, Some(Point::ZERO));
        s.mark_visited();
        s.close();

        s.reset();
        assert_eq!(s, TileState::default());
        s.reset();
        assert_eq!(s, TileState::default());
        assert!(!s.visited());
        assert!(!s.closed());
    }
}
