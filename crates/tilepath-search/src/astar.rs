use tilepath_core::{Grid, Point};

use crate::error::{EndpointReason, SearchError};
use crate::heuristic::{Heuristic, Manhattan};
use crate::open::OpenSet;
use crate::path::Path;

/// Counters from the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Tiles closed (expanded).
    pub expanded: usize,
    /// Open-set insertions, including re-insertions after relaxation.
    pub pushed: u64,
}

/// A* search over a [`Grid`].
///
/// The search writes its bookkeeping into the grid's [`TileState`]s, so
/// after a call every tile reports whether it was visited or closed. The
/// finder itself only owns scratch buffers, reused across calls.
///
/// [`TileState`]: tilepath_core::TileState
#[derive(Debug)]
pub struct PathFinder<H = Manhattan> {
    heuristic: H,
    open: OpenSet,
    nbuf: Vec<Point>,
    stats: SearchStats,
}

impl PathFinder<Manhattan> {
    pub fn new() -> Self {
        Self::with_heuristic(Manhattan)
    }
}

impl Default for PathFinder<Manhattan> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Heuristic> PathFinder<H> {
    pub fn with_heuristic(heuristic: H) -> Self {
        Self {
            heuristic,
            open: OpenSet::default(),
            nbuf: Vec::with_capacity(4),
            stats: SearchStats::default(),
        }
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Counters from the last call to [`find_path`](Self::find_path).
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Find a cheapest route from `start` to `goal`, both inclusive.
    ///
    /// Entering a tile costs its weight. Returns an empty [`Path`] when the
    /// goal cannot be reached. Fails with [`SearchError::InvalidEndpoint`]
    /// before touching the grid if either endpoint is outside the grid or
    /// blocked.
    ///
    /// Among equally cheap candidates the open set prefers the lowest `f`,
    /// then the lowest `h`, then the tile queued first, so results are
    /// reproducible.
    pub fn find_path(
        &mut self,
        grid: &mut Grid,
        start: impl Into<Point>,
        goal: impl Into<Point>,
    ) -> Result<Path, SearchError> {
        let start = start.into();
        let goal = goal.into();
        let start_idx = endpoint(grid, start)?;
        let goal_idx = endpoint(grid, goal)?;

        grid.reset();
        self.open.clear();
        self.stats = SearchStats::default();

        let h = self.heuristic.estimate(start, goal);
        {
            let (_, states) = grid.search_parts();
            states[start_idx].relax(0, h, None);
            states[start_idx].mark_visited();
        }
        self.open.push(start_idx, u64::from(h), h);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = self.open.pop() else {
                break 'search false;
            };
            let ci = current.idx;
            let cs = grid.states()[ci];

            // Closed, or superseded by a cheaper entry for the same tile.
            if cs.closed() || cs.f() != current.f {
                log::trace!("skipping stale open entry for {}", grid.point(ci));
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            let cp = grid.point(ci);
            nbuf.clear();
            grid.neighbors_into(cp, &mut nbuf)?;

            grid.search_parts().1[ci].close();
            self.stats.expanded += 1;

            for &np in nbuf.iter() {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                let (tiles, states) = grid.search_parts();
                let n = &mut states[ni];
                if n.closed() {
                    continue;
                }
                let tentative = cs.g().saturating_add(u64::from(tiles[ni].weight()));
                if n.visited() && tentative >= n.g() {
                    continue;
                }
                let nh = self.heuristic.estimate(np, goal);
                n.relax(tentative, nh, Some(cp));
                n.mark_visited();
                self.open.push(ni, n.f(), nh);
            }
        };

        self.nbuf = nbuf;
        self.stats.pushed = self.open.pushed();

        if !found {
            log::debug!(
                "no path {start} -> {goal} (expanded {}, pushed {})",
                self.stats.expanded,
                self.stats.pushed
            );
            return Ok(Path::unreachable());
        }

        let path = reconstruct(grid, goal)?;
        log::debug!(
            "path {start} -> {goal}: {} tiles, cost {} (expanded {}, pushed {})",
            path.len(),
            path.cost(),
            self.stats.expanded,
            self.stats.pushed
        );
        Ok(path)
    }
}

/// Find a cheapest route with a fresh [`PathFinder`] and the Manhattan
/// heuristic. See [`PathFinder::find_path`].
pub fn find_path(
    grid: &mut Grid,
    start: impl Into<Point>,
    goal: impl Into<Point>,
) -> Result<Path, SearchError> {
    PathFinder::new().find_path(grid, start, goal)
}

fn endpoint(grid: &Grid, pos: Point) -> Result<usize, SearchError> {
    let Some(idx) = grid.index(pos) else {
        return Err(SearchError::InvalidEndpoint {
            pos,
            reason: EndpointReason::OutOfBounds,
        });
    };
    if grid.tiles()[idx].blocked() {
        return Err(SearchError::InvalidEndpoint {
            pos,
            reason: EndpointReason::Blocked,
        });
    }
    Ok(idx)
}

/// Follow parent links back from `goal`.
fn reconstruct(grid: &Grid, goal: Point) -> Result<Path, SearchError> {
    let cost = grid.state(goal)?.g();
    let mut steps = Vec::new();
    let mut cur = Some(goal);
    while let Some(p) = cur {
        steps.push(p);
        cur = grid.state(p)?.parent();
    }
    steps.reverse();
    Ok(Path::new(steps, cost))
}
