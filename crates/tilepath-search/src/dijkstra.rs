use tilepath_core::{Grid, Point, Range};

use crate::open::OpenSet;

/// Minimal entry cost from a set of sources to every reachable tile.
///
/// Built with Dijkstra's algorithm on the same movement model as
/// [`PathFinder`](crate::PathFinder): 4-connected steps, each costing the
/// weight of the tile entered. Unlike A* it keeps its own arrays and never
/// touches the grid's search bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMap {
    bounds: Range,
    costs: Vec<Option<u64>>,
}

impl CostMap {
    /// Expand from every unblocked, in-bounds source at cost 0. Tiles whose
    /// cost would exceed `max_cost` are left unreached.
    pub fn dijkstra(grid: &Grid, sources: &[Point], max_cost: u64) -> Self {
        let mut costs: Vec<Option<u64>> = vec![None; grid.len()];
        let mut open = OpenSet::default();

        for &src in sources {
            if let Some(si) = grid.index(src) {
                if grid.tiles()[si].blocked() || costs[si].is_some() {
                    continue;
                }
                costs[si] = Some(0);
                open.push(si, 0, 0);
            }
        }

        let mut closed = vec![false; grid.len()];
        let mut nbuf = Vec::with_capacity(4);
        let mut settled = 0usize;

        while let Some(current) = open.pop() {
            let ci = current.idx;
            if closed[ci] {
                continue;
            }
            closed[ci] = true;
            settled += 1;
            let cp = grid.point(ci);

            nbuf.clear();
            if grid.neighbors_into(cp, &mut nbuf).is_err() {
                continue;
            }

            for &np in nbuf.iter() {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                let tentative = current
                    .f
                    .saturating_add(u64::from(grid.tiles()[ni].weight()));
                if tentative > max_cost {
                    continue;
                }
                if costs[ni].is_some_and(|c| tentative >= c) {
                    continue;
                }
                costs[ni] = Some(tentative);
                open.push(ni, tentative, 0);
            }
        }

        log::debug!(
            "cost map from {} sources: {settled} tiles settled",
            sources.len()
        );
        Self {
            bounds: grid.bounds(),
            costs,
        }
    }

    /// Minimal cost to enter `p` from the nearest source, or `None` if it
    /// was not reached or lies outside the grid.
    pub fn cost_at(&self, p: Point) -> Option<u64> {
        self.bounds.index(p).and_then(|i| self.costs[i])
    }

    /// Number of reached tiles, sources included.
    pub fn reached(&self) -> usize {
        self.costs.iter().filter(|c| c.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilepath_core::Layout;

    fn grid(text: &str) -> Grid {
        Layout::parse(text).unwrap().to_grid().unwrap()
    }

    #[test]
    fn uniform_grid_costs_are_manhattan() {
        let g = Grid::new(4, 3).unwrap();
        let map = CostMap::dijkstra(&g, &[Point::ZERO], u64::MAX);
        for p in g.bounds() {
            assert_eq!(map.cost_at(p), Some((p.x + p.y) as u64));
        }
        assert_eq!(map.reached(), 12);
    }

    #[test]
    fn weights_and_walls() {
        let g = grid(
            "
.5.
.#.
...",
        );
        let map = CostMap::dijkstra(&g, &[Point::ZERO], u64::MAX);
        assert_eq!(map.cost_at(Point::new(1, 0)), Some(5));
        assert_eq!(map.cost_at(Point::new(2, 0)), Some(6));
        assert_eq!(map.cost_at(Point::new(1, 1)), None);
    }

    #[test]
    fn multi_source_and_limit() {
        let g = Grid::new(7, 1).unwrap();
        let map = CostMap::dijkstra(&g, &[Point::new(0, 0), Point::new(6, 0)], 2);
        assert_eq!(map.cost_at(Point::new(3, 0)), None);
        assert_eq!(map.cost_at(Point::new(5, 0)), Some(1));
        assert_eq!(map.reached(), 6);
    }

    #[test]
    fn blocked_and_foreign_sources_ignored() {
        let g = grid("#..");
        let map = CostMap::dijkstra(&g, &[Point::new(0, 0), Point::new(9, 9)], u64::MAX);
        assert_eq!(map.reached(), 0);
        assert_eq!(map.cost_at(Point::new(-1, 0)), None);
    }
}
