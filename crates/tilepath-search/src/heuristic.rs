use tilepath_core::Point;

/// Estimate of the remaining cost between two tiles.
///
/// Implementations must never overestimate the true cost (admissible) and
/// must satisfy the triangle inequality over single steps (consistent), or
/// [`PathFinder`](crate::PathFinder) may report suboptimal paths.
pub trait Heuristic {
    fn estimate(&self, from: Point, to: Point) -> u32;
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// Manhattan distance heuristic. Admissible and consistent for 4-connected
/// movement where every step costs at least 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> u32 {
        manhattan(from, to)
    }
}

impl<F: Fn(Point, Point) -> u32> Heuristic for F {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> u32 {
        self(from, to)
    }
}
