use tilepath_core::{Grid, Point, Tile};

/// An ordered route from a start tile to a goal tile, inclusive.
///
/// Steps are tile coordinates, i.e. keys into the [`Grid`] the path was found
/// on; resolve them with [`tiles`](Self::tiles). An empty path means the goal
/// was unreachable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    steps: Vec<Point>,
    cost: u64,
}

impl Path {
    pub(crate) fn new(steps: Vec<Point>, cost: u64) -> Self {
        Self { steps, cost }
    }

    /// The "no route" result.
    pub fn unreachable() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[Point] {
        &self.steps
    }

    /// Number of tiles, endpoints included.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn start(&self) -> Option<Point> {
        self.steps.first().copied()
    }

    pub fn goal(&self) -> Option<Point> {
        self.steps.last().copied()
    }

    /// Sum of the weights of every tile entered, i.e. all but the start.
    pub fn cost(&self) -> u64 {
        self.cost
    }

    pub fn contains(&self, p: Point) -> bool {
        self.steps.contains(&p)
    }

    /// Resolve the steps to tiles of `grid`. Steps outside `grid` are
    /// skipped, which only happens when given a different grid.
    pub fn tiles<'g>(&self, grid: &'g Grid) -> impl Iterator<Item = &'g Tile> {
        self.steps.iter().filter_map(move |&p| grid.tile(p).ok())
    }

    pub fn into_steps(self) -> Vec<Point> {
        self.steps
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
