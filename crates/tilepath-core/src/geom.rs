//! Tile coordinates and grid extents.
//!
//! X grows east, Y grows south. Every grid is anchored at (0, 0), so a
//! [`Range`] is just a width and a height, and it alone defines the
//! row-major mapping between coordinates and flat indices.

use std::fmt;
use std::ops::Add;

/// A tile coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Unit steps west, east, south and north, in the order neighbors are
    /// reported.
    pub const CARDINALS: [Self; 4] = [
        Self { x: -1, y: 0 },
        Self { x: 1, y: 0 },
        Self { x: 0, y: 1 },
        Self { x: 0, y: -1 },
    ];

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four coordinates one step away, in [`CARDINALS`](Self::CARDINALS)
    /// order. Some may lie outside any given grid.
    #[inline]
    pub fn cardinal_neighbors(self) -> [Self; 4] {
        Self::CARDINALS.map(|d| self + d)
    }

    /// Whether `other` is exactly one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// The extent of a grid: every coordinate with `0 <= x < width` and
/// `0 <= y < height`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    width: i32,
    height: i32,
}

impl Range {
    /// Negative sizes are treated as zero.
    #[inline]
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self {
            width: if width > 0 { width } else { 0 },
            height: if height > 0 { height } else { 0 },
        }
    }

    #[inline]
    pub const fn width(self) -> i32 {
        self.width
    }

    #[inline]
    pub const fn height(self) -> i32 {
        self.height
    }

    /// Number of coordinates covered.
    #[inline]
    pub const fn area(self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub const fn contains(self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Row-major flat index of `p`, or `None` outside the range.
    #[inline]
    pub const fn index(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Coordinate at a row-major flat index. Meaningful for
    /// `idx < self.area()`.
    #[inline]
    pub const fn point(self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Every coordinate in row-major order, i.e. by increasing index.
    pub fn iter(self) -> Points {
        Points {
            range: self,
            next: 0,
            end: self.area(),
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = Points;

    fn into_iter(self) -> Points {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Iterator returned by [`Range::iter`].
#[derive(Clone, Debug)]
pub struct Points {
    range: Range,
    next: usize,
    end: usize,
}

impl Iterator for Points {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.end {
            return None;
        }
        let p = self.range.point(self.next);
        self.next += 1;
        Some(p)
    }
}
