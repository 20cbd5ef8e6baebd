//! Hand-authored maps built from text.
//!
//! A [`Layout`] parses an ASCII picture into passability and weights:
//!
//! | Char | Meaning |
//! |---|---|
//! | `#` | blocked |
//! | `.` | open, weight 1 |
//! | `1`..=`9` | open, that weight |
//!
//! Lines must all have the same width. Leading/trailing whitespace is
//! trimmed from the whole text but not from individual lines.

use crate::error::GridError;
use crate::geom::Point;
use crate::grid::Grid;

pub const BLOCKED_CHAR: char = '#';
pub const OPEN_CHAR: char = '.';

/// A parsed text map. `None` marks a blocked cell, `Some(w)` an open cell of
/// weight `w`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    size: Point,
    cells: Vec<Option<u32>>,
}

impl Layout {
    /// Parse a layout from text.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LayoutError::Empty);
        }
        let mut cells = Vec::with_capacity(s.len());
        let mut width: Option<i32> = None;
        let mut height = 0;

        for (y, line) in s.lines().enumerate() {
            let y = y as i32;
            let mut x = 0;
            for ch in line.chars() {
                let cell = match ch {
                    BLOCKED_CHAR => None,
                    OPEN_CHAR => Some(1),
                    '1'..='9' => ch.to_digit(10),
                    _ => {
                        return Err(LayoutError::InvalidChar {
                            ch,
                            pos: Point::new(x, y),
                        });
                    }
                };
                cells.push(cell);
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(LayoutError::InconsistentWidth {
                        line: y,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        Ok(Self {
            size: Point::new(width.unwrap_or(0), height),
            cells,
        })
    }

    /// Width and height in tiles.
    pub fn size(&self) -> Point {
        self.size
    }

    /// Build a grid matching this layout.
    pub fn to_grid(&self) -> Result<Grid, GridError> {
        let w = self.size.x;
        let at = |p: Point| self.cells[(p.y * w + p.x) as usize];
        let mut grid = Grid::from_fn(self.size.x, self.size.y, |p| at(p).is_some())?;
        for p in grid.bounds() {
            match at(p) {
                Some(weight) if weight != 1 => grid.set_weight(p, weight)?,
                _ => {}
            }
        }
        Ok(grid)
    }
}

impl std::str::FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Grid {
    /// Render the structural picture of the grid in [`Layout`] syntax.
    ///
    /// Weights above 9 are shown as `9`.
    pub fn to_layout_string(&self) -> String {
        let mut out = String::with_capacity(self.len() + self.height() as usize);
        for (i, t) in self.tiles().iter().enumerate() {
            if i > 0 && t.x() == 0 {
                out.push('\n');
            }
            let ch = match (t.blocked(), t.weight()) {
                (true, _) => BLOCKED_CHAR,
                (false, 1) => OPEN_CHAR,
                (false, w) => char::from_digit(w.min(9), 10).unwrap_or('9'),
            };
            out.push(ch);
        }
        out
    }
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// No lines after trimming.
    #[error("layout is empty")]
    Empty,
    /// A line's width differs from the first line's.
    #[error("layout line {line} has width {found}, expected {expected}")]
    InconsistentWidth { line: i32, expected: i32, found: i32 },
    /// A character outside the layout alphabet.
    #[error("layout contains invalid char \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Point },
}
