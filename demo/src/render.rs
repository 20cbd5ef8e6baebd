//! Plain-text picture of a grid after a search.

use tilepath_core::{Grid, Point};
use tilepath_search::Path;

pub const CH_BLOCKED: char = '#';
pub const CH_OPEN: char = '.';
pub const CH_VISITED: char = '+';
pub const CH_CLOSED: char = 'o';
pub const CH_PATH: char = '*';
pub const CH_START: char = 'S';
pub const CH_GOAL: char = 'G';

/// Draw `grid` row by row, overlaying search bookkeeping, then `path`, then
/// the endpoints.
pub fn render(grid: &Grid, path: &Path, start: Point, goal: Point) -> String {
    let w = grid.width() as usize;
    let mut cells: Vec<char> = Vec::with_capacity(grid.len());

    // ---- Terrain and search marks ----
    for v in grid.views() {
        let ch = if v.blocked() {
            CH_BLOCKED
        } else if v.closed() {
            CH_CLOSED
        } else if v.visited() {
            CH_VISITED
        } else {
            CH_OPEN
        };
        cells.push(ch);
    }

    // ---- Path overlay ----
    for &p in path {
        if let Some(i) = grid.index(p) {
            cells[i] = CH_PATH;
        }
    }

    // ---- Endpoints ----
    if let Some(i) = grid.index(start) {
        cells[i] = CH_START;
    }
    if let Some(i) = grid.index(goal) {
        cells[i] = CH_GOAL;
    }

    let mut out = String::with_capacity(cells.len() + grid.height() as usize);
    for row in cells.chunks(w) {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilepath_core::Layout;
    use tilepath_search::find_path;

    #[test]
    fn draws_path_and_endpoints() {
        let mut g = Layout::parse("...\n.#.\n...").unwrap().to_grid().unwrap();
        let (s, e) = (Point::new(0, 0), Point::new(2, 0));
        let path = find_path(&mut g, s, e).unwrap();
        let pic = render(&g, &path, s, e);
        let rows: Vec<&str> = pic.lines().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], "S*G");
        assert_eq!(&rows[1][1..2], "#");
    }

    #[test]
    fn unreachable_shows_search_marks() {
        let mut g = Layout::parse(".#.").unwrap().to_grid().unwrap();
        let (s, e) = (Point::new(0, 0), Point::new(2, 0));
        let path = find_path(&mut g, s, e).unwrap();
        assert!(path.is_empty());
        assert_eq!(render(&g, &path, s, e), "S#G\n");
    }
}
