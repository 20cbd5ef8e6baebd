//! Shortest paths on weighted, 4-connected tile grids.
//!
//! - **A\*** point-to-point search ([`PathFinder::find_path`], [`find_path`])
//! - **Dijkstra** cost maps from one or more sources ([`CostMap::dijkstra`])
//!
//! Movement is cardinal only. Entering a tile costs its
//! [`weight`](tilepath_core::Tile::weight), so a path's cost is the sum of
//! weights of every tile after the start.
//!
//! ```
//! use tilepath_core::{Grid, Point};
//! use tilepath_search::find_path;
//!
//! let mut grid = Grid::from_fn(3, 3, |p| p != Point::new(1, 1)).unwrap();
//! let path = find_path(&mut grid, Point::new(0, 0), Point::new(2, 2)).unwrap();
//! assert_eq!(path.cost(), 4);
//! assert!(!path.contains(Point::new(1, 1)));
//! ```

mod astar;
mod dijkstra;
mod error;
mod heuristic;
mod open;
mod path;

pub use astar::{PathFinder, SearchStats, find_path};
pub use dijkstra::CostMap;
pub use error::{EndpointReason, SearchError};
pub use heuristic::{Heuristic, Manhattan, manhattan};
pub use path::Path;
