//! Map generation for tilepath grids.

pub mod obstacles;

pub use obstacles::{ObstacleConfig, ObstacleGen};
