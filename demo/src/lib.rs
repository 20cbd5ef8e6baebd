//! Command-line caller around the tilepath crates: builds a grid from a
//! text layout or the obstacle generator, runs A*, and draws the result.

pub mod config;
pub mod logger;
pub mod render;

use std::fs;

use anyhow::{Context, Result};
use rand::SeedableRng;
use tilepath_core::{Grid, Layout, Point};
use tilepath_gen::ObstacleGen;
use tilepath_search::{Path, PathFinder};

pub use config::{Args, DemoConfig};

/// Everything one demo run produced.
#[derive(Debug)]
pub struct Outcome {
    pub grid: Grid,
    pub path: Path,
    pub start: Point,
    pub goal: Point,
}

impl Outcome {
    pub fn picture(&self) -> String {
        render::render(&self.grid, &self.path, self.start, self.goal)
    }

    pub fn summary(&self) -> String {
        if self.path.is_empty() {
            format!("no path from {} to {}", self.start, self.goal)
        } else {
            format!(
                "path from {} to {}: {} tiles, cost {}",
                self.start,
                self.goal,
                self.path.len(),
                self.path.cost()
            )
        }
    }
}

/// Build the grid described by `config` and search it.
pub fn run(config: &DemoConfig) -> Result<Outcome> {
    let start = config.start_point();
    let mut grid = match &config.map {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading map {}", path.display()))?;
            let layout = Layout::parse(&text)
                .with_context(|| format!("parsing map {}", path.display()))?;
            layout.to_grid()?
        }
        None => {
            let goal = config.goal_for(config.width, config.height);
            let rng = rand::rngs::StdRng::seed_from_u64(config.seed);
            ObstacleGen::new(rng, config.obstacles.clone())
                .generate(config.width, config.height, &[start, goal])
                .context("generating grid")?
        }
    };
    let goal = config.goal_for(grid.width(), grid.height());
    log::info!(
        "searching {}x{} grid ({} blocked) from {start} to {goal}",
        grid.width(),
        grid.height(),
        grid.count_blocked()
    );

    let mut finder = PathFinder::new();
    let path = finder.find_path(&mut grid, start, goal)?;
    Ok(Outcome {
        grid,
        path,
        start,
        goal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn generated_run_is_reproducible() {
        let config = DemoConfig {
            width: 12,
            height: 8,
            seed: 5,
            ..DemoConfig::default()
        };
        let a = run(&config).unwrap();
        let b = run(&config).unwrap();
        assert_eq!(a.picture(), b.picture());
        assert_eq!(a.path, b.path);
    }

    #[test]
    fn map_file_run() {
        let mut file = NamedTempFile::new().expect("tempfile");
        writeln!(file, "...\n.#.\n...").expect("write");
        let config = DemoConfig {
            map: Some(file.path().to_path_buf()),
            ..DemoConfig::default()
        };
        let out = run(&config).unwrap();
        assert_eq!(out.goal, Point::new(2, 2));
        assert_eq!(out.path.cost(), 4);
        assert!(out.summary().contains("cost 4"));
    }

    #[test]
    fn blocked_goal_in_map_is_an_error() {
        let mut file = NamedTempFile::new().expect("tempfile");
        writeln!(file, "..\n.#").expect("write");
        let config = DemoConfig {
            map: Some(file.path().to_path_buf()),
            ..DemoConfig::default()
        };
        let err = run(&config).unwrap_err();
        assert!(err.to_string().contains("blocked"));
    }

    #[test]
    fn walled_off_goal_reports_no_path() {
        let mut file = NamedTempFile::new().expect("tempfile");
        writeln!(file, ".#.").expect("write");
        let config = DemoConfig {
            map: Some(file.path().to_path_buf()),
            ..DemoConfig::default()
        };
        let out = run(&config).unwrap();
        assert!(out.path.is_empty());
        assert!(out.summary().starts_with("no path"));
    }
}
