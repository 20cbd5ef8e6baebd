//! Demo settings: a TOML file, overridden by command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tilepath_core::Point;
use tilepath_gen::ObstacleConfig;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// TOML settings file; flags override its values.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Text layout to load instead of generating a grid.
    #[arg(short, long)]
    pub map: Option<PathBuf>,
    #[arg(long)]
    pub width: Option<i32>,
    #[arg(long)]
    pub height: Option<i32>,
    #[arg(short, long)]
    pub seed: Option<u64>,
    #[arg(long)]
    pub block_chance: Option<f64>,
    #[arg(long)]
    pub max_weight: Option<u32>,
    /// Start tile as `X,Y`. Defaults to the top-left corner.
    #[arg(long, value_parser = parse_point)]
    pub start: Option<Point>,
    /// Goal tile as `X,Y`. Defaults to the bottom-right corner.
    #[arg(long, value_parser = parse_point)]
    pub goal: Option<Point>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Settings after merging file and flags.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub width: i32,
    pub height: i32,
    pub seed: u64,
    pub map: Option<PathBuf>,
    pub start: Option<(i32, i32)>,
    pub goal: Option<(i32, i32)>,
    pub verbosity: u8,
    pub obstacles: ObstacleConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 16,
            seed: 42,
            map: None,
            start: None,
            goal: None,
            verbosity: 0,
            obstacles: ObstacleConfig::default(),
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Load the file named by `--config` (if any) and apply the flags.
    pub fn from_args(args: &Args) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply(args);
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no grid can be built from.
    pub fn validate(&self) -> Result<()> {
        let chance = self.obstacles.block_chance;
        anyhow::ensure!(!chance.is_nan(), "block_chance must be a number, got {chance}");
        Ok(())
    }

    pub fn apply(&mut self, args: &Args) {
        if let Some(map) = &args.map {
            self.map = Some(map.clone());
        }
        if let Some(w) = args.width {
            self.width = w;
        }
        if let Some(h) = args.height {
            self.height = h;
        }
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
        if let Some(chance) = args.block_chance {
            self.obstacles.block_chance = chance;
        }
        if let Some(w) = args.max_weight {
            self.obstacles.max_weight = w;
        }
        if let Some(p) = args.start {
            self.start = Some((p.x, p.y));
        }
        if let Some(p) = args.goal {
            self.goal = Some((p.x, p.y));
        }
        self.verbosity = self.verbosity.max(args.verbose);
    }

    /// Start tile, the top-left corner unless configured.
    pub fn start_point(&self) -> Point {
        self.start.map(Point::from).unwrap_or(Point::ZERO)
    }

    /// Goal tile for a grid of the given size.
    pub fn goal_for(&self, width: i32, height: i32) -> Point {
        self.goal
            .map(Point::from)
            .unwrap_or(Point::new(width - 1, height - 1))
    }
}

/// Parse `X,Y` into a point.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_point_accepts_spaces() {
        assert_eq!(parse_point("3, 4"), Ok(Point::new(3, 4)));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn load_partial_toml_keeps_defaults() {
        let mut file = NamedTempFile::new().expect("tempfile");
        writeln!(
            file,
            "width = 12\nseed = 7\ngoal = [5, 6]\n\n[obstacles]\nblock_chance = 0.1"
        )
        .expect("write");

        let config = DemoConfig::load(file.path()).expect("load");
        assert_eq!(config.width, 12);
        assert_eq!(config.height, DemoConfig::default().height);
        assert_eq!(config.seed, 7);
        assert_eq!(config.goal, Some((5, 6)));
        assert_eq!(config.obstacles.block_chance, 0.1);
        assert_eq!(config.obstacles.max_weight, 1);
    }

    #[test]
    fn load_reports_bad_toml() {
        let mut file = NamedTempFile::new().expect("tempfile");
        writeln!(file, "width = \"wide\"").expect("write");
        let err = DemoConfig::load(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config"));
    }

    #[test]
    fn nan_block_chance_rejected() {
        let mut file = NamedTempFile::new().expect("tempfile");
        writeln!(file, "[obstacles]\nblock_chance = nan").expect("write");
        let args = Args {
            config: Some(file.path().to_path_buf()),
            ..Args::default()
        };
        let err = DemoConfig::from_args(&args).unwrap_err();
        assert!(err.to_string().contains("block_chance"));

        let flagged = Args {
            block_chance: Some(f64::NAN),
            ..Args::default()
        };
        assert!(DemoConfig::from_args(&flagged).is_err());
        assert!(DemoConfig::from_args(&Args::default()).is_ok());
    }

    #[test]
    fn flags_override_file_values() {
        let mut config = DemoConfig {
            width: 10,
            seed: 1,
            ..DemoConfig::default()
        };
        let args = Args {
            seed: Some(99),
            block_chance: Some(0.5),
            start: Some(Point::new(2, 3)),
            verbose: 2,
            ..Args::default()
        };
        config.apply(&args);
        assert_eq!(config.width, 10);
        assert_eq!(config.seed, 99);
        assert_eq!(config.obstacles.block_chance, 0.5);
        assert_eq!(config.start, Some((2, 3)));
        assert_eq!(config.verbosity, 2);
    }

    #[test]
    fn default_endpoints_are_opposite_corners() {
        let config = DemoConfig::default();
        assert_eq!(config.start_point(), Point::ZERO);
        assert_eq!(config.goal_for(8, 5), Point::new(7, 4));
    }

    #[test]
    fn cli_parses_points_and_verbosity() {
        let args = Args::parse_from(["tilepath-demo", "--goal", "4,2", "-vv", "--width", "9"]);
        assert_eq!(args.goal, Some(Point::new(4, 2)));
        assert_eq!(args.verbose, 2);
        assert_eq!(args.width, Some(9));
    }
}
