//! Random obstacle layouts.
//!
//! Each tile is independently blocked with a fixed probability and, when
//! open, given a uniformly drawn weight. Seed the RNG for reproducible maps.

use rand::{Rng, RngExt};
use tilepath_core::{Grid, GridError, Point};

/// Parameters for [`ObstacleGen`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ObstacleConfig {
    /// Probability that a tile is blocked, clamped to `[0, 1]`. `NaN` reads
    /// as 0.
    pub block_chance: f64,
    /// Open tiles draw a weight in `1..=max_weight`. Zero is treated as 1.
    pub max_weight: u32,
}

impl ObstacleConfig {
    /// The block probability actually used by [`ObstacleGen`].
    pub fn effective_chance(&self) -> f64 {
        if self.block_chance.is_nan() {
            0.0
        } else {
            self.block_chance.clamp(0.0, 1.0)
        }
    }
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            block_chance: 0.25,
            max_weight: 1,
        }
    }
}

/// Grid generator driven by a caller-supplied RNG.
pub struct ObstacleGen<R: Rng> {
    pub rng: R,
    pub config: ObstacleConfig,
}

impl<R: Rng> ObstacleGen<R> {
    pub fn new(rng: R, config: ObstacleConfig) -> Self {
        Self { rng, config }
    }

    /// Generate a `width x height` grid. Points in `keep_open` are never
    /// blocked, so callers can guarantee usable endpoints.
    pub fn generate(
        &mut self,
        width: i32,
        height: i32,
        keep_open: &[Point],
    ) -> Result<Grid, GridError> {
        let chance = self.config.effective_chance();
        let max_weight = self.config.max_weight.max(1);

        let rng = &mut self.rng;
        let mut grid = Grid::from_fn(width, height, |p| {
            let r: f64 = rng.random();
            keep_open.contains(&p) || r >= chance
        })?;

        if max_weight > 1 {
            for p in grid.bounds() {
                if grid.tile(p)?.blocked() {
                    continue;
                }
                let w = self.rng.random_range(1..=max_weight);
                grid.set_weight(p, w)?;
            }
        }

        log::debug!(
            "generated {width}x{height} grid: {} blocked (chance {chance:.2}, max weight {max_weight})",
            grid.count_blocked()
        );
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded(seed: u64, config: ObstacleConfig) -> ObstacleGen<StdRng> {
        ObstacleGen::new(StdRng::seed_from_u64(seed), config)
    }

    #[test]
    fn same_seed_same_grid() {
        let a = seeded(7, ObstacleConfig::default()).generate(20, 10, &[]).unwrap();
        let b = seeded(7, ObstacleConfig::default()).generate(20, 10, &[]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn produces_mixed_terrain() {
        let g = seeded(3, ObstacleConfig::default())
            .generate(30, 30, &[])
            .unwrap();
        let blocked = g.count_blocked();
        assert!(blocked > 0);
        assert!(blocked < 30 * 30);
    }

    #[test]
    fn keep_open_points_never_blocked() {
        let config = ObstacleConfig {
            block_chance: 1.0,
            max_weight: 1,
        };
        let keep = [Point::new(0, 0), Point::new(4, 4)];
        let g = seeded(1, config).generate(5, 5, &keep).unwrap();
        assert_eq!(g.count_blocked(), 23);
        for p in keep {
            assert!(!g.tile(p).unwrap().blocked());
        }
    }

    #[test]
    fn weights_within_range() {
        let config = ObstacleConfig {
            block_chance: 0.0,
            max_weight: 4,
        };
        let g = seeded(11, config).generate(12, 12, &[]).unwrap();
        assert_eq!(g.count_blocked(), 0);
        assert!(g.tiles().iter().all(|t| (1..=4).contains(&t.weight())));
        assert!(g.tiles().iter().any(|t| t.weight() > 1));
    }

    #[test]
    fn out_of_range_chance_is_clamped() {
        let config = ObstacleConfig {
            block_chance: -3.0,
            max_weight: 0,
        };
        let g = seeded(5, config).generate(6, 6, &[]).unwrap();
        assert_eq!(g.count_blocked(), 0);
        assert!(g.tiles().iter().all(|t| t.weight() == 1));
    }

    #[test]
    fn nan_chance_blocks_nothing() {
        let config = ObstacleConfig {
            block_chance: f64::NAN,
            max_weight: 1,
        };
        assert_eq!(config.effective_chance(), 0.0);
        let g = seeded(9, config).generate(8, 8, &[]).unwrap();
        assert_eq!(g.count_blocked(), 0);
    }

    #[test]
    fn invalid_dimensions_propagate() {
        let err = seeded(0, ObstacleConfig::default())
            .generate(0, 4, &[])
            .unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidDimensions {
                width: 0,
                height: 4
            }
        );
    }
}
