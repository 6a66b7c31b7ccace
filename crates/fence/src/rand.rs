//! Random tagged point sets (integer grid + replay tokens).
//!
//! Purpose
//! - Deterministic inputs for benches, the CLI `sample` command, and randomized tests.
//!   Coordinates sit on the integer grid, like points captured from screen clicks.
//!
//! Model
//! - Obstacles first, then sentries; each coordinate uniform in the inclusive bounds.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::{PointSet, Role, TaggedPoint};

/// Inclusive integer bounds for sampled coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds2 {
    pub x_min: i64,
    pub x_max: i64,
    pub y_min: i64,
    pub y_max: i64,
}

impl Default for Bounds2 {
    /// Canvas-sized box.
    fn default() -> Self {
        Self {
            x_min: 0,
            x_max: 899,
            y_min: 0,
            y_max: 599,
        }
    }
}

/// Point-set sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RandomPointsCfg {
    pub obstacles: usize,
    pub sentries: usize,
    pub bounds: Bounds2,
}

impl Default for RandomPointsCfg {
    fn default() -> Self {
        Self {
            obstacles: 12,
            sentries: 8,
            bounds: Bounds2::default(),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.obstacles` obstacles followed by `cfg.sentries` sentries.
///
/// Inverted bounds are swapped rather than rejected.
pub fn draw_point_set(cfg: RandomPointsCfg, tok: ReplayToken) -> PointSet {
    let mut rng = tok.to_std_rng();
    let (x_lo, x_hi) = ordered(cfg.bounds.x_min, cfg.bounds.x_max);
    let (y_lo, y_hi) = ordered(cfg.bounds.y_min, cfg.bounds.y_max);
    let roles = std::iter::repeat(Role::Obstacle)
        .take(cfg.obstacles)
        .chain(std::iter::repeat(Role::Sentry).take(cfg.sentries));
    roles
        .map(|role| {
            let x = rng.gen_range(x_lo..=x_hi) as f64;
            let y = rng.gen_range(y_lo..=y_hi) as f64;
            TaggedPoint::new(role, Vector2::new(x, y))
        })
        .collect()
}

#[inline]
fn ordered(a: i64, b: i64) -> (i64, i64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
