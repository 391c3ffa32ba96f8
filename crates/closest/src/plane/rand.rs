//! Random point sets in the plane (uniform box + replay tokens).
//!
//! Purpose
//! - Feed the solvers and the oracle with reproducible inputs for tests and
//!   benchmarks. Not used by the solvers themselves.
//!
//! Model
//! - Coordinates are drawn independently and uniformly from `[min.x, max.x)`
//!   and `[min.y, max.y)`; the default box is the unit square.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Error type for point generators.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorError {
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Axis-aligned sampling box `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformCfg {
    pub min: Point,
    pub max: Point,
}

impl Default for UniformCfg {
    fn default() -> Self {
        Self {
            min: Point::new(0.0, 0.0),
            max: Point::new(1.0, 1.0),
        }
    }
}

impl UniformCfg {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !(self.min.is_finite() && self.max.is_finite()) {
            return Err(GeneratorError::invalid("box bounds must be finite"));
        }
        if !(self.min.x < self.max.x && self.min.y < self.max.y) {
            return Err(GeneratorError::invalid("min < max required on both axes"));
        }
        Ok(())
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
        // SplitMix64-style mixing, cheap and stable.
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

/// Draw `n` points uniformly from the box in `cfg`.
pub fn draw_points_uniform(
    n: usize,
    cfg: UniformCfg,
    tok: ReplayToken,
) -> Result<Vec<Point>, GeneratorError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let points = (0..n)
        .map(|_| {
            Point::new(
                rng.gen_range(cfg.min.x..cfg.max.x),
                rng.gen_range(cfg.min.y..cfg.max.y),
            )
        })
        .collect();
    Ok(points)
}

/// Draw `n` points on the integer grid `[0, side)²`; duplicates and ties are common.
pub fn draw_points_grid(n: usize, side: u32, tok: ReplayToken) -> Result<Vec<Point>, GeneratorError> {
    if side == 0 {
        return Err(GeneratorError::invalid("grid side must be > 0"));
    }
    let mut rng = tok.to_std_rng();
    let points = (0..n)
        .map(|_| {
            Point::new(
                f64::from(rng.gen_range(0..side)),
                f64::from(rng.gen_range(0..side)),
            )
        })
        .collect();
    Ok(points)
}
