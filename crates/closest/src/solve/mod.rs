//! Closest-pair solvers.
//!
//! Purpose
//! - `closest_pair`: exact closest pair of a planar point set via
//!   axis-alternating divide and conquer.
//! - `brute_force`: the O(n²) reference, also the base case for tiny ranges.
//! - `oracle`: runs both on one input for tests.
//!
//! Contract
//! - Inputs need at least two points (`ClosestPairError::InvalidInput` otherwise).
//! - Both solvers return the same pair: among pairs at the minimum distance, the
//!   one with the smallest input indices `(i, j)`, `i < j`, wins.
//! - NaN/infinite coordinates follow `plane::hypot` unless `SolveCfg::reject_non_finite`;
//!   NaN distances rank after every number.
//!
//! Code cross-refs: `plane::{Point, Pair, Axis, distance}`

mod brute;
mod divide;
pub mod oracle;
mod types;

pub use brute::brute_force;
pub use types::{ClosestPairError, SolveCfg, Solver};

use std::cmp::Ordering;

use crate::plane::{Axis, Pair, Point};

/// Order along `axis`; `-0.0` and `0.0` tie, NaN sorts by sign at either end.
#[inline]
pub(crate) fn cmp_along(axis: Axis, a: &Point, b: &Point) -> Ordering {
    // `+ 0.0` turns -0.0 into 0.0
    (a.coord(axis) + 0.0).total_cmp(&(b.coord(axis) + 0.0))
}

/// Stable copy of `points` sorted by one coordinate.
pub fn sort_by_axis(points: &[Point], axis: Axis) -> Vec<Point> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| cmp_along(axis, a, b));
    sorted
}

/// Closest pair with the default solver and config.
pub fn closest_pair(points: &[Point]) -> Result<Pair, ClosestPairError> {
    closest_pair_with(points, Solver::default(), &SolveCfg::default())
}

/// Closest pair with an explicit strategy and config.
pub fn closest_pair_with(
    points: &[Point],
    solver: Solver,
    cfg: &SolveCfg,
) -> Result<Pair, ClosestPairError> {
    cfg.validate()?;
    if points.len() < 2 {
        return Err(ClosestPairError::InvalidInput { len: points.len() });
    }
    if cfg.reject_non_finite {
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(ClosestPairError::NonFiniteCoordinate { index });
        }
    }
    tracing::debug!(n = points.len(), ?solver, "closest_pair");
    match solver {
        Solver::BruteForce => brute_force(points),
        Solver::DivideAndConquer => divide::divide_and_conquer(points, cfg),
    }
}

#[cfg(test)]
mod tests;
