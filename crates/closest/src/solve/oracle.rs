//! Cross-check of the divide-and-conquer solver against brute force.
//!
//! Test harness helper, not a production path: both solvers run on the same
//! input and the report says whether they agree.

use crate::plane::{Pair, Point};

use super::types::{ClosestPairError, SolveCfg, Solver};
use super::closest_pair_with;

/// Both answers for one input.
#[derive(Clone, Copy, Debug)]
pub struct OracleReport {
    pub brute: Pair,
    pub divide: Pair,
}

impl OracleReport {
    /// Same unordered pair and same distance; a NaN distance never agrees.
    #[inline]
    pub fn agree(&self) -> bool {
        self.brute == self.divide
    }
    /// Same distance only.
    #[inline]
    pub fn distances_agree(&self) -> bool {
        self.brute.distance() == self.divide.distance()
    }
}

/// Run brute force and divide and conquer on `points` with `cfg`.
pub fn evaluate(points: &[Point], cfg: &SolveCfg) -> Result<OracleReport, ClosestPairError> {
    let brute = closest_pair_with(points, Solver::BruteForce, cfg)?;
    let divide = closest_pair_with(points, Solver::DivideAndConquer, cfg)?;
    if brute != divide {
        tracing::debug!(%brute, %divide, n = points.len(), "solvers disagree");
    }
    Ok(OracleReport { brute, divide })
}

/// `true` if both solvers return the same pair under the default config.
pub fn evaluate_result(points: &[Point]) -> Result<bool, ClosestPairError> {
    Ok(evaluate(points, &SolveCfg::default())?.agree())
}
