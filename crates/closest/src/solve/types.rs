//! Solver configuration, strategy tag and error type.

use std::fmt;

/// Error type shared by all solver entry points.
#[derive(Debug, Clone, PartialEq)]
pub enum ClosestPairError {
    /// Fewer than two points were supplied.
    InvalidInput { len: usize },
    /// A coordinate is NaN or infinite and `SolveCfg::reject_non_finite` is set.
    NonFiniteCoordinate { index: usize },
    InvalidConfig { reason: String },
}

impl ClosestPairError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ClosestPairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { len } => {
                write!(f, "closest pair needs at least 2 points, got {len}")
            }
            Self::NonFiniteCoordinate { index } => {
                write!(f, "point {index} has a non-finite coordinate")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid solver config: {reason}"),
        }
    }
}

impl std::error::Error for ClosestPairError {}

/// Which solver answers a query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Solver {
    /// Exhaustive O(n²) scan.
    BruteForce,
    /// Axis-alternating divide and conquer.
    #[default]
    DivideAndConquer,
}

/// Solver tuning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolveCfg {
    /// Strips with at most this many points are brute-forced instead of recursed.
    pub strip_brute_force_max: usize,
    /// Solve both halves with `rayon::join` once a range has at least this many points.
    pub parallel_min_len: Option<usize>,
    /// Reject NaN/infinite coordinates up front instead of propagating them.
    pub reject_non_finite: bool,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            strip_brute_force_max: 6,
            parallel_min_len: None,
            reject_non_finite: false,
        }
    }
}

impl SolveCfg {
    /// Default config with fork-join enabled from `min_len` points up.
    pub fn parallel(min_len: usize) -> Self {
        Self {
            parallel_min_len: Some(min_len),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ClosestPairError> {
        if let Some(m) = self.parallel_min_len {
            // ranges below 4 points never split
            if m < 4 {
                return Err(ClosestPairError::config("parallel_min_len must be >= 4"));
            }
        }
        Ok(())
    }
}
