//! Curated API surface.
//!
//! Re-exports grouped by role so callers do not depend on module layout.

// Value types and the metric
pub use crate::plane::{distance, hypot, Axis, Pair, Point};
// Solvers
pub use crate::solve::{
    brute_force, closest_pair, closest_pair_with, sort_by_axis, ClosestPairError, SolveCfg,
    Solver,
};
// Cross-check
pub use crate::solve::oracle::{evaluate as evaluate_solvers, evaluate_result, OracleReport};
// Random inputs
pub use crate::plane::rand::{
    draw_points_grid, draw_points_uniform, GeneratorError, ReplayToken as PointsReplay,
    UniformCfg,
};
