//! Exact closest pair of points in the plane.
//!
//! - `plane`: `Point`, `Pair`, `Axis` and the overflow-safe `distance`.
//! - `solve`: brute-force and divide-and-conquer solvers plus the cross-check oracle.
//! - `plane::rand`: reproducible random point sets for tests and benchmarks.
//!
//! API Policy
//! - `api` is the curated surface; module paths may move between versions.

pub mod api;
pub mod plane;
pub mod solve;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;
pub use plane::{distance, hypot, Axis, Pair, Point};
pub use solve::{brute_force, closest_pair, closest_pair_with, ClosestPairError, SolveCfg, Solver};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::plane::rand::{draw_points_uniform, ReplayToken, UniformCfg};
    pub use crate::plane::{distance, Axis, Pair, Point};
    pub use crate::solve::{
        brute_force, closest_pair, closest_pair_with, ClosestPairError, SolveCfg, Solver,
    };
}
