//! Planar primitives: points, pairs and the robust distance.
//!
//! Purpose
//! - Keep the value types of the closest-pair problem small and `Copy`.
//! - Route every distance through one numerically careful 2-norm (`hypot`).
//!
//! Code cross-refs: `Point`, `Pair`, `Axis`, `hypot`, `distance`

pub mod metric;
pub mod rand;
mod types;

pub use metric::{distance, hypot};
pub use types::{Axis, Pair, Point};
