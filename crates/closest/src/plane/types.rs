//! Point, pair and axis types for the planar closest-pair solvers.
//!
//! - `Point`: immutable `(x, y)` with exact coordinate equality (no epsilon).
//! - `Pair`: two points plus their cached distance; the cache is only ever
//!   written together with the points.
//! - `Axis`: recursion axis selector used by the divide-and-conquer solver.
//!
//! Code cross-refs: `metric::distance`, `solve::{brute, divide}`

use std::cmp::Ordering;
use std::fmt;

use nalgebra::Vector2;

use super::metric::distance;

/// A point in the Cartesian plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    /// Coordinate along `axis`.
    #[inline]
    pub fn coord(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vec2()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Recursion axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Two points and their Euclidean distance.
///
/// Invariants:
/// - `distance == metric::distance(p1, p2)` at all times.
/// - Equality treats `{p1, p2}` as an unordered set and compares the distance exactly.
///
/// Ordering is by distance only and lives in `cmp_distance`; it is not a
/// `PartialOrd` impl since two unequal pairs may share a distance.
#[derive(Clone, Copy, Debug)]
pub struct Pair {
    p1: Point,
    p2: Point,
    distance: f64,
}

impl Pair {
    #[inline]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self {
            p1,
            p2,
            distance: distance(p1, p2),
        }
    }
    #[inline]
    pub fn p1(&self) -> Point {
        self.p1
    }
    #[inline]
    pub fn p2(&self) -> Point {
        self.p2
    }
    #[inline]
    pub fn points(&self) -> (Point, Point) {
        (self.p1, self.p2)
    }
    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }
    /// Replace both points and recompute the distance.
    pub fn set_points(&mut self, p1: Point, p2: Point) {
        *self = Self::new(p1, p2);
    }
    /// True if `p` is one of the two points.
    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.p1 == *p || self.p2 == *p
    }
    /// Total order by distance (`f64::total_cmp`, NaN sorts last).
    #[inline]
    pub fn cmp_distance(&self, other: &Pair) -> Ordering {
        self.distance.total_cmp(&other.distance)
    }
}

impl PartialEq for Pair {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
            && ((self.p1 == other.p1 && self.p2 == other.p2)
                || (self.p1 == other.p2 && self.p2 == other.p1))
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} : {}", self.p1, self.p2, self.distance)
    }
}
