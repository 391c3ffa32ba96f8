//! Divide-and-conquer closest pair with alternating split axis.
//!
//! One recursion, parameterized by `Axis`:
//! - split the axis-sorted range at `((n + n%2)/2) - n%2` (both halves keep >= 2 points),
//! - solve both halves on the same axis and keep the closer pair (`dmin`),
//! - cut the strip of points within `dmin` of the splitting line,
//! - solve the strip on the other axis (re-sorted copy) or by brute force when small.
//!
//! Only cross pairs with both points inside the strip can reach `dmin`, so the
//! strip result is exact and the whole result is the exact closest pair.
//!
//! Points carry their input index. Equal distances go to the smaller index pair
//! `(i, j)`, `i < j`, in every combine, which is the pair `brute_force` keeps.
//!
//! Code cross-refs: `brute::{brute_force, closer}`, `types::SolveCfg`, `super::cmp_along`

use crate::plane::{Axis, Pair, Point};

use super::brute::closer;
use super::cmp_along;
use super::types::{ClosestPairError, SolveCfg};

/// Point plus its index in the caller's input.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Indexed {
    pub p: Point,
    pub idx: usize,
}

/// A pair together with the input indices it came from, smaller index first.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    pair: Pair,
    key: (usize, usize),
}

impl Candidate {
    fn new(a: Indexed, b: Indexed) -> Self {
        let (a, b) = if a.idx <= b.idx { (a, b) } else { (b, a) };
        Self {
            pair: Pair::new(a.p, b.p),
            key: (a.idx, b.idx),
        }
    }
    #[inline]
    fn distance(&self) -> f64 {
        self.pair.distance()
    }
    /// Closer, or equally close with a smaller index pair. Two NaN distances tie.
    #[inline]
    fn beats(&self, other: &Candidate) -> bool {
        let (d, e) = (self.distance(), other.distance());
        let tied = d == e || (d.is_nan() && e.is_nan());
        closer(d, e) || (tied && self.key < other.key)
    }
}

/// Closest pair of `points` (any order, at least two).
pub(crate) fn divide_and_conquer(
    points: &[Point],
    cfg: &SolveCfg,
) -> Result<Pair, ClosestPairError> {
    if points.len() < 2 {
        return Err(ClosestPairError::InvalidInput { len: points.len() });
    }
    let mut by_x: Vec<Indexed> = points
        .iter()
        .enumerate()
        .map(|(idx, &p)| Indexed { p, idx })
        .collect();
    let mut by_y = by_x.clone();
    by_x.sort_by(|a, b| {
        cmp_along(Axis::X, &a.p, &b.p).then_with(|| cmp_along(Axis::Y, &a.p, &b.p))
    });
    by_y.sort_by(|a, b| cmp_along(Axis::Y, &a.p, &b.p));

    if let Some(dup) = first_duplicate(&by_x) {
        return Ok(dup.pair);
    }
    solve_axis(&by_x, Some(&by_y), Axis::X, false, cfg).map(|c| c.pair)
}

/// Smallest-index pair of coincident finite points, if any.
///
/// `by_x` is sorted by (x, y) and stably by index, so each run of equal points is
/// contiguous and its first two entries hold the run's smallest index pair.
fn first_duplicate(by_x: &[Indexed]) -> Option<Candidate> {
    by_x.windows(2)
        .filter(|w| w[0].p == w[1].p && w[0].p.is_finite())
        .map(|w| Candidate::new(w[0], w[1]))
        .min_by_key(|c| c.key)
}

/// Split index for a range of `n > 3` points; both halves get at least two points.
#[inline]
pub(crate) fn split_index(n: usize) -> usize {
    (n + n % 2) / 2 - n % 2
}

/// Half-open strip `[start, end)` of points within `dmin` of `line` along `axis`.
///
/// Linear scan: `start` is the first index with `line - c <= dmin` (0 if none),
/// `end` the first index from `start` on with `c - line > dmin` (n if none).
pub(crate) fn strip_bounds(
    points: &[Indexed],
    axis: Axis,
    line: f64,
    dmin: f64,
) -> (usize, usize) {
    let n = points.len();
    let Some(start) = points.iter().position(|q| line - q.p.coord(axis) <= dmin) else {
        return (0, n);
    };
    let end = points[start..]
        .iter()
        .position(|q| q.p.coord(axis) - line > dmin)
        .map_or(n, |k| start + k);
    (start, end)
}

fn brute_indexed(points: &[Indexed]) -> Result<Candidate, ClosestPairError> {
    if points.len() < 2 {
        return Err(ClosestPairError::InvalidInput { len: points.len() });
    }
    let mut best = Candidate::new(points[0], points[1]);
    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            let c = Candidate::new(a, b);
            if c.beats(&best) {
                best = c;
            }
        }
    }
    Ok(best)
}

/// `points` is sorted by `axis`. `other_view` (if any) holds the same points sorted
/// by `axis.other()`. `stalled` marks a strip call whose strip was the caller's full range.
fn solve_axis(
    points: &[Indexed],
    other_view: Option<&[Indexed]>,
    axis: Axis,
    stalled: bool,
    cfg: &SolveCfg,
) -> Result<Candidate, ClosestPairError> {
    let n = points.len();
    match n {
        0 | 1 => return Err(ClosestPairError::InvalidInput { len: n }),
        2 => return Ok(Candidate::new(points[0], points[1])),
        3 => return brute_indexed(points),
        _ => {}
    }

    let split = split_index(n);
    let line = points[split].p.coord(axis);
    let (lo, hi) = points.split_at(split);
    let (left, right) = match cfg.parallel_min_len {
        Some(m) if n >= m => rayon::join(
            || solve_axis(lo, None, axis, false, cfg),
            || solve_axis(hi, None, axis, false, cfg),
        ),
        _ => (
            solve_axis(lo, None, axis, false, cfg),
            solve_axis(hi, None, axis, false, cfg),
        ),
    };
    let mut best = left?;
    let right = right?;
    if right.beats(&best) {
        best = right;
    }

    // Any cross pair can tie or beat an infinite or NaN `dmin`.
    let dmin = best.distance();
    let (start, end) = if dmin.is_finite() {
        strip_bounds(points, axis, line, dmin)
    } else {
        (0, n)
    };
    // empty only when `line` is infinite
    if end - start <= 1 {
        return Ok(best);
    }
    let strip = &points[start..end];
    let whole = strip.len() == n;

    let cross = if strip.len() <= cfg.strip_brute_force_max {
        brute_indexed(strip)?
    } else if whole && stalled {
        // Two axis switches without shrinking: a handful of points, or NaN/inf distances.
        tracing::trace!(n, ?axis, dmin, "strip did not shrink, brute forcing");
        brute_indexed(strip)?
    } else if let (true, Some(view)) = (whole, other_view) {
        solve_axis(view, None, axis.other(), true, cfg)?
    } else {
        let mut resorted = strip.to_vec();
        resorted.sort_by(|a, b| cmp_along(axis.other(), &a.p, &b.p));
        solve_axis(&resorted, None, axis.other(), whole, cfg)?
    };

    if cross.beats(&best) {
        best = cross;
    }
    Ok(best)
}
