use crate::plane::{distance, Pair, Point};

use super::types::ClosestPairError;

/// `a` is strictly closer than `b`; NaN ranks after every number.
#[inline]
pub(crate) fn closer(a: f64, b: f64) -> bool {
    a < b || (b.is_nan() && !a.is_nan())
}

/// Exhaustive closest pair over all `C(n, 2)` combinations.
///
/// Starts from `(points[0], points[1])` and replaces the candidate only when
/// `closer`, so ties resolve to the first pair in scan order.
pub fn brute_force(points: &[Point]) -> Result<Pair, ClosestPairError> {
    let n = points.len();
    if n < 2 {
        return Err(ClosestPairError::InvalidInput { len: n });
    }
    let mut best = Pair::new(points[0], points[1]);
    for (i, &p1) in points.iter().enumerate().take(n - 1) {
        for &p2 in &points[i + 1..] {
            if closer(distance(p1, p2), best.distance()) {
                best = Pair::new(p1, p2);
            }
        }
    }
    Ok(best)
}
