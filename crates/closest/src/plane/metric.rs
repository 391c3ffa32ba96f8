//! Robust Euclidean 2-norm.
//!
//! `hypot` rescales by a power of two when both operands are huge or both are
//! tiny, so `x² + y²` neither overflows nor underflows. Powers of two keep the
//! rescale exact.

use super::types::Point;

const TWO_POW_450: f64 = f64::from_bits(0x5C10_0000_0000_0000);
const TWO_POW_N450: f64 = f64::from_bits(0x23D0_0000_0000_0000);
const TWO_POW_750: f64 = f64::from_bits(0x6ED0_0000_0000_0000);
const TWO_POW_N750: f64 = f64::from_bits(0x1110_0000_0000_0000);

/// `sqrt(x² + y²)` without premature overflow/underflow.
///
/// - NaN in, NaN out, unless the other operand is `±inf`, which wins.
/// - If the smaller magnitude vanishes against the larger one, the larger is returned.
pub fn hypot(x: f64, y: f64) -> f64 {
    let mut x = x.abs();
    let mut y = y.abs();
    if y < x {
        std::mem::swap(&mut x, &mut y);
    } else if !(y >= x) {
        // at least one NaN
        if x == f64::INFINITY || y == f64::INFINITY {
            return f64::INFINITY;
        }
        return f64::NAN;
    }
    if y - x == y {
        return y;
    }
    let factor = if x > TWO_POW_450 {
        x *= TWO_POW_N750;
        y *= TWO_POW_N750;
        TWO_POW_750
    } else if y < TWO_POW_N450 {
        x *= TWO_POW_750;
        y *= TWO_POW_750;
        TWO_POW_N750
    } else {
        1.0
    };
    factor * (x * x + y * y).sqrt()
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    hypot(p2.x - p1.x, p2.y - p1.y)
}
