//! Circular curves, built from quadrants of the unit circle.
//!
//! These take a square root, so inputs outside `[0, 1]` (or `[0, 2]` for the
//! out variant) produce NaN.

use crate::Progress;

/// Modeled after shifted quadrant IV of the unit circle.
#[inline]
pub fn in_circular<T: Progress>(p: T) -> T {
    T::one() - (T::one() - (p * p)).sqrt()
}

/// Modeled after shifted quadrant II of the unit circle.
#[inline]
pub fn out_circular<T: Progress>(p: T) -> T {
    ((T::lit(2.0) - p) * p).sqrt()
}

/// Piecewise circular.
///
/// - `y = (1/2)(1 - sqrt(1 - 4x^2))` on `[0, 0.5)`
/// - `y = (1/2)(sqrt(-(2x - 3)(2x - 1)) + 1)` on `[0.5, 1]`
#[inline]
pub fn in_out_circular<T: Progress>(p: T) -> T {
    let two = T::lit(2.0);
    if p < T::lit(0.5) {
        T::lit(0.5) * (T::one() - (T::one() - T::lit(4.0) * (p * p)).sqrt())
    } else {
        T::lit(0.5) * ((-((two * p) - T::lit(3.0)) * ((two * p) - T::one())).sqrt() + T::one())
    }
}
