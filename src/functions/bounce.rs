//! Bounce curves.
//!
//! [`out_bounce`] is the primitive: four parabolic arcs joined at `4/11`,
//! `8/11` and `9/10`, each touching `y = 1` at its left edge. The other two
//! variants are built from it.

use crate::Progress;

/// Four decaying parabolic bounces ending at `1`.
#[inline]
pub fn out_bounce<T: Progress>(p: T) -> T {
    if p < T::lit(4.0 / 11.0) {
        (T::lit(121.0) * p * p) / T::lit(16.0)
    } else if p < T::lit(8.0 / 11.0) {
        (T::lit(363.0 / 40.0) * p * p) - (T::lit(99.0 / 10.0) * p) + T::lit(17.0 / 5.0)
    } else if p < T::lit(9.0 / 10.0) {
        (T::lit(4356.0 / 361.0) * p * p) - (T::lit(35442.0 / 1805.0) * p)
            + T::lit(16061.0 / 1805.0)
    } else {
        (T::lit(54.0 / 5.0) * p * p) - (T::lit(513.0 / 25.0) * p) + T::lit(268.0 / 25.0)
    }
}

/// [`out_bounce`] mirrored in both axes: `1 - out_bounce(1 - p)`.
#[inline]
pub fn in_bounce<T: Progress>(p: T) -> T {
    T::one() - out_bounce(T::one() - p)
}

/// Half-scale [`in_bounce`] on `[0, 0.5)`, then half-scale [`out_bounce`]
/// lifted by `0.5` on `[0.5, 1]`.
#[inline]
pub fn in_out_bounce<T: Progress>(p: T) -> T {
    let half = T::lit(0.5);
    if p < half {
        half * in_bounce(p * T::lit(2.0))
    } else {
        half * out_bounce(p * T::lit(2.0) - T::one()) + half
    }
}
