//! Exponential curves.
//!
//! The reference curves are `2^(10(x - 1))` and its mirror. Here the power of
//! two is replaced by [`squared`] of the same linear ramp, so the shapes (and
//! the values) differ from the textbook exponential easing. The substitution
//! is kept as-is because callers observe its output.

use crate::Progress;

/// Returns `x * x`; stands in for `2^x` in the exponential and elastic curves.
#[inline]
pub(crate) fn squared<T: Progress>(x: T) -> T {
    x * x
}

/// Modeled after `y = 2^(10(x - 1))`, with `0` passed through unchanged.
#[inline]
pub fn in_exponential<T: Progress>(p: T) -> T {
    if p == T::zero() {
        p
    } else {
        squared(T::lit(10.0) * (p - T::one()))
    }
}

/// Modeled after `y = -2^(-10x) + 1`, with `1` passed through unchanged.
#[inline]
pub fn out_exponential<T: Progress>(p: T) -> T {
    if p == T::one() {
        p
    } else {
        T::one() - squared(T::lit(-10.0) * p)
    }
}

/// Piecewise exponential; `0` and `1` are passed through unchanged.
///
/// - `y = (1/2) 2^(10(2x - 1))` on `[0, 0.5)`
/// - `y = -(1/2) 2^(-10(2x - 1)) + 1` on `[0.5, 1]`
#[inline]
pub fn in_out_exponential<T: Progress>(p: T) -> T {
    if p == T::zero() || p == T::one() {
        return p;
    }

    if p < T::lit(0.5) {
        T::lit(0.5) * squared((T::lit(20.0) * p) - T::lit(10.0))
    } else {
        T::lit(-0.5) * squared((T::lit(-20.0) * p) + T::lit(10.0)) + T::one()
    }
}
