//! Elastic curves: a sine wave damped by the exponential envelope.

use super::exponential::squared;
use crate::Progress;

/// Modeled after the damped sine wave `y = sin(13π/2 x) 2^(10(x - 1))`.
#[inline]
pub fn in_elastic<T: Progress>(p: T) -> T {
    (T::lit(13.0) * T::FRAC_PI_2() * p).sin() * squared(T::lit(10.0) * (p - T::one()))
}

/// Modeled after the damped sine wave `y = sin(-13π/2 (x + 1)) 2^(-10x) + 1`.
#[inline]
pub fn out_elastic<T: Progress>(p: T) -> T {
    (T::lit(-13.0) * T::FRAC_PI_2() * (p + T::one())).sin() * squared(T::lit(-10.0) * p) + T::one()
}

/// Piecewise damped sine wave.
///
/// - `y = (1/2) sin(13π/2 (2x)) 2^(10(2x - 1))` on `[0, 0.5)`
/// - `y = (1/2)(sin(-13π/2 ((2x - 1) + 1)) 2^(-10(2x - 1)) + 2)` on `[0.5, 1]`
#[inline]
pub fn in_out_elastic<T: Progress>(p: T) -> T {
    let two = T::lit(2.0);
    let half = T::lit(0.5);
    if p < half {
        half * (T::lit(13.0) * T::FRAC_PI_2() * (two * p)).sin()
            * squared(T::lit(10.0) * ((two * p) - T::one()))
    } else {
        half * ((T::lit(-13.0) * T::FRAC_PI_2() * ((two * p - T::one()) + T::one())).sin()
            * squared(T::lit(-10.0) * (two * p - T::one()))
            + two)
    }
}
