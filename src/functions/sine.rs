//! Sinusoidal curves built from quarter and half cycles of a sine wave.

use crate::Progress;

/// Modeled after a quarter-cycle of a sine wave.
#[inline]
pub fn in_sine<T: Progress>(p: T) -> T {
    ((p - T::one()) * T::FRAC_PI_2()).sin() + T::one()
}

/// Modeled after a quarter-cycle of a sine wave with a different phase.
#[inline]
pub fn out_sine<T: Progress>(p: T) -> T {
    (p * T::FRAC_PI_2()).sin()
}

/// Modeled after a half sine wave.
///
/// Unlike the other in-out curves this one has no breakpoint: a single
/// cosine half-cycle already eases at both ends.
#[inline]
pub fn in_out_sine<T: Progress>(p: T) -> T {
    T::lit(0.5) * (T::one() - (p * T::PI()).cos())
}
