//! Power curves: linear, quadratic, cubic, quartic and quintic.
//!
//! The in-out variants run the "in" curve compressed into `[0, 0.5)` and the
//! "out" curve compressed into `[0.5, 1]`, meeting at `(0.5, 0.5)`.

use crate::Progress;

/// Modeled after the line `y = x`.
///
/// # Examples
///
/// ```
/// use ease::functions::linear;
///
/// assert_eq!(linear(0.25), 0.25);
/// // No clamping outside [0, 1]
/// assert_eq!(linear(-1.0), -1.0);
/// ```
#[inline]
pub fn linear<T: Progress>(p: T) -> T {
    p
}

/// Modeled after the parabola `y = x^2`.
#[inline]
pub fn in_quadratic<T: Progress>(p: T) -> T {
    p * p
}

/// Modeled after the parabola `y = -x^2 + 2x`.
#[inline]
pub fn out_quadratic<T: Progress>(p: T) -> T {
    -(p * (p - T::lit(2.0)))
}

/// Piecewise quadratic.
///
/// - `y = (1/2)((2x)^2)` on `[0, 0.5)`
/// - `y = -(1/2)((2x-1)(2x-3) - 1)` on `[0.5, 1]`
#[inline]
pub fn in_out_quadratic<T: Progress>(p: T) -> T {
    if p < T::lit(0.5) {
        T::lit(2.0) * p * p
    } else {
        (T::lit(-2.0) * p * p) + (T::lit(4.0) * p) - T::one()
    }
}

/// Modeled after the cubic `y = x^3`.
///
/// # Examples
///
/// ```
/// use ease::functions::in_cubic;
///
/// assert_eq!(in_cubic(0.5), 0.125);
/// ```
#[inline]
pub fn in_cubic<T: Progress>(p: T) -> T {
    p * p * p
}

/// Modeled after the cubic `y = (x - 1)^3 + 1`.
#[inline]
pub fn out_cubic<T: Progress>(p: T) -> T {
    let f = p - T::one();
    f * f * f + T::one()
}

/// Piecewise cubic.
///
/// - `y = (1/2)((2x)^3)` on `[0, 0.5)`
/// - `y = (1/2)((2x-2)^3 + 2)` on `[0.5, 1]`
#[inline]
pub fn in_out_cubic<T: Progress>(p: T) -> T {
    if p < T::lit(0.5) {
        T::lit(4.0) * p * p * p
    } else {
        let f = (T::lit(2.0) * p) - T::lit(2.0);
        T::lit(0.5) * f * f * f + T::one()
    }
}

/// Modeled after the quartic `y = x^4`.
#[inline]
pub fn in_quartic<T: Progress>(p: T) -> T {
    p * p * p * p
}

/// Modeled after the quartic `y = 1 - (x - 1)^4`.
///
/// Evaluated as `(x - 1)^3 (1 - x) + 1`.
#[inline]
pub fn out_quartic<T: Progress>(p: T) -> T {
    let f = p - T::one();
    f * f * f * (T::one() - p) + T::one()
}

/// Piecewise quartic.
///
/// - `y = (1/2)((2x)^4)` on `[0, 0.5)`
/// - `y = -(1/2)((2x-2)^4 - 2)` on `[0.5, 1]`
#[inline]
pub fn in_out_quartic<T: Progress>(p: T) -> T {
    if p < T::lit(0.5) {
        T::lit(8.0) * p * p * p * p
    } else {
        let f = p - T::one();
        T::lit(-8.0) * f * f * f * f + T::one()
    }
}

/// Modeled after the quintic `y = x^5`.
#[inline]
pub fn in_quintic<T: Progress>(p: T) -> T {
    p * p * p * p * p
}

/// Modeled after the quintic `y = (x - 1)^5 + 1`.
#[inline]
pub fn out_quintic<T: Progress>(p: T) -> T {
    let f = p - T::one();
    f * f * f * f * f + T::one()
}

/// Piecewise quintic.
///
/// - `y = (1/2)((2x)^5)` on `[0, 0.5)`
/// - `y = (1/2)((2x-2)^5 + 2)` on `[0.5, 1]`
#[inline]
pub fn in_out_quintic<T: Progress>(p: T) -> T {
    if p < T::lit(0.5) {
        T::lit(16.0) * p * p * p * p * p
    } else {
        let f = (T::lit(2.0) * p) - T::lit(2.0);
        T::lit(0.5) * f * f * f * f * f + T::one()
    }
}
