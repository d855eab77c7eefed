//! Overshooting "back" curves.

use crate::Progress;

/// Modeled after the overshooting cubic `y = x^3 - x sin(πx)`.
#[inline]
pub fn in_back<T: Progress>(p: T) -> T {
    p * p * p - p * (p * T::PI()).sin()
}

/// Modeled after the overshooting cubic `y = 1 - ((1 - x)^3 - (1 - x) sin((1 - x)π))`.
#[inline]
pub fn out_back<T: Progress>(p: T) -> T {
    let f = T::one() - p;
    T::one() - (f * f * f - f * (f * T::PI()).sin())
}

/// Piecewise overshooting cubic.
///
/// - `y = (1/2)((2x)^3 - (2x) sin(2xπ))` on `[0, 0.5)`
/// - `y = (1/2)(1 - ((1 - x)^3 - (1 - x) sin((1 - x)π)) + 1)` on `[0.5, 1]`
#[inline]
pub fn in_out_back<T: Progress>(p: T) -> T {
    let half = T::lit(0.5);
    if p < half {
        let f = T::lit(2.0) * p;
        half * (f * f * f - f * (f * T::PI()).sin())
    } else {
        let f = T::one() - (T::lit(2.0) * p - T::one());
        half * (T::one() - (f * f * f - f * (f * T::PI()).sin())) + half
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(in_back(0.0), 0.0);
        assert!(approx_eq(in_back(1.0), 1.0));
        assert!(approx_eq(out_back(0.0), 0.0));
        assert_eq!(out_back(1.0), 1.0);
        assert_eq!(in_out_back(0.0), 0.0);
        assert!(approx_eq(in_out_back(1.0), 1.0));
    }

    #[test]
    fn test_overshoot() {
        // Dips below zero early, rises above one late
        assert!(in_back(0.3) < 0.0);
        assert!(out_back(0.7) > 1.0);
        assert!(in_out_back(0.15) < 0.0);
        assert!(in_out_back(0.85) > 1.0);
    }

    #[test]
    fn test_out_mirrors_in() {
        for p in [0.2, 0.5, 0.9] {
            assert!(approx_eq(out_back(p), 1.0 - in_back(1.0 - p)));
        }
    }
}
