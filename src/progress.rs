//! Numeric precision for progress values.

use num_traits::{Float, FloatConst};

/// A floating-point type a curve can be evaluated in.
///
/// Implemented for `f32` and `f64`. Every curve in [`crate::functions`] is
/// generic over this trait, so the precision is chosen at the call site:
///
/// ```
/// use ease::functions::in_cubic;
///
/// assert_eq!(in_cubic(0.5_f32), 0.125_f32);
/// assert_eq!(in_cubic(0.5_f64), 0.125_f64);
/// ```
pub trait Progress: Float + FloatConst + Send + Sync + 'static {
    /// Converts a formula constant into this precision.
    fn lit(value: f64) -> Self;
}

impl Progress for f32 {
    #[inline]
    fn lit(value: f64) -> Self {
        value as f32
    }
}

impl Progress for f64 {
    #[inline]
    fn lit(value: f64) -> Self {
        value
    }
}
