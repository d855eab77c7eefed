//! The curve functions themselves.
//!
//! Every function maps a progress value to an eased progress value in the
//! same precision. Curves are based on <https://easings.net/> and the AHEasing
//! formulas. None of them clamp: inputs outside `[0, 1]` are fed straight
//! through the formula, which may return values outside `[0, 1]` (or NaN for
//! the circular curves).
//!
//! # Examples
//!
//! ```
//! use ease::functions::{in_out_cubic, out_bounce};
//!
//! assert_eq!(in_out_cubic(0.25), 0.0625);
//! assert_eq!(out_bounce(0.0_f32), 0.0);
//! ```

mod back;
mod bounce;
mod circular;
mod elastic;
mod exponential;
mod polynomial;
mod sine;

pub use back::{in_back, in_out_back, out_back};
pub use bounce::{in_bounce, in_out_bounce, out_bounce};
pub use circular::{in_circular, in_out_circular, out_circular};
pub use elastic::{in_elastic, in_out_elastic, out_elastic};
pub use exponential::{in_exponential, in_out_exponential, out_exponential};
pub use polynomial::{
    in_cubic, in_out_cubic, in_out_quadratic, in_out_quartic, in_out_quintic, in_quadratic,
    in_quartic, in_quintic, linear, out_cubic, out_quadratic, out_quartic, out_quintic,
};
pub use sine::{in_out_sine, in_sine, out_sine};
