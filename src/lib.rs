//! Ease - easing curves for animation and interpolation
//!
//! This library maps a normalized progress value in `[0, 1]` onto an eased
//! progress value, shaping how an animated value moves between its start and
//! end. It provides:
//!
//! - 31 curve functions in [`functions`], generic over `f32` and `f64`
//! - [`Curve`], a tag naming each of them
//! - lookup by tag ([`get`]), by numeric id ([`get_by_id`]) and by a
//!   case- and separator-insensitive name ([`get_by_name`])
//!
//! # Examples
//!
//! ```
//! use ease::Curve;
//!
//! // Pick the curve once...
//! let curve = ease::get_by_name::<f32>("in-out-sine").unwrap();
//!
//! // ...then sample it as often as needed
//! let samples: Vec<f32> = (0..=4).map(|i| curve(i as f32 / 4.0)).collect();
//! assert!((samples[2] - 0.5).abs() < 1e-6);
//!
//! assert_eq!(Curve::OutCubic.tween(0.0, 100.0, 0.5), 87.5);
//! ```

mod curve;
mod error;
pub mod functions;
mod name;
mod progress;
mod registry;

pub use curve::{Curve, Family, Variant};
pub use error::ResolveError;
pub use progress::Progress;
pub use registry::{CurveFn, get, get_by_id, get_by_name};

#[cfg(feature = "macros")]
pub use ease_macros::curve;
