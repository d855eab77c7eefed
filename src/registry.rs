//! Curve lookup.
//!
//! Resolve a curve once, when an animation is set up, and call the returned
//! function for every sample.

use crate::{Curve, Progress};

/// A curve function at precision `T`.
pub type CurveFn<T> = fn(T) -> T;

/// Returns the function for a curve tag.
///
/// # Examples
///
/// ```
/// use ease::Curve;
///
/// let f = ease::get::<f64>(Curve::InCubic);
/// assert_eq!(f(0.5), 0.125);
/// ```
pub fn get<T: Progress>(curve: Curve) -> CurveFn<T> {
    curve.function()
}

/// Returns the function for a numeric curve id, or `None` if the id is not
/// one of [`Curve::ALL`].
///
/// # Examples
///
/// ```
/// let f = ease::get_by_id::<f32>(1).unwrap(); // in-quadratic
/// assert_eq!(f(0.5), 0.25);
///
/// assert!(ease::get_by_id::<f32>(31).is_none());
/// ```
pub fn get_by_id<T: Progress>(id: u8) -> Option<CurveFn<T>> {
    match Curve::try_from(id) {
        Ok(curve) => Some(curve.function()),
        Err(err) => {
            log::debug!("{err}");
            None
        }
    }
}

/// Returns the function for a curve name, or `None` if the name is unknown.
///
/// See [`Curve::from_name`] for the accepted forms.
///
/// # Examples
///
/// ```
/// let f = ease::get_by_name::<f64>("IN_OUT_QUADRATIC").unwrap();
/// assert_eq!(f(0.25), 0.125);
///
/// assert!(ease::get_by_name::<f64>("inside").is_none());
/// ```
pub fn get_by_name<T: Progress>(name: &str) -> Option<CurveFn<T>> {
    name.parse::<Curve>().ok().map(|curve| curve.function())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_covers_all_curves() {
        for curve in Curve::ALL {
            let f = get::<f64>(curve);
            assert_eq!(f(0.3), curve.apply(0.3));
        }
    }

    #[test]
    fn test_get_by_id_range() {
        for id in 0..Curve::COUNT as u8 {
            assert!(get_by_id::<f64>(id).is_some());
        }
        for id in [31, 100, u8::MAX] {
            assert!(get_by_id::<f64>(id).is_none());
        }
    }

    #[test]
    fn test_get_by_name() {
        let f = get_by_name::<f32>("out-quartic").unwrap();
        assert_eq!(f(0.5), 0.9375);
        assert!(get_by_name::<f32>("").is_none());
        assert!(get_by_name::<f32>("bounceinout").is_none());
    }
}
