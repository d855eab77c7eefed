//! Curve identifiers.
//!
//! [`Curve`] names one of the 31 easing curves. It is a plain `Copy` tag: store
//! it in animation data, compare it, and turn it into a callable with
//! [`Curve::function`] when sampling starts.

use std::fmt;

use crate::functions::*;
use crate::{CurveFn, Progress, ResolveError};

/// A named curve shape with up to three variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Family {
    Quadratic,
    Cubic,
    Quartic,
    Quintic,
    Sine,
    Circular,
    Exponential,
    Elastic,
    Back,
    Bounce,
}

impl Family {
    /// All families, in [`Curve`] id order.
    pub const ALL: [Family; 10] = [
        Family::Quadratic,
        Family::Cubic,
        Family::Quartic,
        Family::Quintic,
        Family::Sine,
        Family::Circular,
        Family::Exponential,
        Family::Elastic,
        Family::Back,
        Family::Bounce,
    ];

    /// Lowercase family name, as matched by the name parser.
    pub fn name(&self) -> &'static str {
        match self {
            Family::Quadratic => "quadratic",
            Family::Cubic => "cubic",
            Family::Quartic => "quartic",
            Family::Quintic => "quintic",
            Family::Sine => "sine",
            Family::Circular => "circular",
            Family::Exponential => "exponential",
            Family::Elastic => "elastic",
            Family::Back => "back",
            Family::Bounce => "bounce",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which end(s) of the transition a curve eases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Variant {
    /// Eases at the start
    In,
    /// Eases at the end
    Out,
    /// Eases at both ends
    InOut,
}

impl Variant {
    /// All variants, in [`Curve`] id order.
    pub const ALL: [Variant; 3] = [Variant::In, Variant::Out, Variant::InOut];

    fn index(self) -> usize {
        match self {
            Variant::In => 0,
            Variant::Out => 1,
            Variant::InOut => 2,
        }
    }
}

/// Easing curve identifier.
///
/// The discriminants are stable: `Linear` is `0`, then each [`Family`] in
/// order contributes its `In`, `Out` and `InOut` variants.
///
/// # Examples
///
/// ```
/// use ease::Curve;
///
/// let curve: Curve = "in-out-cubic".parse().unwrap();
/// assert_eq!(curve, Curve::InOutCubic);
/// assert_eq!(curve.apply(0.25), 0.0625);
/// assert_eq!(curve.to_string(), "in-out-cubic");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Curve {
    #[default]
    Linear = 0,

    InQuadratic,
    OutQuadratic,
    InOutQuadratic,

    InCubic,
    OutCubic,
    InOutCubic,

    InQuartic,
    OutQuartic,
    InOutQuartic,

    InQuintic,
    OutQuintic,
    InOutQuintic,

    InSine,
    OutSine,
    InOutSine,

    InCircular,
    OutCircular,
    InOutCircular,

    InExponential,
    OutExponential,
    InOutExponential,

    InElastic,
    OutElastic,
    InOutElastic,

    InBack,
    OutBack,
    InOutBack,

    InBounce,
    OutBounce,
    InOutBounce,
}

impl Curve {
    /// Number of curves.
    pub const COUNT: usize = 31;

    /// Every curve, indexed by its id.
    pub const ALL: [Curve; Curve::COUNT] = [
        Curve::Linear,
        Curve::InQuadratic,
        Curve::OutQuadratic,
        Curve::InOutQuadratic,
        Curve::InCubic,
        Curve::OutCubic,
        Curve::InOutCubic,
        Curve::InQuartic,
        Curve::OutQuartic,
        Curve::InOutQuartic,
        Curve::InQuintic,
        Curve::OutQuintic,
        Curve::InOutQuintic,
        Curve::InSine,
        Curve::OutSine,
        Curve::InOutSine,
        Curve::InCircular,
        Curve::OutCircular,
        Curve::InOutCircular,
        Curve::InExponential,
        Curve::OutExponential,
        Curve::InOutExponential,
        Curve::InElastic,
        Curve::OutElastic,
        Curve::InOutElastic,
        Curve::InBack,
        Curve::OutBack,
        Curve::InOutBack,
        Curve::InBounce,
        Curve::OutBounce,
        Curve::InOutBounce,
    ];

    /// Returns the numeric id of this curve.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Builds the curve for a family and variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use ease::{Curve, Family, Variant};
    ///
    /// assert_eq!(Curve::from_parts(Family::Back, Variant::Out), Curve::OutBack);
    /// ```
    pub fn from_parts(family: Family, variant: Variant) -> Curve {
        Curve::ALL[1 + family.index() * 3 + variant.index()]
    }

    /// Splits the curve into family and variant; `None` for [`Curve::Linear`].
    pub fn parts(self) -> Option<(Family, Variant)> {
        let index = (self.id() as usize).checked_sub(1)?;
        Some((Family::ALL[index / 3], Variant::ALL[index % 3]))
    }

    /// Returns the family of this curve, if it has one.
    pub fn family(self) -> Option<Family> {
        self.parts().map(|(family, _)| family)
    }

    /// Returns the variant of this curve, if it has one.
    pub fn variant(self) -> Option<Variant> {
        self.parts().map(|(_, variant)| variant)
    }

    /// Canonical kebab-case name. Parsing it yields the same curve.
    pub fn name(self) -> &'static str {
        match self {
            Curve::Linear => "linear",
            Curve::InQuadratic => "in-quadratic",
            Curve::OutQuadratic => "out-quadratic",
            Curve::InOutQuadratic => "in-out-quadratic",
            Curve::InCubic => "in-cubic",
            Curve::OutCubic => "out-cubic",
            Curve::InOutCubic => "in-out-cubic",
            Curve::InQuartic => "in-quartic",
            Curve::OutQuartic => "out-quartic",
            Curve::InOutQuartic => "in-out-quartic",
            Curve::InQuintic => "in-quintic",
            Curve::OutQuintic => "out-quintic",
            Curve::InOutQuintic => "in-out-quintic",
            Curve::InSine => "in-sine",
            Curve::OutSine => "out-sine",
            Curve::InOutSine => "in-out-sine",
            Curve::InCircular => "in-circular",
            Curve::OutCircular => "out-circular",
            Curve::InOutCircular => "in-out-circular",
            Curve::InExponential => "in-exponential",
            Curve::OutExponential => "out-exponential",
            Curve::InOutExponential => "in-out-exponential",
            Curve::InElastic => "in-elastic",
            Curve::OutElastic => "out-elastic",
            Curve::InOutElastic => "in-out-elastic",
            Curve::InBack => "in-back",
            Curve::OutBack => "out-back",
            Curve::InOutBack => "in-out-back",
            Curve::InBounce => "in-bounce",
            Curve::OutBounce => "out-bounce",
            Curve::InOutBounce => "in-out-bounce",
        }
    }

    /// Returns the function implementing this curve at precision `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ease::Curve;
    ///
    /// let f = Curve::OutQuadratic.function::<f32>();
    /// assert_eq!(f(0.5), 0.75);
    /// ```
    pub fn function<T: Progress>(self) -> CurveFn<T> {
        match self {
            Curve::Linear => linear,
            Curve::InQuadratic => in_quadratic,
            Curve::OutQuadratic => out_quadratic,
            Curve::InOutQuadratic => in_out_quadratic,
            Curve::InCubic => in_cubic,
            Curve::OutCubic => out_cubic,
            Curve::InOutCubic => in_out_cubic,
            Curve::InQuartic => in_quartic,
            Curve::OutQuartic => out_quartic,
            Curve::InOutQuartic => in_out_quartic,
            Curve::InQuintic => in_quintic,
            Curve::OutQuintic => out_quintic,
            Curve::InOutQuintic => in_out_quintic,
            Curve::InSine => in_sine,
            Curve::OutSine => out_sine,
            Curve::InOutSine => in_out_sine,
            Curve::InCircular => in_circular,
            Curve::OutCircular => out_circular,
            Curve::InOutCircular => in_out_circular,
            Curve::InExponential => in_exponential,
            Curve::OutExponential => out_exponential,
            Curve::InOutExponential => in_out_exponential,
            Curve::InElastic => in_elastic,
            Curve::OutElastic => out_elastic,
            Curve::InOutElastic => in_out_elastic,
            Curve::InBack => in_back,
            Curve::OutBack => out_back,
            Curve::InOutBack => in_out_back,
            Curve::InBounce => in_bounce,
            Curve::OutBounce => out_bounce,
            Curve::InOutBounce => in_out_bounce,
        }
    }

    /// Applies the curve to a progress value.
    ///
    /// The input is not clamped.
    #[inline]
    pub fn apply<T: Progress>(self, p: T) -> T {
        (self.function::<T>())(p)
    }

    /// Interpolates from `start` to `end` with the eased progress.
    ///
    /// # Examples
    ///
    /// ```
    /// use ease::Curve;
    ///
    /// assert_eq!(Curve::InQuadratic.tween(10.0, 20.0, 0.5), 12.5);
    /// ```
    #[inline]
    pub fn tween<T: Progress>(self, start: T, end: T, p: T) -> T {
        start + (end - start) * self.apply(p)
    }

    /// Map a value from one range to another using this curve.
    ///
    /// # Arguments
    ///
    /// * `t` - Input value in the `from_range`
    /// * `from_range` - Input range as (min, max)
    /// * `to_range` - Output range as (min, max)
    ///
    /// # Returns
    ///
    /// Mapped value in `to_range` with curve applied. Values outside
    /// `from_range` extrapolate through the curve formula.
    ///
    /// # Examples
    ///
    /// ```
    /// use ease::Curve;
    ///
    /// let curve = Curve::InQuadratic;
    /// // Map 5 from range [0, 10] to [0, 100] along y = x^2
    /// let result = curve.map(5.0, (0.0, 10.0), (0.0, 100.0));
    /// assert_eq!(result, 25.0);
    /// ```
    pub fn map(self, t: f64, from_range: (f64, f64), to_range: (f64, f64)) -> f64 {
        let (from_min, from_max) = from_range;
        let (to_min, to_max) = to_range;

        let normalized = (t - from_min) / (from_max - from_min);
        let curved = self.apply(normalized);

        to_min + curved * (to_max - to_min)
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Curve {
    type Error = ResolveError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Curve::ALL
            .get(id as usize)
            .copied()
            .ok_or(ResolveError::UnknownId(id))
    }
}

impl From<Curve> for u8 {
    fn from(curve: Curve) -> Self {
        curve.id()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Curve {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Curve {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
