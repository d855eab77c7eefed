//! Curve name matching.
//!
//! Names are matched ignoring ASCII case, and the separators ` `, `-` and `_`
//! may follow the `in` and `out` prefixes, so `"InCubic"`, `"in-cubic"`,
//! `"IN_CUBIC"` and `"in cubic"` all name [`Curve::InCubic`].
//!
//! The family part must match in full after the prefixes are consumed:
//! `"inside"` is `in` + `side`, and `side` is not a family, so it is rejected.

use std::str::FromStr;

use crate::{Curve, Family, ResolveError, Variant};

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '-' | '_')
}

/// Consumes `prefix` from the front of `s` if present (ignoring ASCII case),
/// together with any separators that follow it.
fn consume_prefix_ignore_case(s: &mut &str, prefix: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() < prefix.len() || !bytes[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
    {
        return false;
    }
    // The matched bytes are ASCII, so `prefix.len()` is a char boundary
    *s = s[prefix.len()..].trim_start_matches(is_separator);
    true
}

impl Family {
    /// Looks up a family by its name, ignoring ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ease::Family;
    ///
    /// assert_eq!(Family::from_name("Bounce"), Some(Family::Bounce));
    /// assert_eq!(Family::from_name("bouncy"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Family> {
        Family::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(name))
    }
}

impl Curve {
    /// Looks up a curve by name.
    ///
    /// Accepts `linear`, or an `in`, `out` or `in`+`out` prefix followed by a
    /// family name, in any casing and with ` `, `-` or `_` after each prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use ease::Curve;
    ///
    /// assert_eq!(Curve::from_name("InOutBack"), Some(Curve::InOutBack));
    /// assert_eq!(Curve::from_name("out_bounce"), Some(Curve::OutBounce));
    /// assert_eq!(Curve::from_name("LINEAR"), Some(Curve::Linear));
    /// assert_eq!(Curve::from_name("bounce-in-out"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Curve> {
        if name.eq_ignore_ascii_case("linear") {
            return Some(Curve::Linear);
        }

        let mut rest = name;
        let variant = if consume_prefix_ignore_case(&mut rest, "in") {
            if consume_prefix_ignore_case(&mut rest, "out") {
                Variant::InOut
            } else {
                Variant::In
            }
        } else if consume_prefix_ignore_case(&mut rest, "out") {
            Variant::Out
        } else {
            return None;
        };

        let family = Family::from_name(rest)?;
        Some(Curve::from_parts(family, variant))
    }
}

impl FromStr for Curve {
    type Err = ResolveError;

    /// Parses a curve name; see [`Curve::from_name`] for the accepted forms.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::str::FromStr;
    /// use ease::{Curve, ResolveError};
    ///
    /// assert_eq!(Curve::from_str("in cubic"), Ok(Curve::InCubic));
    /// assert_eq!(
    ///     Curve::from_str("inside"),
    ///     Err(ResolveError::UnknownName("inside".to_string()))
    /// );
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Curve::from_name(s).ok_or_else(|| {
            log::debug!("no curve named {s:?}");
            ResolveError::UnknownName(s.to_string())
        })
    }
}

impl FromStr for Family {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Family::from_name(s).ok_or_else(|| ResolveError::UnknownName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_prefix() {
        let mut s = "In--_ cubic";
        assert!(consume_prefix_ignore_case(&mut s, "in"));
        assert_eq!(s, "cubic");

        let mut s = "cubic";
        assert!(!consume_prefix_ignore_case(&mut s, "in"));
        assert_eq!(s, "cubic");

        let mut s = "i";
        assert!(!consume_prefix_ignore_case(&mut s, "in"));
    }

    #[test]
    fn test_consume_prefix_non_ascii() {
        // Multi-byte input must not split a char
        let mut s = "ïn-cubic";
        assert!(!consume_prefix_ignore_case(&mut s, "in"));

        let mut s = "iné";
        assert!(consume_prefix_ignore_case(&mut s, "in"));
        assert_eq!(s, "é");
    }

    #[test]
    fn test_linear() {
        assert_eq!(Curve::from_name("linear"), Some(Curve::Linear));
        assert_eq!(Curve::from_name("Linear"), Some(Curve::Linear));
        assert_eq!(Curve::from_name("in-linear"), None);
        assert_eq!(Curve::from_name("linear "), None);
    }

    #[test]
    fn test_casing_and_separators() {
        for name in ["InCubic", "in-cubic", "IN_CUBIC", "in cubic", "iN__-cUbIc"] {
            assert_eq!(Curve::from_name(name), Some(Curve::InCubic), "{name}");
        }
        for name in ["InOutCubic", "in-out-cubic", "IN_OUT_CUBIC", "in out cubic"] {
            assert_eq!(Curve::from_name(name), Some(Curve::InOutCubic), "{name}");
        }
        for name in ["OutCubic", "out-cubic", "OUT_CUBIC", "out cubic"] {
            assert_eq!(Curve::from_name(name), Some(Curve::OutCubic), "{name}");
        }
    }

    #[test]
    fn test_rejects_partial_matches() {
        assert_eq!(Curve::from_name("inside"), None);
        assert_eq!(Curve::from_name("bounceinout"), None);
        assert_eq!(Curve::from_name(""), None);
        assert_eq!(Curve::from_name("in"), None);
        assert_eq!(Curve::from_name("in-out"), None);
        assert_eq!(Curve::from_name("out-in-cubic"), None);
        assert_eq!(Curve::from_name("in-cubics"), None);
        assert_eq!(Curve::from_name(" in-cubic"), None);
    }

    #[test]
    fn test_separators_only_after_prefixes() {
        // Leading separators are not skipped, trailing ones are not trimmed
        assert_eq!(Curve::from_name("-in-cubic"), None);
        assert_eq!(Curve::from_name("in-cubic-"), None);
    }

    #[test]
    fn test_canonical_names_roundtrip() {
        for curve in Curve::ALL {
            assert_eq!(Curve::from_name(curve.name()), Some(curve));
        }
    }

    #[test]
    fn test_from_str_errors() {
        assert_eq!(
            "".parse::<Curve>(),
            Err(ResolveError::UnknownName(String::new()))
        );
        assert_eq!("in-sine".parse::<Curve>(), Ok(Curve::InSine));
    }

    #[test]
    fn test_family_from_str() {
        assert_eq!("ELASTIC".parse::<Family>(), Ok(Family::Elastic));
        assert!("elastics".parse::<Family>().is_err());
    }
}
