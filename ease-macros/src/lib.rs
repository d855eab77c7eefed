use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{LitStr, parse_macro_input};

/// Resolves a `Curve` at compile time from a string literal.
///
/// The name is matched exactly as `Curve::from_name` matches it at runtime,
/// and an unknown name is a compile error instead of a `None`.
///
/// # Examples
///
/// ```ignore
/// use ease::{Curve, curve};
///
/// assert_eq!(curve!("in-cubic"), Curve::InCubic);
/// assert_eq!(curve!("OutBounce"), Curve::OutBounce);
/// assert_eq!(curve!("linear"), Curve::Linear);
///
/// // Fails to compile:
/// // let c = curve!("inside");
/// ```
#[proc_macro]
pub fn curve(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    let name = input.value();

    match parse_curve(&name) {
        Ok(variant) => {
            let ident = format_ident!("{}", variant);
            let expanded = quote! {
                ::ease::Curve::#ident
            };
            TokenStream::from(expanded)
        }
        Err(e) => {
            let error_msg = format!("Invalid curve name '{}': {}", name, e);
            let expanded = quote! {
                compile_error!(#error_msg)
            };
            TokenStream::from(expanded)
        }
    }
}

const FAMILIES: [(&str, &str); 10] = [
    ("quadratic", "Quadratic"),
    ("cubic", "Cubic"),
    ("quartic", "Quartic"),
    ("quintic", "Quintic"),
    ("sine", "Sine"),
    ("circular", "Circular"),
    ("exponential", "Exponential"),
    ("elastic", "Elastic"),
    ("back", "Back"),
    ("bounce", "Bounce"),
];

fn consume_prefix(s: &mut &str, prefix: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() < prefix.len() || !bytes[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
    {
        return false;
    }
    *s = s[prefix.len()..].trim_start_matches([' ', '-', '_']);
    true
}

/// Returns the name of the `Curve` variant `s` denotes.
fn parse_curve(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("empty string".to_string());
    }
    if s.eq_ignore_ascii_case("linear") {
        return Ok("Linear".to_string());
    }

    let mut rest = s;
    let prefix = if consume_prefix(&mut rest, "in") {
        if consume_prefix(&mut rest, "out") {
            "InOut"
        } else {
            "In"
        }
    } else if consume_prefix(&mut rest, "out") {
        "Out"
    } else {
        return Err("expected 'linear' or an 'in'/'out' prefix".to_string());
    };

    FAMILIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(rest))
        .map(|(_, family)| format!("{prefix}{family}"))
        .ok_or_else(|| format!("unknown curve family '{}'", rest))
}
