use thiserror::Error;

/// A curve identifier that does not name any known curve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The name did not match any curve (this includes the empty string)
    #[error("unknown curve name: '{0}'")]
    UnknownName(String),
    /// The numeric id is outside the fixed set of curves
    #[error("unknown curve id: {0} (expected 0..{count})", count = crate::Curve::COUNT)]
    UnknownId(u8),
}
