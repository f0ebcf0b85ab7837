use crate::core::CanonicalType;
use serde_json::Value;

/// A raw value after wide numeric representations were coerced to their
/// canonical counterparts. Anything else is carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalized<'a> {
    Boolean(bool),
    String(&'a str),
    Float(f64),
    Integer(i64),
    Other(&'a Value),
}

impl Normalized<'_> {
    /// Canonical tag of the value, `None` for anything outside the vocabulary.
    pub fn tag(&self) -> Option<CanonicalType> {
        match self {
            Normalized::Boolean(_) => Some(CanonicalType::Boolean),
            Normalized::String(_) => Some(CanonicalType::String),
            Normalized::Float(_) => Some(CanonicalType::Float),
            Normalized::Integer(_) => Some(CanonicalType::Integer),
            Normalized::Other(_) => None,
        }
    }
}

/// Only 64-bit signed integers and 64-bit floats are converted. Unsigned
/// values above `i64::MAX`, nulls, arrays and objects pass through as `Other`.
pub fn normalize(value: &Value) -> Normalized<'_> {
    match value {
        Value::Bool(b) => Normalized::Boolean(*b),
        Value::String(s) => Normalized::String(s),
        Value::Number(n) if n.is_i64() => n.as_i64().map_or(Normalized::Other(value), Normalized::Integer),
        Value::Number(n) if n.is_f64() => n.as_f64().map_or(Normalized::Other(value), Normalized::Float),
        _ => Normalized::Other(value),
    }
}

/// True when the normalized value carries exactly the expected tag.
pub fn matches_type(value: &Value, expected: CanonicalType) -> bool {
    normalize(value).tag() == Some(expected)
}
