//! Tagged field values.
//!
//! A field's value shape is decided at metadata-authoring time, not inferred
//! from runtime type checks: each `values()` implementation hands the engine
//! an explicit [`Value`] variant per field.

use crate::XmlRecord;

/// The runtime value of one record field.
pub enum Value<'a> {
    /// An absent optional value. Never emitted in any role.
    None,
    /// Scalar text.
    Text(&'a str),
    /// Scalar integer.
    Int(i64),
    /// Scalar floating-point number.
    Float(f64),
    /// A nested record, owned by value and serialized recursively.
    Nested(&'a dyn XmlRecord),
    /// A homogeneous sequence of nested records, rendered as repeated
    /// child elements in input order.
    List(Vec<&'a dyn XmlRecord>),
}

impl Value<'_> {
    /// The value as a number, when it holds one. Integers and floats are
    /// judged through this single accessor so numeric constraints never
    /// special-case by declared type.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// The value's plain string form, for scalar variants only.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Value::Text(s) => Some((*s).to_string()),
            Value::Int(n) => Some(n.to_string()),
            Value::Float(n) => Some(format_float(*n)),
            Value::None | Value::Nested(_) | Value::List(_) => None,
        }
    }

    /// True for [`Value::None`].
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }
}

impl std::fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Text(s) => write!(f, "Text({s:?})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n})"),
            Value::Nested(r) => write!(f, "Nested({})", r.metadata().name),
            Value::List(items) => write!(f, "List(len={})", items.len()),
        }
    }
}

/// Formats a float for emission. Whole-valued floats keep one trailing
/// decimal digit (`6.0`, not `6`); everything else uses the shortest
/// round-trip representation.
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
