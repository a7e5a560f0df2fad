//! Construction-time validation.
//!
//! [`validate`] is called from every record type's fallible constructor, so
//! a record that violates a declared constraint never exists anywhere in
//! the system. Serialization downstream performs no re-validation.

use tracing::trace;

use crate::error::ValidationError;
use crate::metadata::Constraint;
use crate::value::Value;
use crate::XmlRecord;

/// Checks every declared constraint of `record` against its field values.
///
/// Fails fast: the first violated constraint, in field declaration order,
/// aborts the check. Fields with no constraints are never inspected.
pub fn validate(record: &dyn XmlRecord) -> Result<(), ValidationError> {
    let meta = record.metadata();
    let values = record.values();

    if values.len() != meta.fields.len() {
        return Err(ValidationError::Arity {
            type_name: meta.name,
            expected: meta.fields.len(),
            actual: values.len(),
        });
    }

    trace!(type_name = meta.name, "validating record");

    for (field, value) in meta.fields.iter().zip(&values) {
        for constraint in field.constraints {
            check(field.ident, *constraint, value)?;
        }
    }

    Ok(())
}

fn check(
    field: &'static str,
    constraint: Constraint,
    value: &Value<'_>,
) -> Result<(), ValidationError> {
    match constraint {
        Constraint::NotBlank => match value {
            Value::Text(s) if !s.trim().is_empty() => Ok(()),
            // An absent optional counts as blank for a required text field.
            Value::Text(_) | Value::None => Err(ValidationError::Blank { field }),
            _ => Err(ValidationError::Unsupported { field, constraint }),
        },
        Constraint::Positive => match value.as_number() {
            Some(n) if n > 0.0 => Ok(()),
            Some(n) => Err(ValidationError::NotPositive { field, value: n }),
            None => Err(ValidationError::Unsupported { field, constraint }),
        },
        Constraint::NotEmpty => match value {
            Value::List(items) if !items.is_empty() => Ok(()),
            Value::List(_) => Err(ValidationError::Empty { field }),
            _ => Err(ValidationError::Unsupported { field, constraint }),
        },
    }
}
