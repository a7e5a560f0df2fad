//! Error types for record construction.

use thiserror::Error;

use crate::metadata::Constraint;

/// A declared constraint was violated while constructing a record.
///
/// Raised synchronously from a record type's fallible constructor; the
/// record is never created. Fully recoverable by the caller — retry with
/// corrected input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A `NotBlank` field was empty or whitespace-only.
    #[error("field `{field}` must not be blank")]
    Blank {
        /// The offending field's identifier.
        field: &'static str,
    },

    /// A `Positive` field held a value less than or equal to zero.
    #[error("field `{field}` must be positive, got {value}")]
    NotPositive {
        /// The offending field's identifier.
        field: &'static str,
        /// The rejected numeric value.
        value: f64,
    },

    /// A `NotEmpty` field held a sequence with no elements.
    #[error("field `{field}` must contain at least one element")]
    Empty {
        /// The offending field's identifier.
        field: &'static str,
    },

    /// A constraint was attached to a value shape it cannot judge, e.g.
    /// `NotBlank` on a list. This is a metadata defect, not bad input.
    #[error("constraint {constraint:?} on field `{field}` does not apply to its value")]
    Unsupported {
        /// The offending field's identifier.
        field: &'static str,
        /// The misapplied constraint.
        constraint: Constraint,
    },

    /// A record implementation reported a different number of values than
    /// its metadata declares fields. Metadata defect.
    #[error("type `{type_name}` reported {actual} values for {expected} declared fields")]
    Arity {
        /// The record type's name.
        type_name: &'static str,
        /// Fields declared in the metadata table.
        expected: usize,
        /// Values reported by the instance.
        actual: usize,
    },
}
