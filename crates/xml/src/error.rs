//! Error types for registry construction and serialization.

use thiserror::Error;

/// Malformed metadata detected while building a [`crate::Registry`].
///
/// These are programming errors in the metadata tables, not runtime
/// conditions: a registry that fails to build should abort process startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// A field references a transformer name nobody registered.
    #[error("type `{type_name}` field `{field}` references unknown transformer `{reference}`")]
    UnknownTransformer {
        /// The declaring record type.
        type_name: &'static str,
        /// The declaring field.
        field: &'static str,
        /// The dangling reference.
        reference: &'static str,
    },

    /// A type references an adapter name nobody registered.
    #[error("type `{type_name}` references unknown adapter `{reference}`")]
    UnknownAdapter {
        /// The declaring record type.
        type_name: &'static str,
        /// The dangling reference.
        reference: &'static str,
    },

    /// A type's list-item tag collides with its own element tag.
    #[error("type `{type_name}` declares item tag `{item_name}` equal to its element tag")]
    ItemTagCollision {
        /// The declaring record type.
        type_name: &'static str,
        /// The colliding item tag.
        item_name: &'static str,
    },

    /// Two transformers were registered under the same name.
    #[error("duplicate transformer registration `{name}`")]
    DuplicateTransformer {
        /// The contested name.
        name: &'static str,
    },

    /// Two adapters were registered under the same name.
    #[error("duplicate adapter registration `{name}`")]
    DuplicateAdapter {
        /// The contested name.
        name: &'static str,
    },
}

/// A failure while serializing a record.
///
/// Serialization performs no I/O and no validation, so every variant here
/// marks a metadata or implementation defect that should fail loudly, never
/// an expected runtime condition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum XmlError {
    /// An attribute-role or scalar-element field held structured data.
    #[error("field `{field}` of type `{type_name}` holds structured data where scalar text is required")]
    StructuredValue {
        /// The declaring record type.
        type_name: &'static str,
        /// The offending field.
        field: &'static str,
    },

    /// A record instance reported a different number of values than its
    /// metadata declares fields.
    #[error("type `{type_name}` reported {actual} values for {expected} declared fields")]
    FieldArity {
        /// The record type's name.
        type_name: &'static str,
        /// Fields declared in the metadata table.
        expected: usize,
        /// Values reported by the instance.
        actual: usize,
    },

    /// A transformer reference did not resolve against the registry in
    /// use. Unreachable when the registry was built with the declaring
    /// type registered.
    #[error("unregistered transformer `{reference}` referenced by `{type_name}.{field}`")]
    UnknownTransformer {
        /// The declaring record type.
        type_name: &'static str,
        /// The declaring field.
        field: &'static str,
        /// The unresolved reference.
        reference: &'static str,
    },

    /// An adapter reference did not resolve against the registry in use.
    #[error("unregistered adapter `{reference}` referenced by type `{type_name}`")]
    UnknownAdapter {
        /// The declaring record type.
        type_name: &'static str,
        /// The unresolved reference.
        reference: &'static str,
    },
}

/// Result type alias for serialization operations.
pub type Result<T> = std::result::Result<T, XmlError>;
