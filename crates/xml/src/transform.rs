//! Value transformers.
//!
//! A transformer is a pure `string -> string` capability applied to a
//! scalar field's text form immediately before emission. Fields opt in by
//! carrying a transformer reference in their metadata; the serializer
//! resolves the reference through the registry and uses the raw stringified
//! value when no reference is present.

/// A pure value transformation applied before emission.
///
/// Implementations must be total over their input domain and must not
/// observe or mutate any state — the same input always yields the same
/// output.
pub trait XmlTransform: Send + Sync {
    /// Transforms the stringified field value.
    fn transform(&self, raw: &str) -> String;
}

/// Built-in transformer that suffixes a value with `%`.
pub struct AddPercentage;

impl XmlTransform for AddPercentage {
    fn transform(&self, raw: &str) -> String {
        format!("{raw}%")
    }
}
