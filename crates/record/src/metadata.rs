//! Static metadata tables describing how record fields map to XML.
//!
//! A [`TypeMetadata`] is authored once per record type as a `pub static`
//! item, so the full mapping is queryable without instantiating the type.
//! The serializer reads these tables through [`crate::XmlRecord::metadata`];
//! the validator reads the same tables for the constraint lists.

/// How a field participates in the XML output.
///
/// Exactly one role applies per field. `Plain` is the explicit form of "no
/// role marker": the field is visible to validation but never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// Rendered as `name="value"` on the opening tag.
    Attribute,
    /// Rendered as a nested child tag containing text or structure.
    Element,
    /// Never rendered in any role.
    Excluded,
    /// Carries no emission marker; validated but not rendered.
    Plain,
}

/// A validation constraint checked once, at record construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Text must be non-empty after trimming.
    NotBlank,
    /// Numeric value must be strictly greater than zero.
    Positive,
    /// Sequence must contain at least one element.
    NotEmpty,
}

/// Per-field metadata: role, display name, transformer reference and
/// validation constraints.
#[derive(Debug)]
pub struct FieldMetadata {
    /// The field's own identifier in the record type.
    pub ident: &'static str,

    /// The field's emission role.
    pub role: FieldRole,

    /// Optional display name; the identifier is used when absent.
    pub rename: Option<&'static str>,

    /// Optional value transformer, referenced by registry name. Applies to
    /// the field's stringified scalar value before emission.
    pub transform: Option<&'static str>,

    /// Constraints checked at construction time. Empty for most fields.
    pub constraints: &'static [Constraint],
}

impl FieldMetadata {
    /// The name under which this field appears in the output.
    pub fn display_name(&self) -> &'static str {
        self.rename.unwrap_or(self.ident)
    }
}

/// Per-type metadata: tag naming, adapter reference and the field table.
#[derive(Debug)]
pub struct TypeMetadata {
    /// The record type's own name. The serializer lower-cases it to form
    /// the element tag.
    pub name: &'static str,

    /// The fixed structural tag used when instances of this type appear as
    /// items of a list field. Must differ from the lower-cased type name;
    /// the registry rejects metadata where the two collide.
    pub item_name: &'static str,

    /// Optional structural adapter, referenced by registry name, invoked
    /// once per instance before that instance's fields are emitted.
    pub adapter: Option<&'static str>,

    /// Display-name precedence for element-role fields. Element fields not
    /// named here are emitted after the named ones, in declaration order.
    pub element_order: &'static [&'static str],

    /// Field metadata in declaration order.
    pub fields: &'static [FieldMetadata],
}

impl TypeMetadata {
    /// The element tag for this type: its name, lower-cased.
    pub fn tag_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// Looks up a field's metadata by identifier.
    pub fn field(&self, ident: &str) -> Option<&'static FieldMetadata> {
        self.fields.iter().find(|f| f.ident == ident)
    }
}
