//! Structural adapters.
//!
//! An adapter is a per-type hook invoked exactly once per record instance,
//! immediately before that instance's fields are emitted. It operates on
//! the *emission plan* — the ordered list of field slots about to be
//! written — rather than on the record itself, so cross-field structural
//! corrections and emission-order changes are expressible without mutating
//! an immutable value object. Types without an adapter reference skip the
//! hook entirely; the engine never chains adapters.

use xmlforge_record::{FieldMetadata, Value};

/// One entry of a record's emission plan: a field's metadata paired with
/// its runtime value.
pub struct FieldSlot<'a> {
    /// The field's static metadata.
    pub meta: &'static FieldMetadata,
    /// The field's value for the instance being serialized.
    pub value: Value<'a>,
}

/// A structural correction hook applied to an emission plan.
pub trait XmlAdapter: Send + Sync {
    /// Adjusts the plan in place. The slots left in the vector, in their
    /// final order within each role, are what the serializer emits.
    fn adapt(&self, fields: &mut Vec<FieldSlot<'_>>);
}

/// Built-in adapter that leaves the plan untouched.
///
/// Useful as a placeholder while a type's structural corrections are not
/// yet needed, and as the target of adapter references in sample metadata.
pub struct NoopAdapter;

impl XmlAdapter for NoopAdapter {
    fn adapt(&self, _fields: &mut Vec<FieldSlot<'_>>) {}
}
