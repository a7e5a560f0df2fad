//! Record metadata model and construction-time validation.
//!
//! This crate defines the data half of the xmlforge engine: static, per-type
//! metadata tables describing how each field of a record participates in the
//! XML output, a tagged [`Value`] variant carrying the per-instance field
//! values, and a validator that checks declared constraints when a record is
//! constructed.
//!
//! ## Metadata tables
//!
//! Every record type exposes one `pub static` [`TypeMetadata`] describing its
//! fields. Metadata is consulted through the object-safe [`XmlRecord`] trait,
//! so the serializer never inspects types at runtime — the mapping from field
//! to role, display name, transformer reference and constraints is an
//! ordinary static table authored next to the type:
//!
//! ```
//! use xmlforge_record::{
//!     Constraint, FieldMetadata, FieldRole, TypeMetadata, Value, XmlRecord,
//! };
//!
//! pub static PONTO_METADATA: TypeMetadata = TypeMetadata {
//!     name: "Ponto",
//!     item_name: "ponto_item",
//!     adapter: None,
//!     element_order: &[],
//!     fields: &[FieldMetadata {
//!         ident: "nome",
//!         role: FieldRole::Attribute,
//!         rename: None,
//!         transform: None,
//!         constraints: &[Constraint::NotBlank],
//!     }],
//! };
//!
//! struct Ponto {
//!     nome: String,
//! }
//!
//! impl XmlRecord for Ponto {
//!     fn metadata(&self) -> &'static TypeMetadata {
//!         &PONTO_METADATA
//!     }
//!
//!     fn values(&self) -> Vec<Value<'_>> {
//!         vec![Value::Text(&self.nome)]
//!     }
//! }
//! ```
//!
//! ## Validation boundary
//!
//! [`validate`] runs inside every record type's fallible constructor, so an
//! instance that violates one of its declared constraints is never created.
//! Records are immutable after construction; serialization downstream is a
//! pure projection and performs no re-validation.

pub mod error;
pub mod metadata;
pub mod validate;
pub mod value;

pub use error::ValidationError;
pub use metadata::{Constraint, FieldMetadata, FieldRole, TypeMetadata};
pub use validate::validate;
pub use value::Value;

/// A structured record that can be projected to XML.
///
/// Implementations pair a static metadata table with per-instance field
/// values. The two sides are index-aligned: `values()[i]` is the runtime
/// value of the field described by `metadata().fields[i]`. The validator and
/// the serializer both rely on that alignment and reject records whose
/// implementations break it.
pub trait XmlRecord {
    /// The static metadata table for this record's type.
    fn metadata(&self) -> &'static TypeMetadata;

    /// This instance's field values, index-aligned with `metadata().fields`.
    fn values(&self) -> Vec<Value<'_>>;
}
