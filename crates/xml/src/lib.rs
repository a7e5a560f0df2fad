//! # xmlforge XML engine
//!
//! This crate turns validated [`XmlRecord`](xmlforge_record::XmlRecord)
//! instances into indented XML text. It is the behavioral half of the
//! engine: the record crate holds the metadata tables, this crate
//! interprets them.
//!
//! ## Architecture
//!
//! - **Serializer** ([`ser`]): recursive traversal that emits the opening
//!   tag with attribute-role fields, element-role fields in the per-type
//!   precedence order, repeated child tags for list fields, and the
//!   closing tag. Pure projection — the input record is never mutated and
//!   repeated calls yield byte-identical output.
//! - **Transformers** ([`transform`]): per-field pure `string -> string`
//!   hooks applied to a scalar's text form before emission.
//! - **Adapters** ([`adapt`]): per-type hooks that may rearrange the
//!   emission plan of an instance before its fields are written.
//! - **Registry** ([`registry`]): read-only lookup tables for transformers
//!   and adapters, built once at process start. Building the registry
//!   verifies every metadata-held reference, so a dangling transformer or
//!   adapter name fails at registration time rather than mid-serialization.
//!
//! ## Output format
//!
//! Four spaces per indent level, no XML prolog, every serialization ends
//! with a newline. Text and attribute values are emitted verbatim — the
//! engine performs no escaping of `<`, `>`, `&` or `"`. That is an explicit
//! known limitation, not a guaranteed-safe markup emitter.
//!
//! ## Example
//!
//! ```ignore
//! use xmlforge_xml::{Registry, transform::AddPercentage, ser::to_xml_string};
//!
//! let registry = Registry::builder()
//!     .transformer("percentage", AddPercentage)
//!     .record_type(&COMPONENTE_METADATA)
//!     .build()?;
//!
//! let xml = to_xml_string(&componente, &registry)?;
//! ```

pub mod adapt;
pub mod error;
pub mod registry;
pub mod ser;
pub mod transform;

pub use adapt::{FieldSlot, NoopAdapter, XmlAdapter};
pub use error::{Result, StructuralError, XmlError};
pub use registry::{Registry, RegistryBuilder};
pub use ser::{XmlSerializer, to_xml_string, to_xml_string_all, to_xml_string_at};
pub use transform::{AddPercentage, XmlTransform};
