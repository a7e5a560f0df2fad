//! Mutable XML document tree.
//!
//! Unlike the serializer crates, which project immutable records, this
//! crate models a document as an owned, freely mutable tree of
//! [`Element`] nodes. It exists for workflows that build or rework a
//! document imperatively: add and remove tags, edit attributes, apply a
//! change across every matching node with the visitor, then pretty-print
//! the result or write it to a file.
//!
//! ```
//! use xmlforge_doc::Element;
//!
//! let mut plano = Element::new("plano");
//! let curso = plano.add_tag("curso", "Mestrado em Engenharia Informática");
//! curso.set_attribute("ano", "2024");
//!
//! plano.add_global_attribute("curso", "regime", "diurno");
//!
//! let xml = plano.pretty();
//! assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
//! assert!(xml.contains("regime=\"diurno\""));
//! ```

mod element;

pub use element::Element;
