//! XML serialization.
//!
//! The serializer is a recursive, read-only projection over validated
//! records. For each record it:
//!
//! 1. builds the emission plan (field metadata paired with values, minus
//!    excluded and unmarked fields) and runs the type's adapter on it,
//! 2. writes the opening tag — the type name lower-cased — with every
//!    non-absent attribute-role field as `name="value"`,
//! 3. writes element-role fields in the type's declared precedence order,
//!    recursing into nested records and rendering list fields as a wrapper
//!    element with one self-closing child tag per item in input order,
//! 4. writes the closing tag.
//!
//! Indentation is four spaces per level; each nesting step increases the
//! level by exactly one, and a list's items sit one level below their
//! wrapper. Every serialization ends with a newline, so concatenating
//! independent serializations yields a well-shaped document fragment.

use tracing::debug;
use xmlforge_record::{FieldRole, Value, XmlRecord};

use crate::adapt::FieldSlot;
use crate::error::{Result, XmlError};
use crate::registry::Registry;

const INDENT: &str = "    ";

/// Serializes one record starting at indent level zero.
pub fn to_xml_string(record: &dyn XmlRecord, registry: &Registry) -> Result<String> {
    XmlSerializer::new(registry).serialize(record)
}

/// Serializes one record starting at the given indent level.
pub fn to_xml_string_at(
    record: &dyn XmlRecord,
    registry: &Registry,
    indent: usize,
) -> Result<String> {
    XmlSerializer::new(registry).serialize_at(record, indent)
}

/// Serializes a sequence of records as independent top-level
/// serializations, concatenated, each opening its own tag at the given
/// indent level.
pub fn to_xml_string_all(
    records: &[&dyn XmlRecord],
    registry: &Registry,
    indent: usize,
) -> Result<String> {
    XmlSerializer::new(registry).serialize_all(records, indent)
}

/// The traversal engine. Holds only a registry reference; all state lives
/// on the call stack, so one serializer is safely shared across threads.
pub struct XmlSerializer<'r> {
    registry: &'r Registry,
}

impl<'r> XmlSerializer<'r> {
    /// Creates a serializer over the given registry.
    pub fn new(registry: &'r Registry) -> Self {
        XmlSerializer { registry }
    }

    /// Serializes one record starting at indent level zero.
    pub fn serialize(&self, record: &dyn XmlRecord) -> Result<String> {
        self.serialize_at(record, 0)
    }

    /// Serializes one record starting at the given indent level.
    pub fn serialize_at(&self, record: &dyn XmlRecord, indent: usize) -> Result<String> {
        let mut out = String::new();
        self.write_record(&mut out, record, indent)?;
        Ok(out)
    }

    /// Serializes each record independently and concatenates the results.
    pub fn serialize_all(&self, records: &[&dyn XmlRecord], indent: usize) -> Result<String> {
        let mut out = String::new();
        for record in records {
            self.write_record(&mut out, *record, indent)?;
        }
        Ok(out)
    }

    fn write_record(&self, out: &mut String, record: &dyn XmlRecord, indent: usize) -> Result<()> {
        let meta = record.metadata();
        let tag = meta.tag_name();
        let pad = INDENT.repeat(indent);

        debug!(type_name = meta.name, indent, "serializing record");

        let plan = self.emission_plan(record)?;

        // Opening tag with attribute-role fields.
        out.push_str(&pad);
        out.push('<');
        out.push_str(&tag);
        self.write_attributes(out, meta.name, &plan)?;
        out.push_str(">\n");

        // Element-role fields, in the type's precedence order.
        for slot in ordered_elements(&plan, meta.element_order) {
            self.write_element(out, meta.name, slot, indent + 1)?;
        }

        out.push_str(&pad);
        out.push_str("</");
        out.push_str(&tag);
        out.push_str(">\n");

        Ok(())
    }

    /// Builds the emission plan for one instance: metadata paired with
    /// values, excluded and unmarked fields dropped, adapter applied.
    fn emission_plan<'a>(&self, record: &'a dyn XmlRecord) -> Result<Vec<FieldSlot<'a>>> {
        let meta = record.metadata();
        let values = record.values();

        if values.len() != meta.fields.len() {
            return Err(XmlError::FieldArity {
                type_name: meta.name,
                expected: meta.fields.len(),
                actual: values.len(),
            });
        }

        let mut plan: Vec<FieldSlot<'a>> = meta
            .fields
            .iter()
            .zip(values)
            .filter(|(m, _)| matches!(m.role, FieldRole::Attribute | FieldRole::Element))
            .map(|(m, value)| FieldSlot { meta: m, value })
            .collect();

        if let Some(reference) = meta.adapter {
            let adapter =
                self.registry
                    .adapter(reference)
                    .ok_or(XmlError::UnknownAdapter {
                        type_name: meta.name,
                        reference,
                    })?;
            adapter.adapt(&mut plan);
        }

        Ok(plan)
    }

    /// Writes every non-absent attribute-role field of `plan` onto the
    /// currently open tag.
    fn write_attributes(
        &self,
        out: &mut String,
        type_name: &'static str,
        plan: &[FieldSlot<'_>],
    ) -> Result<()> {
        for slot in plan {
            if slot.meta.role != FieldRole::Attribute {
                continue;
            }
            // Absent optionals are omitted, never emitted empty.
            if let Some(text) = self.scalar_text(type_name, slot)? {
                out.push(' ');
                out.push_str(slot.meta.display_name());
                out.push_str("=\"");
                out.push_str(&text);
                out.push('"');
            }
        }
        Ok(())
    }

    fn write_element(
        &self,
        out: &mut String,
        type_name: &'static str,
        slot: &FieldSlot<'_>,
        indent: usize,
    ) -> Result<()> {
        let name = slot.meta.display_name();
        let pad = INDENT.repeat(indent);

        match &slot.value {
            Value::None => Ok(()),
            Value::List(items) => {
                out.push_str(&format!("{pad}<{name}>\n"));
                for item in items {
                    self.write_item(out, *item, indent + 1)?;
                }
                out.push_str(&format!("{pad}</{name}>\n"));
                Ok(())
            }
            Value::Nested(inner) => {
                out.push_str(&format!("{pad}<{name}>\n"));
                self.write_record(out, *inner, indent + 1)?;
                out.push_str(&format!("{pad}</{name}>\n"));
                Ok(())
            }
            _ => {
                let text = self
                    .scalar_text(type_name, slot)?
                    .unwrap_or_default();
                out.push_str(&format!("{pad}<{name}>{text}</{name}>\n"));
                Ok(())
            }
        }
    }

    /// Writes one list item as a self-closing tag named by the item type's
    /// structural item tag, carrying the item's attribute-role fields.
    fn write_item(&self, out: &mut String, item: &dyn XmlRecord, indent: usize) -> Result<()> {
        let meta = item.metadata();
        let plan = self.emission_plan(item)?;
        let pad = INDENT.repeat(indent);

        out.push_str(&pad);
        out.push('<');
        out.push_str(meta.item_name);
        self.write_attributes(out, meta.name, &plan)?;
        out.push_str("/>\n");

        Ok(())
    }

    /// Resolves a slot's scalar text, applying its transformer if one is
    /// referenced. `Ok(None)` for an absent optional; an error for
    /// structured values, which have no scalar text form.
    fn scalar_text(
        &self,
        type_name: &'static str,
        slot: &FieldSlot<'_>,
    ) -> Result<Option<String>> {
        if slot.value.is_none() {
            return Ok(None);
        }

        let raw = slot.value.to_text().ok_or(XmlError::StructuredValue {
            type_name,
            field: slot.meta.ident,
        })?;

        match slot.meta.transform {
            Some(reference) => {
                let transformer =
                    self.registry
                        .transformer(reference)
                        .ok_or(XmlError::UnknownTransformer {
                            type_name,
                            field: slot.meta.ident,
                            reference,
                        })?;
                Ok(Some(transformer.transform(&raw)))
            }
            None => Ok(Some(raw)),
        }
    }
}

/// Orders the element-role slots of a plan by the type's display-name
/// precedence list. Slots whose display name is not in the list follow the
/// named ones in plan order — they are never dropped.
fn ordered_elements<'p, 'a>(
    plan: &'p [FieldSlot<'a>],
    element_order: &[&str],
) -> Vec<&'p FieldSlot<'a>> {
    let elements: Vec<&FieldSlot<'a>> = plan
        .iter()
        .filter(|s| s.meta.role == FieldRole::Element)
        .collect();

    let mut ordered: Vec<&FieldSlot<'a>> = Vec::with_capacity(elements.len());
    for name in element_order {
        ordered.extend(
            elements
                .iter()
                .filter(|s| s.meta.display_name() == *name)
                .copied(),
        );
    }
    ordered.extend(
        elements
            .iter()
            .filter(|s| !element_order.contains(&s.meta.display_name()))
            .copied(),
    );

    ordered
}
