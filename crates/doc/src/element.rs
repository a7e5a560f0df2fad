//! The document tree node.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

const INDENT: &str = "    ";

/// One node of a mutable XML document: a name, optional nested text,
/// attributes in insertion order, and child elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    text: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    /// Creates an element with no text, attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            text: String::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element carrying nested text.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            text: text.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The element's tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the element.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The element's nested text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The element's attributes, in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// The element's children, in insertion order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Appends a child element and returns a mutable borrow of it, so
    /// construction can continue into the subtree.
    pub fn add_child(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        self.children
            .last_mut()
            .expect("children is non-empty after push")
    }

    /// Appends a child with the given name and text.
    pub fn add_tag(&mut self, name: impl Into<String>, text: impl Into<String>) -> &mut Element {
        self.add_child(Element::with_text(name, text))
    }

    /// Looks up an attribute's value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Adds an attribute, or overwrites its value in place if the name is
    /// already present.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Removes an attribute by name. Returns whether it was present.
    pub fn remove_attribute(&mut self, name: &str) -> bool {
        let before = self.attributes.len();
        self.attributes.retain(|(n, _)| n != name);
        self.attributes.len() != before
    }

    /// Visits this element and its descendants in pre-order. Returning
    /// `false` from the visitor prunes descent into that node's subtree.
    pub fn accept<F: FnMut(&Element) -> bool>(&self, visitor: &mut F) {
        if visitor(self) {
            for child in &self.children {
                child.accept(visitor);
            }
        }
    }

    /// Mutable pre-order visit, with the same descent control as
    /// [`Element::accept`].
    pub fn accept_mut<F: FnMut(&mut Element) -> bool>(&mut self, visitor: &mut F) {
        if visitor(self) {
            for child in &mut self.children {
                child.accept_mut(visitor);
            }
        }
    }

    /// Sets an attribute on every element of this subtree named `tag`.
    pub fn add_global_attribute(&mut self, tag: &str, name: &str, value: &str) {
        self.accept_mut(&mut |el| {
            if el.name == tag {
                el.set_attribute(name, value);
            }
            true
        });
    }

    /// Renames every element of this subtree named `old` to `new`.
    pub fn rename_tags(&mut self, old: &str, new: &str) {
        self.accept_mut(&mut |el| {
            if el.name == old {
                el.name = new.to_string();
            }
            true
        });
    }

    /// Renames an attribute on every element named `tag`, keeping its
    /// value and position.
    pub fn rename_global_attribute(&mut self, tag: &str, old: &str, new: &str) {
        self.accept_mut(&mut |el| {
            if el.name == tag
                && let Some(entry) = el.attributes.iter_mut().find(|(n, _)| n == old)
            {
                entry.0 = new.to_string();
            }
            true
        });
    }

    /// Removes an attribute from every element of this subtree named `tag`.
    pub fn remove_global_attribute(&mut self, tag: &str, name: &str) {
        self.accept_mut(&mut |el| {
            if el.name == tag {
                el.remove_attribute(name);
            }
            true
        });
    }

    /// Removes every descendant named `name`, together with its subtree.
    /// The element this is called on is never removed, even on a name
    /// match.
    pub fn remove_tags(&mut self, name: &str) {
        self.children.retain(|c| c.name != name);
        for child in &mut self.children {
            child.remove_tags(name);
        }
    }

    /// Renders the document with an XML prolog, four-space indentation and
    /// self-closing empty elements.
    pub fn pretty(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        self.pretty_into(&mut out, 0);
        out
    }

    fn pretty_into(&self, out: &mut String, indent: usize) {
        let pad = INDENT.repeat(indent);

        out.push_str(&pad);
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attributes {
            out.push_str(&format!(" {name}=\"{value}\""));
        }

        if self.text.is_empty() && self.children.is_empty() {
            out.push_str("/>\n");
            return;
        }

        if self.children.is_empty() {
            out.push_str(&format!(">{}</{}>\n", self.text, self.name));
            return;
        }

        out.push_str(">\n");
        if !self.text.is_empty() {
            out.push_str(&format!("{pad}{INDENT}{}\n", self.text));
        }
        for child in &self.children {
            child.pretty_into(out, indent + 1);
        }
        out.push_str(&format!("{pad}</{}>\n", self.name));
    }

    /// Writes the pretty-printed document to a file, replacing any
    /// existing content.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), root = %self.name, "writing document");
        fs::write(path, self.pretty())
    }
}
