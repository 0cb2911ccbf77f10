//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate used by the HTML scanner.
//!
//! The parser decodes character references, but scanned attribute values
//! must come back exactly as written (templates put encoded sequences in
//! them). [`parse`] escapes every `&` before parsing so decoding restores
//! the original text, and [`raw_text`] undoes the escape for the raw-text
//! elements (`style`, `script`) where no decoding happens.

pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

const AMP_ESCAPE: &str = "&amp;";

/// Parse HTML string into a document, leaving character references undecoded
/// in attribute values.
///
/// Parsing is recovering: any input yields a document.
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html.replace('&', AMP_ESCAPE))
}

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<StrTendril> {
    sel.nodes().first().and_then(dom_query::NodeRef::node_name)
}

/// Get an attribute value as written in the source.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<StrTendril> {
    sel.attr(name)
}

/// Get the raw text content of a `style` or `script` element.
#[must_use]
pub fn raw_text(sel: &Selection) -> String {
    sel.text().replace(AMP_ESCAPE, "&")
}

/// All elements of the document, in document order.
///
/// The contents of a `<template>` are held in a detached fragment that
/// selectors never reach; they are visited right after the template
/// element itself.
#[must_use]
pub fn elements(doc: &Document) -> Vec<NodeRef<'_>> {
    let mut found = Vec::new();
    let mut stack = vec![doc.root()];

    while let Some(node) = stack.pop() {
        if node.is_element() {
            found.push(node);
        }
        stack.extend(node.children_it(true));
        if let Some(contents) = template_contents(&node) {
            stack.push(contents);
        }
    }

    found
}

/// Root of a `<template>` element's contents fragment.
fn template_contents<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    node.element_ref()
        .and_then(|el| el.template_contents)
        .map(|id| NodeRef::new(id, node.tree))
}
