// crates/uiext-rs/src/serializer.rs

//! Renders a [`Node`] tree as the XML dialect of the device command interface.
//!
//! Each node becomes an element named after its kind. Attributes are NOT
//! written as XML attributes: every attribute becomes a child element named
//! after its key, holding the value as escaped text. Attribute elements come
//! first, in stored order, followed by the child nodes in order.

use crate::error::UiError;
use crate::log::{LogContext, my_trace};
use crate::node::Node;
use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Indentation used for pretty printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    pub ch: u8,
    pub size: usize,
}

/// Output options for [`to_xml_with`].
///
/// The default is compact output without an XML declaration, which is what
/// the device command interface takes as its body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XmlOptions {
    /// Line breaks and indentation between elements.
    ///
    /// An element without attributes or children is still written as a
    /// start and end tag, so in pretty output an empty container spans two
    /// lines (`<Page>` then `</Page>`), where compact output has `<Page></Page>`.
    pub indent: Option<Indent>,
    /// Prefix the output with `<?xml version="1.0" encoding="UTF-8"?>`.
    pub declaration: bool,
}

impl XmlOptions {
    /// Two-space indentation, no declaration.
    pub fn pretty() -> Self {
        XmlOptions {
            indent: Some(Indent { ch: b' ', size: 2 }),
            declaration: false,
        }
    }
}

/// Serializes `node` and all its descendants into a compact XML string.
///
/// Typically called once, on the `Config` root.
///
/// # Errors
/// Returns a structural error if any node kind or attribute key is empty or
/// not a valid element name, or if attribute text holds a character XML 1.0
/// does not allow.
pub fn to_xml(node: &Node) -> Result<String, UiError> {
    to_xml_with(node, &XmlOptions::default())
}

/// Serializes `node` with the given output options.
pub fn to_xml_with(node: &Node, options: &XmlOptions) -> Result<String, UiError> {
    let mut buffer = Vec::new();
    if options.declaration {
        buffer.write_all(XML_DECLARATION.as_bytes())?;
    }

    let mut writer = match options.indent {
        Some(indent) => Writer::new_with_indent(buffer, indent.ch, indent.size),
        None => Writer::new(buffer),
    };
    write_node(&mut writer, node, 1)?;

    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_node<W: Write>(writer: &mut Writer<W>, node: &Node, depth: usize) -> Result<(), UiError> {
    let kind = node.kind();
    check_element_name(kind)?;
    my_trace!(
        LogContext {
            stage: "write",
            kind
        },
        "depth {}, {} attributes, {} children",
        depth,
        node.attributes().len(),
        node.children().len()
    );

    writer.write_event(Event::Start(BytesStart::new(kind)))?;

    for (key, value) in node.attributes().iter() {
        check_element_name(key)?;
        let text = value.to_string();
        check_text(key, &text)?;
        writer.write_event(Event::Start(BytesStart::new(key)))?;
        writer.write_event(Event::Text(BytesText::from_escaped(escape(text.as_str()))))?;
        writer.write_event(Event::End(BytesEnd::new(key)))?;
    }

    for child in node.children() {
        write_node(writer, child, depth + 1)?;
    }

    writer.write_event(Event::End(BytesEnd::new(kind)))?;
    Ok(())
}

fn check_element_name(name: &str) -> Result<(), UiError> {
    if name.is_empty() {
        my_trace!(("element", "<empty>"), "rejected");
        return Err(UiError::EmptyKind);
    }
    if !is_element_name(name) {
        return Err(UiError::InvalidElementName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Rejects characters outside the XML 1.0 `Char` production. Escaping only
/// covers markup characters, so these would otherwise be written raw.
fn check_text(element: &str, text: &str) -> Result<(), UiError> {
    match text.chars().find(|&c| !is_xml_char(c)) {
        Some(ch) => Err(UiError::InvalidCharacter {
            element: element.to_string(),
            ch,
        }),
        None => Ok(()),
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r') || (c >= ' ' && !matches!(c, '\u{FFFE}' | '\u{FFFF}'))
}

/// Simplified XML `Name` production without namespaces: a letter or `_`,
/// then letters, digits, `_`, `-` or `.`.
fn is_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
