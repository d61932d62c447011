// crates/uiext-rs/src/error.rs

use std::fmt;
use std::string::FromUtf8Error;

/// Errors that can occur while building or serializing a UI extension tree.
///
/// Builders raise the validation variants at construction time; the
/// serializer raises the structural variants. Nothing is recovered
/// internally, every error reaches the caller unchanged.
#[derive(Debug)]
pub enum UiError {
    /// A required field was absent from the attribute record (e.g. `widgetId`).
    MissingField {
        kind: &'static str,
        field: &'static str,
    },

    /// A field carried a scalar of the wrong type (e.g. a string for `size`).
    WrongType {
        kind: &'static str,
        field: &'static str,
        expected: &'static str,
    },

    /// An enumerated or ranged field was outside its allowed value set.
    NotAllowed {
        kind: &'static str,
        field: &'static str,
        value: String,
    },

    /// The record contained a key the kind does not declare.
    UnknownField { kind: &'static str, field: String },

    /// Children were supplied to a kind that cannot hold any.
    UnexpectedChildren { kind: &'static str },

    /// The capability table has no entry for the requested kind.
    UnknownKind(String),

    /// A node was constructed or serialized with an empty kind.
    EmptyKind,

    /// A node kind or attribute key is not a well-formed XML element name.
    InvalidElementName { name: String },

    /// Attribute text holds a character XML 1.0 does not allow (e.g. U+0001).
    InvalidCharacter { element: String, ch: char },

    /// An I/O error from the underlying `quick-xml` writer.
    XmlWriting(std::io::Error),

    /// The writer produced bytes that are not valid UTF-8.
    Utf8(FromUtf8Error),
}

impl UiError {
    /// `true` for errors raised by builders while shaping attribute records.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            UiError::MissingField { .. }
                | UiError::WrongType { .. }
                | UiError::NotAllowed { .. }
                | UiError::UnknownField { .. }
                | UiError::UnexpectedChildren { .. }
                | UiError::UnknownKind(_)
        )
    }

    /// `true` for errors raised because a tree cannot be rendered as markup.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            UiError::EmptyKind
                | UiError::InvalidElementName { .. }
                | UiError::InvalidCharacter { .. }
        )
    }
}

impl From<std::io::Error> for UiError {
    fn from(e: std::io::Error) -> Self {
        UiError::XmlWriting(e)
    }
}

impl From<FromUtf8Error> for UiError {
    fn from(e: FromUtf8Error) -> Self {
        UiError::Utf8(e)
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::MissingField { kind, field } => {
                write!(f, "{}: missing required field '{}'", kind, field)
            }
            UiError::WrongType {
                kind,
                field,
                expected,
            } => write!(f, "{}: field '{}' must be {}", kind, field, expected),
            UiError::NotAllowed { kind, field, value } => {
                write!(f, "{}: value '{}' is not allowed for field '{}'", kind, value, field)
            }
            UiError::UnknownField { kind, field } => {
                write!(f, "{}: unknown field '{}'", kind, field)
            }
            UiError::UnexpectedChildren { kind } => {
                write!(f, "{}: this element does not accept children", kind)
            }
            UiError::UnknownKind(kind) => write!(f, "Unknown element kind: {}", kind),
            UiError::EmptyKind => write!(f, "Node kind must not be empty"),
            UiError::InvalidElementName { name } => {
                write!(f, "Invalid XML element name: '{}'", name)
            }
            UiError::InvalidCharacter { element, ch } => write!(
                f,
                "Element '{}' contains U+{:04X}, which is not allowed in XML",
                element, *ch as u32
            ),
            UiError::XmlWriting(e) => write!(f, "XML writing error: {}", e),
            UiError::Utf8(e) => write!(f, "Serialized output is not UTF-8: {}", e),
        }
    }
}

impl std::error::Error for UiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UiError::XmlWriting(e) => Some(e),
            UiError::Utf8(e) => Some(e),
            _ => None,
        }
    }
}
