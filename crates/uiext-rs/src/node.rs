// crates/uiext-rs/src/node.rs

//! The uniform tree element used for every UI construct.
//!
//! A [`Node`] is a kind tag, an ordered attribute list and an ordered child
//! list. Nodes are created once and never mutated afterwards; trees are
//! composed by nesting finished nodes inside new ones.

use crate::error::UiError;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A scalar attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Number(f64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i.into())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Integer(i.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

/// Ordered key/value pairs with unique keys.
///
/// Used both for the records callers hand to builders and for the
/// attributes stored on a [`Node`]. Setting a key that already exists
/// replaces the value but keeps the original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: Vec<(String, Value)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style variant of [`Attributes::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (key, value) in iter {
            attributes.set(key, value);
        }
        attributes
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct AttributesVisitor;

impl<'de> Visitor<'de> for AttributesVisitor {
    type Value = Attributes;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of attribute names to scalar values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Attributes, A::Error> {
        let mut attributes = Attributes::new();
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            attributes.set(key, value);
        }
        Ok(attributes)
    }
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AttributesVisitor)
    }
}

/// Builds an [`Attributes`] record from `key => value` pairs.
///
/// ```
/// let record = uiext_rs::attrs! { "widgetId" => "volume", "size" => 2 };
/// assert_eq!(record.len(), 2);
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::Attributes::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut attributes = $crate::Attributes::new();
        $( attributes.set($key, $value); )+
        attributes
    }};
}

/// The children handed to a builder, normalized to an ordered list.
///
/// Accepts a single node, a vector or array of nodes, an `Option`, or `()`
/// for "no children".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Children(Vec<Node>);

impl Children {
    pub fn none() -> Self {
        Children(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[Node] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Node> {
        self.0
    }
}

impl From<Node> for Children {
    fn from(node: Node) -> Self {
        Children(vec![node])
    }
}

impl From<Vec<Node>> for Children {
    fn from(nodes: Vec<Node>) -> Self {
        Children(nodes)
    }
}

impl<const N: usize> From<[Node; N]> for Children {
    fn from(nodes: [Node; N]) -> Self {
        Children(nodes.into())
    }
}

impl From<Option<Node>> for Children {
    fn from(node: Option<Node>) -> Self {
        Children(node.into_iter().collect())
    }
}

impl From<()> for Children {
    fn from(_: ()) -> Self {
        Children::none()
    }
}

/// A single element of the UI tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    kind: String,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    attributes: Attributes,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

impl Node {
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// A widget is a leaf carrying both `WidgetId` and `Type`.
    pub fn is_widget(&self) -> bool {
        self.attributes.contains_key("WidgetId") && self.attributes.contains_key("Type")
    }

    /// Depth of the subtree rooted here (a lone node has depth 1).
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Node::depth).max().unwrap_or(0)
    }
}

/// Creates a node of `kind` with the given attributes and children.
///
/// Attribute keys are stored verbatim, in record order. No check is made
/// that the children are of a kind the parent can hold.
///
/// # Errors
/// Returns `UiError::EmptyKind` if `kind` is empty.
pub fn make_node(
    kind: impl Into<String>,
    attributes: Attributes,
    children: impl Into<Children>,
) -> Result<Node, UiError> {
    let kind = kind.into();
    if kind.is_empty() {
        return Err(UiError::EmptyKind);
    }
    Ok(Node {
        kind,
        attributes,
        children: children.into().into_vec(),
    })
}
