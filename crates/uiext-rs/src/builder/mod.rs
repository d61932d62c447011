//! Builder functions that shape kind-specific attribute records into [`Node`]s.
//!
//! Every builder is a thin wrapper around [`build`], which walks the kind's
//! [`KindSpec`] from the capability table. The field order in the table is
//! the order in which attributes are stored and later emitted, regardless of
//! the order of keys in the caller's record.

pub mod layout;
pub mod widget;

use crate::capability::{KindSpec, Shape};
use crate::error::UiError;
use crate::log::{LogContext, my_debug};
use crate::node::{Attributes, Children, Node, Value, make_node};

/// Record key that identifies a widget.
pub(crate) const WIDGET_ID_KEY: &str = "widgetId";

/// Kind of the node holding a widget's choices.
pub(crate) const VALUE_SPACE_KIND: &str = "ValueSpace";

/// Builds a node for `spec` from `record` and `children`.
///
/// # Errors
/// Returns a validation error if the record is missing a required field,
/// carries an unknown or invalid field, or if children are given to a kind
/// that does not hold any. A [`Shape::ValueSpaceWidget`] kind without a
/// non-empty `ValueSpace` child is missing its choice field.
pub fn build(
    spec: &KindSpec,
    record: &Attributes,
    children: impl Into<Children>,
) -> Result<Node, UiError> {
    let children = children.into();
    if matches!(spec.shape, Shape::Leaf | Shape::Widget) && !children.is_empty() {
        return Err(UiError::UnexpectedChildren { kind: spec.kind });
    }

    let attributes = shape_attributes(spec, record)?;
    if let Shape::ValueSpaceWidget { field } = spec.shape {
        check_value_space(spec.kind, field, &children)?;
    }
    my_debug!(
        LogContext {
            stage: "build",
            kind: spec.kind
        },
        "{} attributes, {} children",
        attributes.len(),
        children.len()
    );
    make_node(spec.kind, attributes, children)
}

/// A value-space widget holds exactly one `ValueSpace` node with at least
/// one choice in it.
fn check_value_space(
    kind: &'static str,
    field: &'static str,
    children: &Children,
) -> Result<(), UiError> {
    match children.as_slice() {
        [] => Err(UiError::MissingField { kind, field }),
        [space] if space.kind() == VALUE_SPACE_KIND => {
            if space.children().is_empty() {
                Err(UiError::MissingField { kind, field })
            } else {
                Ok(())
            }
        }
        _ => Err(UiError::UnexpectedChildren { kind }),
    }
}

/// Validates `record` against `spec` and lays it out in canonical order.
///
/// Widgets always start with `WidgetId` followed by `Type`, which is stamped
/// with the kind name.
fn shape_attributes(
    spec: &KindSpec,
    record: &Attributes,
) -> Result<Attributes, UiError> {
    let is_widget = spec.shape.is_widget();

    if let Some(unknown) = record
        .keys()
        .find(|key| spec.field(key).is_none() && !(is_widget && *key == WIDGET_ID_KEY))
    {
        return Err(UiError::UnknownField {
            kind: spec.kind,
            field: unknown.to_string(),
        });
    }

    let mut attributes = Attributes::new();

    if is_widget {
        match record.get(WIDGET_ID_KEY) {
            Some(Value::Text(id)) => attributes.set("WidgetId", id.as_str()),
            Some(_) => {
                return Err(UiError::WrongType {
                    kind: spec.kind,
                    field: WIDGET_ID_KEY,
                    expected: "a string",
                });
            }
            None => {
                return Err(UiError::MissingField {
                    kind: spec.kind,
                    field: WIDGET_ID_KEY,
                });
            }
        }
        attributes.set("Type", spec.kind);
    }

    for field in spec
        .fields
        .iter()
        .filter(|f| !(is_widget && f.key == WIDGET_ID_KEY))
    {
        match record.get(field.key) {
            Some(value) => {
                field.rule.check(spec.kind, field.key, value)?;
                attributes.set(field.element, value.clone());
            }
            None if field.required => {
                return Err(UiError::MissingField {
                    kind: spec.kind,
                    field: field.key,
                });
            }
            None => {}
        }
    }

    Ok(attributes)
}
