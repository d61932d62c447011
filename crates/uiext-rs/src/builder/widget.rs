// crates/uiext-rs/src/builder/widget.rs

//! Builders for widgets, the leaf controls placed inside rows.
//!
//! Every widget requires `widgetId` and is emitted as `WidgetId`, then
//! `Type` (the widget's own kind), then its optional fields.

use super::{VALUE_SPACE_KIND, build};
use crate::attrs;
use crate::capability::{
    BUTTON, DIRECTIONAL_PAD, GROUP_BUTTON, SLIDER, SPACER, SPINNER, TEXT, TOGGLE_BUTTON,
};
use crate::error::UiError;
use crate::log::{LogContext, my_debug};
use crate::node::{Attributes, Node, make_node};

/// Accepts `text`, `size` (1-4) and `icon` (one of [`crate::capability::BUTTON_ICONS`]).
pub fn button(attributes: Attributes) -> Result<Node, UiError> {
    build(&BUTTON, &attributes, ())
}

/// Creates a group button from an ordered list of `(key, name)` pairs.
///
/// The pairs are emitted as a `ValueSpace` element holding one `Value`
/// element (`Key`, `Name`) per button, after the widget's attributes.
///
/// # Errors
/// `UiError::MissingField` with field `buttons` if the list is empty,
/// plus the usual widget validation errors.
pub fn group_button<K, N>(
    attributes: Attributes,
    buttons: impl IntoIterator<Item = (K, N)>,
) -> Result<Node, UiError>
where
    K: Into<String>,
    N: Into<String>,
{
    let values = buttons
        .into_iter()
        .map(|(key, name)| {
            let (key, name): (String, String) = (key.into(), name.into());
            make_node("Value", attrs! { "Key" => key, "Name" => name }, ())
        })
        .collect::<Result<Vec<_>, UiError>>()?;

    my_debug!(
        LogContext {
            stage: "build",
            kind: GROUP_BUTTON.kind
        },
        "{} buttons in value space",
        values.len()
    );
    let value_space = make_node(VALUE_SPACE_KIND, Attributes::new(), values)?;
    build(&GROUP_BUTTON, &attributes, value_space)
}

/// Accepts `size` and `style` (vertical, horizontal, plusminus).
pub fn spinner(attributes: Attributes) -> Result<Node, UiError> {
    build(&SPINNER, &attributes, ())
}

pub fn slider(attributes: Attributes) -> Result<Node, UiError> {
    build(&SLIDER, &attributes, ())
}

pub fn spacer(attributes: Attributes) -> Result<Node, UiError> {
    build(&SPACER, &attributes, ())
}

pub fn directional_pad(attributes: Attributes) -> Result<Node, UiError> {
    build(&DIRECTIONAL_PAD, &attributes, ())
}

/// Accepts `text`, `size`, `fontSize` (small, normal) and `align`.
pub fn text(attributes: Attributes) -> Result<Node, UiError> {
    build(&TEXT, &attributes, ())
}

pub fn toggle_button(attributes: Attributes) -> Result<Node, UiError> {
    build(&TOGGLE_BUTTON, &attributes, ())
}
