// crates/uiext-rs/src/builder/layout.rs

//! Builders for the structural kinds: the config root, panels and their
//! variants, pages and rows.

use super::build;
use crate::capability::{ACTION_BUTTON, CONFIG, PAGE, PANEL, ROW, WEB_APP};
use crate::error::UiError;
use crate::node::{Attributes, Children, Node};

/// Creates the root of a UI extension. Accepts `version`; children are panels.
pub fn config(attributes: Attributes, panels: impl Into<Children>) -> Result<Node, UiError> {
    build(&CONFIG, &attributes, panels)
}

/// Creates a panel holding pages.
///
/// Accepts `panelId`, `type` (Home, InCall, StatusBar, Never), `color`,
/// `icon` (one of [`crate::capability::PANEL_ICONS`]), `order` and `name`.
pub fn panel(attributes: Attributes, pages: impl Into<Children>) -> Result<Node, UiError> {
    build(&PANEL, &attributes, pages)
}

/// Creates an action button: a panel entry without pages.
pub fn action_button(attributes: Attributes) -> Result<Node, UiError> {
    build(&ACTION_BUTTON, &attributes, ())
}

/// Creates a web app entry. `url` is required; `icon` is free text.
pub fn web_app(attributes: Attributes) -> Result<Node, UiError> {
    build(&WEB_APP, &attributes, ())
}

/// Creates a page holding rows. Accepts `pageId`, `name` and `hideRowNames`.
pub fn page(attributes: Attributes, rows: impl Into<Children>) -> Result<Node, UiError> {
    build(&PAGE, &attributes, rows)
}

/// Creates a row holding widgets. Accepts `text`.
pub fn row(attributes: Attributes, widgets: impl Into<Children>) -> Result<Node, UiError> {
    build(&ROW, &attributes, widgets)
}
