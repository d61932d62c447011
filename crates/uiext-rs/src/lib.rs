// src/lib.rs

#![doc = "Builds UI extensions (panels, pages, rows, widgets) for video devices"]
#![doc = "declaratively and serializes them to the XML the device command interface expects."]
#![doc = ""]
#![doc = "Trees are built bottom-up with the builder functions and rendered once:"]
#![doc = ""]
#![doc = "```"]
#![doc = "use uiext_rs::{attrs, button, config, page, panel, row, to_xml};"]
#![doc = ""]
#![doc = "let ui = config(attrs! { \"version\" => \"1.8\" },"]
#![doc = "    panel(attrs! { \"panelId\" => \"p1\" },"]
#![doc = "        page(attrs! { \"pageId\" => \"pg1\" },"]
#![doc = "            row(attrs! {}, button(attrs! { \"widgetId\" => \"b1\" })?)?)?)?)?;"]
#![doc = "assert!(to_xml(&ui)?.starts_with(\"<Config><Version>1.8</Version><Panel>\"));"]
#![doc = "# Ok::<(), uiext_rs::UiError>(())"]
#![doc = "```"]

// --- Crate Modules ---

pub mod builder;
pub mod capability;
mod error;
mod log;
mod node;
mod serializer;

// --- Public API Re-exports ---

pub use builder::layout::{action_button, config, page, panel, row, web_app};
pub use builder::widget::{
    button, directional_pad, group_button, slider, spacer, spinner, text, toggle_button,
};
pub use capability::{CapabilityTable, FieldSpec, KindSpec, Rule, Shape};
pub use error::UiError;
pub use node::{Attributes, Children, Node, Value, make_node};
pub use serializer::{Indent, XmlOptions, to_xml, to_xml_with};
