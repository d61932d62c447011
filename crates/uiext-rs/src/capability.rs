// crates/uiext-rs/src/capability.rs

//! The capability table: which fields each element kind accepts, how each
//! field is validated, and in which order fields are emitted.
//!
//! The tables here are plain data. Vendor additions (new icons, new widget
//! kinds) are made by extending a slice or registering a [`KindSpec`] on a
//! [`CapabilityTable`]; the builders themselves never branch on a kind name.

use crate::builder;
use crate::error::UiError;
use crate::node::{Attributes, Children, Node, Value};
use std::collections::BTreeMap;

// --- Enumerated value sets ---

/// Where a panel is shown.
pub const PANEL_TYPES: &[&str] = &["Home", "InCall", "StatusBar", "Never"];

/// Icons available for panels, action buttons and web apps.
pub const PANEL_ICONS: &[&str] = &[
    "Blinds",
    "Briefing",
    "Camera",
    "Concierge",
    "Disc",
    "Handset",
    "Help",
    "Helpdesk",
    "Home",
    "Hvac",
    "Info",
    "Input",
    "Language",
    "Laptop",
    "Lightbulb",
    "Media",
    "Microphone",
    "Power",
    "Proximity",
    "Record",
    "Sliders",
    "Tv",
];

/// Icons available on a `Button` widget.
pub const BUTTON_ICONS: &[&str] = &[
    "arrow_down",
    "arrow_left",
    "arrow_right",
    "arrow_up",
    "audio_minus",
    "audio_plus",
    "back",
    "blue",
    "eject",
    "end",
    "fast_bw",
    "fast_fw",
    "green",
    "help",
    "home",
    "list",
    "mic",
    "mic_muted",
    "minus",
    "pause",
    "phone",
    "play",
    "play_pause",
    "plus",
    "power",
    "record",
    "red",
    "skip_bw",
    "skip_fw",
    "speaker",
    "speaker_muted",
    "stop",
    "video",
    "video_muted",
    "volume_muted",
    "yellow",
    "zoom_in",
    "zoom_out",
];

pub const SPINNER_STYLES: &[&str] = &["vertical", "horizontal", "plusminus"];

pub const FONT_SIZES: &[&str] = &["small", "normal"];

/// Smallest and largest widget size, in grid columns.
pub const WIDGET_SIZE_MIN: i64 = 1;
pub const WIDGET_SIZE_MAX: i64 = 4;

/// Validation rule for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Any string.
    Text,
    /// Any integer.
    Integer,
    /// An integer within `min..=max`.
    IntRange { min: i64, max: i64 },
    Boolean,
    /// A string from a fixed set.
    OneOf(&'static [&'static str]),
}

impl Rule {
    fn expected(&self) -> &'static str {
        match self {
            Rule::Text | Rule::OneOf(_) => "a string",
            Rule::Integer | Rule::IntRange { .. } => "an integer",
            Rule::Boolean => "a boolean",
        }
    }

    /// Checks `value` against this rule for `field` of `kind`.
    pub fn check(
        &self,
        kind: &'static str,
        field: &'static str,
        value: &Value,
    ) -> Result<(), UiError> {
        let wrong_type = || UiError::WrongType {
            kind,
            field,
            expected: self.expected(),
        };
        match (self, value) {
            (Rule::Text, Value::Text(_)) => Ok(()),
            (Rule::Integer, Value::Integer(_)) => Ok(()),
            (Rule::Boolean, Value::Bool(_)) => Ok(()),
            (Rule::IntRange { min, max }, Value::Integer(i)) => {
                if (*min..=*max).contains(i) {
                    Ok(())
                } else {
                    Err(UiError::NotAllowed {
                        kind,
                        field,
                        value: i.to_string(),
                    })
                }
            }
            (Rule::OneOf(allowed), Value::Text(s)) => {
                if allowed.contains(&s.as_str()) {
                    Ok(())
                } else {
                    Err(UiError::NotAllowed {
                        kind,
                        field,
                        value: s.clone(),
                    })
                }
            }
            _ => Err(wrong_type()),
        }
    }
}

/// One field a kind accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key used in the caller's attribute record (camelCase).
    pub key: &'static str,
    /// Element name emitted in the markup (PascalCase).
    pub element: &'static str,
    pub rule: Rule,
    pub required: bool,
}

impl FieldSpec {
    pub const fn optional(key: &'static str, element: &'static str, rule: Rule) -> Self {
        FieldSpec {
            key,
            element,
            rule,
            required: false,
        }
    }

    pub const fn required(key: &'static str, element: &'static str, rule: Rule) -> Self {
        FieldSpec {
            key,
            element,
            rule,
            required: true,
        }
    }
}

/// How a kind sits in the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Holds child nodes (Config, Panel, Page, Row).
    Container,
    /// Never holds children (ActionButton, WebApp).
    Leaf,
    /// Leaf control stamped with `WidgetId` and `Type`.
    Widget,
    /// Widget whose choices are held in a single non-empty `ValueSpace`
    /// child. `field` is the record-side name of the choice list, reported
    /// when the value space is missing or empty.
    ValueSpaceWidget { field: &'static str },
}

impl Shape {
    /// `true` for shapes that carry `WidgetId` and `Type`.
    pub fn is_widget(self) -> bool {
        matches!(self, Shape::Widget | Shape::ValueSpaceWidget { .. })
    }
}

/// The fields of one element kind, in canonical emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSpec {
    pub kind: &'static str,
    pub shape: Shape,
    pub fields: &'static [FieldSpec],
}

impl KindSpec {
    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }
}

// --- Shared field definitions ---

const WIDGET_ID: FieldSpec = FieldSpec::required("widgetId", "WidgetId", Rule::Text);
const WIDGET_SIZE: FieldSpec = FieldSpec::optional(
    "size",
    "Size",
    Rule::IntRange {
        min: WIDGET_SIZE_MIN,
        max: WIDGET_SIZE_MAX,
    },
);
const WIDGET_TEXT: FieldSpec = FieldSpec::optional("text", "Text", Rule::Text);

const PANEL_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("panelId", "PanelId", Rule::Text),
    FieldSpec::optional("type", "Type", Rule::OneOf(PANEL_TYPES)),
    FieldSpec::optional("color", "Color", Rule::Text),
    FieldSpec::optional("icon", "Icon", Rule::OneOf(PANEL_ICONS)),
    FieldSpec::optional("order", "Order", Rule::Integer),
    FieldSpec::optional("name", "Name", Rule::Text),
];

// --- Standard kinds ---

pub const CONFIG: KindSpec = KindSpec {
    kind: "Config",
    shape: Shape::Container,
    fields: &[FieldSpec::optional("version", "Version", Rule::Text)],
};

pub const PANEL: KindSpec = KindSpec {
    kind: "Panel",
    shape: Shape::Container,
    fields: PANEL_FIELDS,
};

pub const ACTION_BUTTON: KindSpec = KindSpec {
    kind: "ActionButton",
    shape: Shape::Leaf,
    fields: PANEL_FIELDS,
};

pub const WEB_APP: KindSpec = KindSpec {
    kind: "WebApp",
    shape: Shape::Leaf,
    fields: &[
        FieldSpec::optional("panelId", "PanelId", Rule::Text),
        FieldSpec::required("url", "Url", Rule::Text),
        FieldSpec::optional("type", "Type", Rule::OneOf(PANEL_TYPES)),
        FieldSpec::optional("color", "Color", Rule::Text),
        FieldSpec::optional("icon", "Icon", Rule::Text),
        FieldSpec::optional("order", "Order", Rule::Integer),
        FieldSpec::optional("name", "Name", Rule::Text),
    ],
};

pub const PAGE: KindSpec = KindSpec {
    kind: "Page",
    shape: Shape::Container,
    fields: &[
        FieldSpec::optional("pageId", "PageId", Rule::Text),
        FieldSpec::optional("name", "Name", Rule::Text),
        FieldSpec::optional("hideRowNames", "HideRowNames", Rule::Boolean),
    ],
};

pub const ROW: KindSpec = KindSpec {
    kind: "Row",
    shape: Shape::Container,
    fields: &[FieldSpec::optional("text", "Text", Rule::Text)],
};

pub const BUTTON: KindSpec = KindSpec {
    kind: "Button",
    shape: Shape::Widget,
    fields: &[
        WIDGET_ID,
        WIDGET_TEXT,
        WIDGET_SIZE,
        FieldSpec::optional("icon", "Icon", Rule::OneOf(BUTTON_ICONS)),
    ],
};

pub const GROUP_BUTTON: KindSpec = KindSpec {
    kind: "GroupButton",
    shape: Shape::ValueSpaceWidget { field: "buttons" },
    fields: &[WIDGET_ID],
};

pub const SPINNER: KindSpec = KindSpec {
    kind: "Spinner",
    shape: Shape::Widget,
    fields: &[
        WIDGET_ID,
        WIDGET_SIZE,
        FieldSpec::optional("style", "Style", Rule::OneOf(SPINNER_STYLES)),
    ],
};

pub const SLIDER: KindSpec = KindSpec {
    kind: "Slider",
    shape: Shape::Widget,
    fields: &[WIDGET_ID, WIDGET_SIZE],
};

pub const SPACER: KindSpec = KindSpec {
    kind: "Spacer",
    shape: Shape::Widget,
    fields: &[WIDGET_ID, WIDGET_SIZE],
};

pub const DIRECTIONAL_PAD: KindSpec = KindSpec {
    kind: "DirectionalPad",
    shape: Shape::Widget,
    fields: &[WIDGET_ID, WIDGET_TEXT],
};

// `align` is left open: the device reference does not pin its value set.
pub const TEXT: KindSpec = KindSpec {
    kind: "Text",
    shape: Shape::Widget,
    fields: &[
        WIDGET_ID,
        WIDGET_TEXT,
        WIDGET_SIZE,
        FieldSpec::optional("fontSize", "FontSize", Rule::OneOf(FONT_SIZES)),
        FieldSpec::optional("align", "Align", Rule::Text),
    ],
};

pub const TOGGLE_BUTTON: KindSpec = KindSpec {
    kind: "ToggleButton",
    shape: Shape::Widget,
    fields: &[WIDGET_ID],
};

/// Every kind the standard builders know about.
pub const STANDARD_KINDS: &[KindSpec] = &[
    CONFIG,
    PANEL,
    ACTION_BUTTON,
    WEB_APP,
    PAGE,
    ROW,
    BUTTON,
    GROUP_BUTTON,
    SPINNER,
    SLIDER,
    SPACER,
    DIRECTIONAL_PAD,
    TEXT,
    TOGGLE_BUTTON,
];

/// A lookup of kind name to [`KindSpec`], extendable at runtime.
#[derive(Debug, Clone, Default)]
pub struct CapabilityTable {
    kinds: BTreeMap<&'static str, KindSpec>,
}

impl CapabilityTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table of all standard kinds.
    pub fn standard() -> Self {
        STANDARD_KINDS
            .iter()
            .fold(Self::new(), |table, spec| table.with(*spec))
    }

    /// Registers `spec`, replacing any existing entry of the same kind.
    pub fn with(mut self, spec: KindSpec) -> Self {
        self.kinds.insert(spec.kind, spec);
        self
    }

    pub fn get(&self, kind: &str) -> Option<&KindSpec> {
        self.kinds.get(kind)
    }

    /// Registered kind names, sorted.
    pub fn kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kinds.keys().copied()
    }

    /// Builds a node of any registered kind.
    ///
    /// # Errors
    /// `UiError::UnknownKind` if `kind` is not registered, otherwise any
    /// validation error of the generic builder.
    pub fn build(
        &self,
        kind: &str,
        attributes: &Attributes,
        children: impl Into<Children>,
    ) -> Result<Node, UiError> {
        let spec = self
            .get(kind)
            .ok_or_else(|| UiError::UnknownKind(kind.to_string()))?;
        builder::build(spec, attributes, children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_has_all_kinds() {
        let table = CapabilityTable::standard();
        assert_eq!(table.kinds().count(), STANDARD_KINDS.len());
        for spec in STANDARD_KINDS {
            assert_eq!(table.get(spec.kind), Some(spec));
        }
    }

    #[test]
    fn test_element_names_follow_casing_convention() {
        // The element name is the key with its first letter upper-cased.
        for spec in STANDARD_KINDS {
            for field in spec.fields {
                let mut chars = field.key.chars();
                let first = chars.next().unwrap().to_ascii_uppercase();
                let expected: String = core::iter::once(first).chain(chars).collect();
                assert_eq!(field.element, expected, "{}.{}", spec.kind, field.key);
            }
        }
    }

    #[test]
    fn test_widgets_lead_with_widget_id() {
        for spec in STANDARD_KINDS.iter().filter(|s| s.shape.is_widget()) {
            assert_eq!(spec.fields[0], WIDGET_ID, "{}", spec.kind);
        }
    }

    #[test]
    fn test_rule_checks() {
        let size = WIDGET_SIZE.rule;
        assert!(size.check("Slider", "size", &Value::Integer(4)).is_ok());
        assert!(matches!(
            size.check("Slider", "size", &Value::Integer(5)),
            Err(UiError::NotAllowed { field: "size", .. })
        ));
        assert!(matches!(
            size.check("Slider", "size", &Value::from("2")),
            Err(UiError::WrongType {
                expected: "an integer",
                ..
            })
        ));

        let icon = Rule::OneOf(BUTTON_ICONS);
        assert!(icon.check("Button", "icon", &Value::from("play_pause")).is_ok());
        assert!(matches!(
            icon.check("Button", "icon", &Value::from("Play")),
            Err(UiError::NotAllowed { .. })
        ));

        assert!(Rule::Boolean.check("Page", "hideRowNames", &Value::Bool(false)).is_ok());
        assert!(Rule::Integer.check("Panel", "order", &Value::Number(1.5)).is_err());
    }

    #[test]
    fn test_custom_kind_registration() {
        const CAMERA_VIEW: KindSpec = KindSpec {
            kind: "CameraView",
            shape: Shape::Widget,
            fields: &[FieldSpec::required("widgetId", "WidgetId", Rule::Text)],
        };
        let table = CapabilityTable::standard().with(CAMERA_VIEW);
        assert!(table.get("CameraView").is_some());
        assert!(CapabilityTable::standard().get("CameraView").is_none());
    }
}
