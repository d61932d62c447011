//! Integration tests focused on error handling and edge cases.
//!
//! These tests ensure builders fail fast with a validation error naming the
//! offending kind and field, and that the serializer rejects trees it cannot
//! render, without panicking.

use uiext_rs::capability::{FieldSpec, KindSpec, Rule, Shape};
use uiext_rs::{
    Attributes, CapabilityTable, UiError, attrs, button, config, group_button, make_node, page,
    panel, row, text, to_xml, web_app,
};

#[test]
fn test_missing_widget_id_names_kind_and_field() {
    let result = button(attrs! { "text" => "Call" });
    let err = result.expect_err("Button without widgetId must fail");
    assert!(err.is_validation());
    let msg = err.to_string();
    assert!(msg.contains("Button") && msg.contains("widgetId"), "{}", msg);
}

#[test]
fn test_missing_url_for_web_app() {
    let err = web_app(attrs! { "panelId" => "intranet" }).unwrap_err();
    assert!(
        matches!(
            err,
            UiError::MissingField {
                kind: "WebApp",
                field: "url"
            }
        ),
        "Expected MissingField, got {:?}",
        err
    );
}

#[test]
fn test_wrong_scalar_types_are_not_coerced() {
    // A numeric string is not an integer.
    assert!(matches!(
        panel(attrs! { "order" => "1" }, ()),
        Err(UiError::WrongType {
            kind: "Panel",
            field: "order",
            expected: "an integer"
        })
    ));
    // A number is not a string.
    assert!(matches!(
        config(attrs! { "version" => 1.8 }, ()),
        Err(UiError::WrongType {
            kind: "Config",
            field: "version",
            ..
        })
    ));
    // A float is not an integer, even a whole one.
    assert!(matches!(
        button(attrs! { "widgetId" => "b", "size" => 2.0 }),
        Err(UiError::WrongType { field: "size", .. })
    ));
}

#[test]
fn test_error_is_raised_at_construction_not_serialization() {
    // The failing widget never makes it into a tree.
    let result = row(
        attrs! {},
        vec![button(attrs! { "widgetId" => "ok" }).unwrap()],
    )
    .and_then(|r| page(attrs! { "hideRowNames" => "no" }, r));
    assert!(matches!(result, Err(UiError::WrongType { kind: "Page", .. })));
}

#[test]
fn test_no_parent_child_kind_checking() {
    // Placing a button directly in a config is structurally allowed.
    let odd = config(attrs! {}, button(attrs! { "widgetId" => "b" }).unwrap()).unwrap();
    assert_eq!(
        to_xml(&odd).unwrap(),
        "<Config><Button><WidgetId>b</WidgetId><Type>Button</Type></Button></Config>"
    );
}

#[test]
fn test_unknown_kind_in_table() {
    let table = CapabilityTable::standard();
    match table.build("Carousel", &Attributes::new(), ()) {
        Err(UiError::UnknownKind(kind)) => assert_eq!(kind, "Carousel"),
        other => panic!("Expected UnknownKind, got {:?}", other),
    }
}

#[test]
fn test_vendor_kind_added_without_code_changes() {
    const CAMERA_PRESET: KindSpec = KindSpec {
        kind: "CameraPreset",
        shape: Shape::Widget,
        fields: &[
            FieldSpec::required("widgetId", "WidgetId", Rule::Text),
            FieldSpec::required("preset", "Preset", Rule::IntRange { min: 1, max: 35 }),
            FieldSpec::optional("text", "Text", Rule::Text),
        ],
    };
    let table = CapabilityTable::standard().with(CAMERA_PRESET);

    let missing = table.build("CameraPreset", &attrs! { "widgetId" => "cp" }, ());
    assert!(matches!(
        missing,
        Err(UiError::MissingField {
            kind: "CameraPreset",
            field: "preset"
        })
    ));

    let node = table
        .build(
            "CameraPreset",
            &attrs! { "text" => "Front", "preset" => 3, "widgetId" => "cp" },
            (),
        )
        .unwrap();
    assert_eq!(
        to_xml(&node).unwrap(),
        "<CameraPreset><WidgetId>cp</WidgetId><Type>CameraPreset</Type>\
         <Preset>3</Preset><Text>Front</Text></CameraPreset>"
    );
}

#[test]
fn test_duplicate_record_key_last_write_wins() {
    let node = button(attrs! { "widgetId" => "b", "text" => "First", "text" => "Second" }).unwrap();
    assert_eq!(
        to_xml(&node).unwrap(),
        "<Button><WidgetId>b</WidgetId><Type>Button</Type><Text>Second</Text></Button>"
    );
}

#[test]
fn test_generic_node_with_bad_kind_fails_serialization() {
    let bad = make_node("<Panel>", Attributes::new(), ()).unwrap();
    let root = config(attrs! {}, bad).unwrap();
    let err = to_xml(&root).unwrap_err();
    assert!(err.is_structural(), "Expected structural error, got {:?}", err);
}

#[test]
fn test_empty_kind_fails_fast() {
    assert!(matches!(
        make_node("", attrs! { "A" => 1 }, ()),
        Err(UiError::EmptyKind)
    ));
}

#[test]
fn test_leaf_builders_via_table_reject_children() {
    let table = CapabilityTable::standard();
    let child = make_node("Row", Attributes::new(), ()).unwrap();
    assert!(matches!(
        table.build("ActionButton", &attrs! {}, child),
        Err(UiError::UnexpectedChildren {
            kind: "ActionButton"
        })
    ));
}

#[test]
fn test_group_button_via_table_requires_buttons() {
    let table = CapabilityTable::standard();
    let result = table.build("GroupButton", &attrs! { "widgetId" => "g" }, ());
    assert!(
        matches!(
            result,
            Err(UiError::MissingField {
                kind: "GroupButton",
                field: "buttons"
            })
        ),
        "Expected MissingField, got {:?}",
        result
    );

    let empty_space = make_node("ValueSpace", Attributes::new(), ()).unwrap();
    assert!(matches!(
        table.build("GroupButton", &attrs! { "widgetId" => "g" }, empty_space),
        Err(UiError::MissingField {
            field: "buttons",
            ..
        })
    ));
}

#[test]
fn test_group_button_via_table_matches_named_builder() {
    let table = CapabilityTable::standard();
    let choice = make_node("Value", attrs! { "Key" => "pc", "Name" => "PC" }, ()).unwrap();
    let space = make_node("ValueSpace", Attributes::new(), choice).unwrap();
    let generic = table
        .build("GroupButton", &attrs! { "widgetId" => "g" }, space)
        .unwrap();
    let named = group_button(attrs! { "widgetId" => "g" }, [("pc", "PC")]).unwrap();
    assert_eq!(generic, named);
    assert_eq!(
        to_xml(&generic).unwrap(),
        "<GroupButton><WidgetId>g</WidgetId><Type>GroupButton</Type><ValueSpace>\
         <Value><Key>pc</Key><Name>PC</Name></Value></ValueSpace></GroupButton>"
    );

    let stray = make_node("Row", Attributes::new(), ()).unwrap();
    assert!(matches!(
        table.build("GroupButton", &attrs! { "widgetId" => "g" }, stray),
        Err(UiError::UnexpectedChildren {
            kind: "GroupButton"
        })
    ));
}

#[test]
fn test_control_characters_are_rejected() {
    let t = text(attrs! { "widgetId" => "t", "text" => "a\u{1}b" }).unwrap();
    let err = to_xml(&t).unwrap_err();
    assert!(err.is_structural(), "Expected structural error, got {:?}", err);
    assert!(err.to_string().contains("Text"), "{}", err);
}
