use blockforge_model::{EnumOption, FieldDef, FieldKind};
use pretty_assertions::assert_eq;
use serde_json::json;

// ── Constructors ─────────────────────────────────────────────────

#[test]
fn string_field_defaults() {
    let f = FieldDef::string("title", "Title");
    assert_eq!(f.path, "title");
    assert_eq!(f.label, "Title");
    assert_eq!(f.kind, FieldKind::String { min: None, max: None });
    assert!(!f.required);
    assert_eq!(f.placeholder, None);
}

#[test]
fn builder_modifiers() {
    let f = FieldDef::text("description", "Description")
        .required()
        .placeholder("Enter description")
        .helper_text("Shown under the title")
        .ui_group("content");
    assert!(f.required);
    assert_eq!(f.placeholder.as_deref(), Some("Enter description"));
    assert_eq!(f.helper_text.as_deref(), Some("Shown under the title"));
    assert_eq!(f.ui_group.as_deref(), Some("content"));
}

#[test]
fn number_bounds_and_step() {
    let f = FieldDef::number("rating", "Rating").range(0.0, 5.0).step(0.5);
    assert_eq!(
        f.kind,
        FieldKind::Number {
            min: Some(0.0),
            max: Some(5.0),
            step: Some(0.5)
        }
    );
    assert_eq!(
        serde_json::to_value(&f).unwrap(),
        json!({"path": "rating", "label": "Rating", "kind": "number", "min": 0.0, "max": 5.0, "step": 0.5})
    );
}

#[test]
fn number_modifiers_ignore_other_kinds() {
    let f = FieldDef::string("title", "Title").range(1.0, 2.0).step(1.0);
    assert_eq!(f.kind, FieldKind::String { min: None, max: None });
}

#[test]
fn enumeration_builds_options() {
    let f = FieldDef::enumeration("align", "Alignment", &[("left", "Left"), ("right", "Right")]);
    assert_eq!(
        f.kind,
        FieldKind::Enum {
            options: vec![EnumOption::new("left", "Left"), EnumOption::new("right", "Right")]
        }
    );
}

#[test]
fn array_exposes_item_schema() {
    let f = FieldDef::array("faqs", "FAQs", vec![FieldDef::string("question", "Question")]);
    assert!(f.is_array());
    assert_eq!(f.item_schema().unwrap().len(), 1);
    assert_eq!(FieldDef::icon("iconKey", "Icon").item_schema(), None);
}

#[test]
fn kind_names_match_wire_format() {
    assert_eq!(FieldDef::rich_text("a", "A").kind.name(), "richText");
    assert_eq!(FieldDef::datetime("a", "A").kind.name(), "datetime");
    assert_eq!(FieldDef::boolean("a", "A").kind.name(), "boolean");
    assert_eq!(FieldDef::object("a", "A", vec![]).kind.name(), "object");
}

// ── Serialization ────────────────────────────────────────────────

#[test]
fn serializes_flat_with_kind_tag() {
    let f = FieldDef::string("title", "Title").required();
    assert_eq!(
        serde_json::to_value(&f).unwrap(),
        json!({"path": "title", "label": "Title", "kind": "string", "required": true})
    );
}

#[test]
fn serializes_camel_case_constraints() {
    let f = FieldDef::new(
        "images",
        "Images",
        FieldKind::Array {
            item_schema: vec![FieldDef::image("src", "Image")],
            min_items: Some(1),
            max_items: None,
        },
    )
    .helper_text("At least one");
    assert_eq!(
        serde_json::to_value(&f).unwrap(),
        json!({
            "path": "images",
            "label": "Images",
            "kind": "array",
            "itemSchema": [{"path": "src", "label": "Image", "kind": "image"}],
            "minItems": 1,
            "helperText": "At least one"
        })
    );
}

#[test]
fn deserializes_manifest_entries() {
    let fields: Vec<FieldDef> = serde_json::from_value(json!([
        {"path": "title", "label": "Title", "kind": "string", "placeholder": "Enter section title"},
        {"path": "body", "label": "Body", "kind": "richText"},
        {"path": "at", "label": "At", "kind": "datetime"},
        {"path": "count", "label": "Count", "kind": "number", "min": 0, "step": 1},
        {"path": "variant", "label": "Variant", "kind": "enum",
         "options": [{"value": "default", "label": "Default"}]},
        {"path": "features", "label": "Features", "kind": "array",
         "itemSchema": [{"path": "title", "label": "Title", "kind": "string", "required": true}]}
    ]))
    .unwrap();

    assert_eq!(fields[0].placeholder.as_deref(), Some("Enter section title"));
    assert_eq!(fields[1].kind, FieldKind::RichText);
    assert_eq!(fields[2].kind, FieldKind::DateTime);
    assert_eq!(
        fields[3].kind,
        FieldKind::Number {
            min: Some(0.0),
            max: None,
            step: Some(1.0)
        }
    );
    assert_eq!(fields[4].kind.name(), "enum");
    assert!(fields[5].item_schema().unwrap()[0].required);
}

#[test]
fn rejects_unknown_kind() {
    let result: Result<FieldDef, _> =
        serde_json::from_value(json!({"path": "x", "label": "X", "kind": "color"}));
    assert!(result.is_err());
}
