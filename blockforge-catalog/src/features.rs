use blockforge_model::{BlockDefinition, FieldDef};
use serde_json::json;

use crate::{keep_props, object};

pub const FEATURES_SECTION: &str = "features.section";

pub(crate) fn definition() -> BlockDefinition {
    BlockDefinition::new(FEATURES_SECTION, "Features Section", 1)
        .with_defaults(object(json!({
            "title": "Features",
            "description": "Discover what makes us special",
            "features": [
                {
                    "_id": "_id1",
                    "iconKey": "workflow",
                    "title": "Feature One",
                    "description": "This is the first feature description."
                },
                {
                    "_id": "_id2",
                    "iconKey": "check",
                    "title": "Feature Two",
                    "description": "This is the second feature description."
                },
                {
                    "_id": "_id3",
                    "iconKey": "star",
                    "title": "Feature Three",
                    "description": "This is the third feature description."
                }
            ],
            "variant": "default",
            "density": "comfortable",
            "align": "left",
            "columns": 3
        })))
        .with_ui(vec![
            FieldDef::string("title", "Title").placeholder("Enter section title"),
            FieldDef::text("description", "Description").placeholder("Enter section description"),
            FieldDef::enumeration(
                "variant",
                "Variant",
                &[("default", "Default"), ("secondary", "Secondary"), ("outline", "Outline")],
            )
            .ui_group("Layout"),
            FieldDef::enumeration(
                "density",
                "Density",
                &[("compact", "Compact"), ("comfortable", "Comfortable")],
            )
            .ui_group("Layout"),
            FieldDef::enumeration(
                "align",
                "Alignment",
                &[("left", "Left"), ("center", "Center"), ("right", "Right")],
            )
            .ui_group("Layout"),
            // Stored as a number; the enum matches on its decimal form.
            FieldDef::enumeration(
                "columns",
                "Columns",
                &[("2", "2 Columns"), ("3", "3 Columns"), ("4", "4 Columns")],
            )
            .ui_group("Layout"),
            FieldDef::array(
                "features",
                "Features",
                vec![
                    FieldDef::icon("iconKey", "Icon"),
                    FieldDef::string("title", "Title").required(),
                    FieldDef::text("description", "Description").required(),
                ],
            ),
        ])
        .with_migration(keep_props)
}
