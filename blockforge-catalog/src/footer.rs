use blockforge_model::{BlockDefinition, FieldDef};
use serde_json::json;

use crate::{keep_props, object};

pub const FOOTER_CENTERED_SOCIALS: &str = "footer.centered-socials";

pub(crate) fn definition() -> BlockDefinition {
    BlockDefinition::new(FOOTER_CENTERED_SOCIALS, "Footer Centered with Socials", 1)
        .with_defaults(object(json!({
            "brandName": "Brand",
            "copyright": "© 2024 Brand. All rights reserved.",
            "links": [
                {"_id": "_id1", "text": "About", "href": "#"},
                {"_id": "_id2", "text": "Services", "href": "#"},
                {"_id": "_id3", "text": "Contact", "href": "#"}
            ],
            "socials": [
                {"_id": "_id1", "platform": "Twitter", "href": "#", "iconKey": "x"},
                {"_id": "_id2", "platform": "GitHub", "href": "#", "iconKey": "home"}
            ]
        })))
        .with_ui(vec![
            FieldDef::string("brandName", "Brand Name").placeholder("Brand"),
            FieldDef::string("copyright", "Copyright").placeholder("© 2024 Brand"),
            FieldDef::array(
                "links",
                "Links",
                vec![
                    FieldDef::string("text", "Text").required(),
                    FieldDef::string("href", "URL").required(),
                ],
            ),
            FieldDef::array(
                "socials",
                "Social Links",
                vec![
                    FieldDef::string("platform", "Platform").required(),
                    FieldDef::string("href", "URL").required(),
                    FieldDef::icon("iconKey", "Icon").required(),
                ],
            ),
        ])
        .with_migration(keep_props)
}
