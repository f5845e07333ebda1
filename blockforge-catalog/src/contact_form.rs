use blockforge_model::{BlockDefinition, FieldDef};
use serde_json::json;

use crate::{keep_props, object};

pub const CONTACT_WITH_FORM: &str = "contact.with-form";

pub(crate) fn definition() -> BlockDefinition {
    BlockDefinition::new(CONTACT_WITH_FORM, "Contact with Form", 1)
        .with_defaults(object(json!({
            "title": "Contact Us",
            "description": "We'd love to hear from you",
            "submitText": "Send Message",
            "contactInfo": [
                { "_id": "_id1", "iconKey": "mail", "title": "Email us", "value": "hello@example.com" },
                { "_id": "_id2", "iconKey": "phone", "title": "Call us", "value": "+1 (555) 000-0000" },
                {
                    "_id": "_id3",
                    "iconKey": "map-pin",
                    "title": "Visit us",
                    "value": "123 Main St, City, State 12345"
                }
            ]
        })))
        .with_ui(vec![
            FieldDef::string("title", "Title"),
            FieldDef::text("description", "Description"),
            FieldDef::string("submitText", "Submit Text"),
            FieldDef::array(
                "contactInfo",
                "Contact Info",
                vec![
                    FieldDef::icon("iconKey", "Icon").required(),
                    FieldDef::string("title", "Title").required(),
                    FieldDef::string("value", "Value").required(),
                ],
            ),
        ])
        .with_migration(keep_props)
}
