use blockforge_model::{BlockDefinition, FieldDef};
use serde_json::json;

use crate::{keep_props, object};

pub const CONTACT_CENTERED: &str = "contact.centered";

pub(crate) fn definition() -> BlockDefinition {
    BlockDefinition::new(CONTACT_CENTERED, "Contact Centered", 1)
        .with_defaults(object(json!({
            "title": "Contact Us",
            "description": "We'd love to hear from you",
            "submitText": "Send Message"
        })))
        .with_ui(vec![
            FieldDef::string("title", "Title").placeholder("Contact Us"),
            FieldDef::text("description", "Description"),
            FieldDef::string("submitText", "Submit Button Text").placeholder("Send Message"),
        ])
        .with_migration(keep_props)
}
