use blockforge_model::{BlockDefinition, FieldDef};
use serde_json::json;

use crate::{keep_props, object};

pub const FORM_CONTACT_SIMPLE: &str = "form.contact-simple";

pub(crate) fn definition() -> BlockDefinition {
    BlockDefinition::new(FORM_CONTACT_SIMPLE, "Form Contact Simple", 1)
        .with_defaults(object(json!({
            "title": "Get in touch",
            "description": "We would love to hear from you. Please fill out the form below.",
            "submitText": "Send Message",
            "categories": [
                { "_id": "_cat1", "value": "general", "label": "General Inquiry" },
                { "_id": "_cat2", "value": "support", "label": "Support" },
                { "_id": "_cat3", "value": "sales", "label": "Sales" },
                { "_id": "_cat4", "value": "feedback", "label": "Feedback" }
            ]
        })))
        .with_ui(vec![
            FieldDef::string("title", "Title"),
            FieldDef::text("description", "Description"),
            FieldDef::string("submitText", "Submit Button Text").required(),
            FieldDef::array(
                "categories",
                "Categories",
                vec![
                    FieldDef::string("value", "Value").required(),
                    FieldDef::string("label", "Label").required(),
                ],
            ),
        ])
        .with_migration(keep_props)
}
