use blockforge_model::{BlockDefinition, FieldDef};
use serde_json::json;

use crate::{keep_props, object};

pub const FORM_NEWSLETTER_SIGNUP: &str = "form.newsletter-signup";

pub(crate) fn definition() -> BlockDefinition {
    BlockDefinition::new(FORM_NEWSLETTER_SIGNUP, "Form Newsletter Sign Up", 1)
        .with_defaults(object(json!({
            "title": "Subscribe to our newsletter",
            "description": "Stay up to date with the latest news and updates.",
            "placeholder": "Enter your email",
            "buttonText": "Subscribe"
        })))
        .with_ui(vec![
            FieldDef::string("title", "Title"),
            FieldDef::text("description", "Description"),
            FieldDef::string("placeholder", "Input Placeholder").required(),
            FieldDef::string("buttonText", "Button Text").required(),
        ])
        .with_migration(keep_props)
}
