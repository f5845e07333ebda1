use blockforge_model::{BlockDefinition, FieldDef};
use serde_json::json;

use crate::{keep_props, object};

pub const FORM_SINGLE_COLUMN: &str = "form.single-column";

pub(crate) fn definition() -> BlockDefinition {
    BlockDefinition::new(FORM_SINGLE_COLUMN, "Form Single Column", 1)
        .with_defaults(object(json!({ "title": "Contact Form" })))
        .with_ui(vec![FieldDef::string("title", "Title").placeholder("Contact Form")])
        .with_migration(keep_props)
}
