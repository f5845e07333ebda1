use blockforge_model::{BlockDefinition, FieldDef};
use serde_json::json;

use crate::{keep_props, object};

pub const TESTIMONIALS_QUOTE_STYLE: &str = "testimonials.quote-style";

pub(crate) fn definition() -> BlockDefinition {
    BlockDefinition::new(TESTIMONIALS_QUOTE_STYLE, "Testimonials Quote Style", 1)
        .with_defaults(object(json!({
            "testimonials": [
                {
                    "_id": "_id1",
                    "quote": "You do a really good job. It is great how easy the site is to update and manage.",
                    "author": "Aaron Larsson",
                    "title": "Founder",
                    "company": "Stride"
                },
                {
                    "_id": "_id2",
                    "quote": "The team helped us reach our goals faster than we thought possible.",
                    "author": "Nicole Grazioso",
                    "title": "Head of Design",
                    "company": "Mailchimp"
                },
                {
                    "_id": "_id3",
                    "quote": "Working with this team has transformed the way we operate.",
                    "author": "Josh Grazioso",
                    "title": "CTO",
                    "company": "Tech Corp"
                },
                {
                    "_id": "_id4",
                    "quote": "Outstanding service from start to finish.",
                    "author": "Sarah Johnson",
                    "title": "Marketing Director",
                    "company": "StartupHub"
                }
            ]
        })))
        .with_ui(vec![FieldDef::array(
            "testimonials",
            "Testimonials",
            vec![
                FieldDef::text("quote", "Quote")
                    .required()
                    .placeholder("Enter testimonial quote"),
                FieldDef::string("author", "Author Name").required().placeholder("John Doe"),
                FieldDef::string("title", "Job Title").required().placeholder("CEO"),
                FieldDef::string("company", "Company").placeholder("Company Name"),
            ],
        )])
        .with_migration(keep_props)
}
