use blockforge_model::{BlockDefinition, FieldDef};
use serde_json::json;

use crate::{keep_props, object};

pub const TESTIMONIALS_CAROUSEL: &str = "testimonials.carousel";

const AVATAR_QUERY: &str = "ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=facearea&facepad=2&w=300&h=300&q=80";

fn avatar(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}?{AVATAR_QUERY}")
}

pub(crate) fn definition() -> BlockDefinition {
    BlockDefinition::new(TESTIMONIALS_CAROUSEL, "Testimonials Carousel", 1)
        .with_defaults(object(json!({
            "title": "What our customers are saying",
            "description": "Hear from our satisfied customers about their experience",
            "testimonials": [
                {
                    "_id": "_id1",
                    "quote": "Amazing service! The team was professional, responsive, and delivered exactly what we needed. Highly recommend to anyone looking for quality work.",
                    "author": "Josh Grazioso",
                    "title": "Director",
                    "company": "Webify",
                    "avatarUrl": avatar("photo-1568602471122-7832951cc4c5"),
                    "avatarFallback": "JG",
                    "rating": 5
                },
                {
                    "_id": "_id2",
                    "quote": "The attention to detail and customer service is outstanding. They took the time to understand our needs and delivered a solution that exceeded expectations.",
                    "author": "Nicole Grazioso",
                    "title": "Manager",
                    "company": "Tech Solutions",
                    "avatarUrl": avatar("photo-1438761681033-6461ffad8d80"),
                    "avatarFallback": "NG",
                    "rating": 4.5
                },
                {
                    "_id": "_id3",
                    "quote": "Working with this team has been a game-changer for our business. Their expertise and dedication are unmatched.",
                    "author": "Aaron Larsson",
                    "title": "CEO",
                    "company": "StartupCo",
                    "avatarUrl": avatar("photo-1472099645785-5658abf4ff4e"),
                    "avatarFallback": "AL",
                    "rating": 5
                }
            ]
        })))
        .with_ui(vec![
            FieldDef::string("title", "Title").placeholder("What our customers are saying"),
            FieldDef::text("description", "Description").placeholder("Subtitle or description"),
            FieldDef::array(
                "testimonials",
                "Testimonials",
                vec![
                    FieldDef::text("quote", "Quote")
                        .required()
                        .placeholder("Enter testimonial quote"),
                    FieldDef::string("author", "Author Name").required().placeholder("John Doe"),
                    FieldDef::string("title", "Job Title").required().placeholder("CEO"),
                    FieldDef::string("company", "Company").placeholder("Company Name"),
                    FieldDef::string("avatarUrl", "Avatar URL").required().placeholder("https://..."),
                    FieldDef::string("avatarFallback", "Avatar Fallback")
                        .required()
                        .placeholder("JD")
                        .helper_text("Initials shown if image fails to load"),
                    FieldDef::number("rating", "Rating")
                        .range(0.0, 5.0)
                        .step(0.5)
                        .placeholder("5"),
                ],
            ),
        ])
        .with_migration(keep_props)
}
