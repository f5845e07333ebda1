use blockforge_model::{BlockDefinition, FieldDef};
use serde_json::json;

use crate::{keep_props, object};

pub const HERO_WITH_IMAGE_REVIEWS: &str = "hero.with-image-reviews";

pub(crate) fn definition() -> BlockDefinition {
    BlockDefinition::new(HERO_WITH_IMAGE_REVIEWS, "Hero with Image & Reviews", 1)
        .with_defaults(object(json!({
            "title": "Start your journey with",
            "brandName": "Preline",
            "highlight": "",
            "description": "Hand-picked professionals and expertly crafted components, designed for any kind of entrepreneur.",
            "imageSrc": "https://images.unsplash.com/photo-1665686377065-08ba896d16fd?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=700&h=800",
            "imageAlt": "Hero Image",
            "showReviews": true,
            "reviews": [
                {
                    "_id": "_id1",
                    "rating": 4.6,
                    "totalReviews": "12k",
                    "platform": "Google",
                    "platformLogo": "google"
                },
                {
                    "_id": "_id2",
                    "rating": 4.8,
                    "totalReviews": "5k",
                    "platform": "Trustpilot",
                    "platformLogo": "trustpilot"
                }
            ],
            "ctaPrimaryText": "Get started",
            "ctaPrimaryHref": "#",
            "ctaSecondaryText": "Contact sales team",
            "ctaSecondaryHref": "#"
        })))
        .with_ui(vec![
            FieldDef::string("title", "Title")
                .required()
                .placeholder("Start your journey with"),
            FieldDef::string("brandName", "Brand Name").placeholder("Your Brand"),
            FieldDef::string("highlight", "Highlighted Text")
                .placeholder("Optional highlighted text instead of brand")
                .helper_text("If provided, will be used instead of brand name"),
            FieldDef::text("description", "Description")
                .required()
                .placeholder("Enter hero description"),
            FieldDef::string("imageSrc", "Image URL").placeholder("https://..."),
            FieldDef::string("imageAlt", "Image Alt Text").placeholder("Hero Image"),
            FieldDef::string("ctaPrimaryText", "Primary CTA Text").placeholder("Get started"),
            FieldDef::string("ctaPrimaryHref", "Primary CTA Link").placeholder("https://..."),
            FieldDef::string("ctaSecondaryText", "Secondary CTA Text").placeholder("Contact sales team"),
            FieldDef::string("ctaSecondaryHref", "Secondary CTA Link").placeholder("https://..."),
            FieldDef::boolean("showReviews", "Show Reviews").helper_text("Display review section"),
            FieldDef::array(
                "reviews",
                "Reviews",
                vec![
                    FieldDef::number("rating", "Rating").required().range(0.0, 5.0).step(0.1),
                    FieldDef::string("totalReviews", "Total Reviews").required().placeholder("12k"),
                    FieldDef::string("platform", "Platform").required().placeholder("Google"),
                    FieldDef::enumeration(
                        "platformLogo",
                        "Platform Logo",
                        &[("", "None"), ("google", "Google"), ("trustpilot", "Trustpilot")],
                    ),
                ],
            ),
        ])
        .with_migration(keep_props)
}
