use blockforge_model::{BlockDefinition, FieldDef};
use serde_json::json;

use crate::{keep_props, object};

pub const HERO_CAROUSEL: &str = "hero.carousel";

const SLIDE_QUERY: &str = "q=80&w=1920&auto=format&fit=crop&ixlib=rb-4.0.3";

fn slide(id: &str, photo: &str, brand: &str, title: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "imageUrl": format!("https://images.unsplash.com/{photo}?{SLIDE_QUERY}"),
        "brand": brand,
        "title": title,
        "ctaText": "Read Case Studies",
        "ctaHref": "#"
    })
}

pub(crate) fn definition() -> BlockDefinition {
    BlockDefinition::new(HERO_CAROUSEL, "Hero Carousel", 1)
        .with_defaults(object(json!({
            "slides": [
                slide(
                    "_id1",
                    "photo-1615615228002-890bb61cac6e",
                    "Nike React",
                    "Rewriting sport's playbook for billions of athletes"
                ),
                slide(
                    "_id2",
                    "photo-1612287230202-1ff1d85d1bdf",
                    "CoolApps",
                    "From mobile apps to gaming consoles"
                ),
                slide("_id3", "photo-1629666451094-8908989cae90", "Grumpy", "Bringing Art to everything")
            ],
            "autoplay": false,
            "autoplayInterval": 5000,
            "height": "h-120 md:h-[calc(100vh-106px)]"
        })))
        .with_ui(vec![
            FieldDef::boolean("autoplay", "Autoplay").helper_text("Automatically cycle through slides"),
            FieldDef::number("autoplayInterval", "Autoplay Interval (ms)")
                .range(1000.0, 10000.0)
                .step(500.0)
                .helper_text("Time between slide transitions"),
            FieldDef::string("height", "Height")
                .placeholder("h-120 md:h-[calc(100vh-106px)]")
                .helper_text("Tailwind height classes"),
            FieldDef::array(
                "slides",
                "Slides",
                vec![
                    FieldDef::string("imageUrl", "Image URL").required().placeholder("https://..."),
                    FieldDef::string("brand", "Brand").required().placeholder("Brand name"),
                    FieldDef::string("title", "Title").required().placeholder("Slide title"),
                    FieldDef::string("ctaText", "CTA Text").placeholder("Button text"),
                    FieldDef::string("ctaHref", "CTA Link").placeholder("https://..."),
                ],
            ),
        ])
        .with_migration(keep_props)
}
