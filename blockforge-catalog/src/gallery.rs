use blockforge_model::{BlockDefinition, FieldDef};
use serde_json::json;

use crate::{keep_props, object};

pub const GALLERY_GRID: &str = "gallery.grid";

const UNSPLASH: &str = "https://images.unsplash.com";

pub(crate) fn definition() -> BlockDefinition {
    BlockDefinition::new(GALLERY_GRID, "Gallery Grid", 1)
        .with_defaults(object(json!({
            "title": "Our Gallery",
            "description": "Explore our collection",
            "images": [
                {
                    "_id": "_id1",
                    "src": format!("{UNSPLASH}/photo-1540553016722-983e48a2cd10?auto=format&fit=crop&w=800&h=800&q=80"),
                    "alt": "Gallery image 1",
                    "title": "Mountain View"
                },
                {
                    "_id": "_id2",
                    "src": format!("{UNSPLASH}/photo-1668906093328-99601a1aa584?auto=format&fit=crop&w=800&h=800&q=80"),
                    "alt": "Gallery image 2",
                    "title": "Ocean Waves"
                },
                {
                    "_id": "_id3",
                    "src": format!("{UNSPLASH}/photo-1567016526105-22da7c13161a?auto=format&fit=crop&w=800&h=800&q=80"),
                    "alt": "Gallery image 3",
                    "title": "Forest Path"
                }
            ]
        })))
        .with_ui(vec![
            FieldDef::string("title", "Title").placeholder("Our Gallery"),
            FieldDef::text("description", "Description").placeholder("Explore our collection"),
            FieldDef::array(
                "images",
                "Images",
                vec![
                    FieldDef::string("src", "Image URL").required().placeholder("https://..."),
                    FieldDef::string("alt", "Alt Text")
                        .required()
                        .placeholder("Description of image"),
                    FieldDef::string("title", "Title").placeholder("Optional title"),
                ],
            ),
        ])
        .with_migration(keep_props)
}
