use blockforge_model::{BlockDefinition, FieldDef};
use serde_json::json;

use crate::{keep_props, object};

pub const GALLERY_MASONRY: &str = "gallery.masonry";

pub(crate) fn definition() -> BlockDefinition {
    BlockDefinition::new(GALLERY_MASONRY, "Gallery Masonry", 1)
        .with_defaults(object(json!({
            "title": "Masonry Gallery",
            "description": "Explore our collection",
            "images": [
                {
                    "_id": "_id1",
                    "src": "https://images.unsplash.com/photo-1540553016722-983e48a2cd10?w=600",
                    "alt": "Image 1",
                    "title": "Mountain"
                },
                {
                    "_id": "_id2",
                    "src": "https://images.unsplash.com/photo-1668906093328-99601a1aa584?w=600",
                    "alt": "Image 2",
                    "title": "Ocean"
                },
                {
                    "_id": "_id3",
                    "src": "https://images.unsplash.com/photo-1567016526105-22da7c13161a?w=600",
                    "alt": "Image 3",
                    "title": "Forest"
                }
            ]
        })))
        .with_ui(vec![
            FieldDef::string("title", "Title"),
            FieldDef::text("description", "Description"),
            FieldDef::array(
                "images",
                "Images",
                vec![
                    FieldDef::string("src", "Image URL").required(),
                    FieldDef::string("alt", "Alt Text").required(),
                    FieldDef::string("title", "Title"),
                ],
            ),
        ])
        .with_migration(keep_props)
}
