//! Icon lookup for `icon` fields.
//!
//! Blocks store icon keys (`"arrow-right"`); renderers need an icon handle
//! (`"ArrowRight"`). Unknown keys resolve to the fallback handle so rendering
//! never breaks on a stale or mistyped key.

use crate::config::RegistryConfig;
use crate::lookup::FallbackTable;

/// The standard icon keys and their handles.
pub const STANDARD_ICONS: &[(&str, &str)] = &[
    ("workflow", "Workflow"),
    ("check", "Check"),
    ("arrow-right", "ArrowRight"),
    ("arrow-left", "ArrowLeft"),
    ("star", "Star"),
    ("heart", "Heart"),
    ("settings", "Settings"),
    ("user", "User"),
    ("mail", "Mail"),
    ("phone", "Phone"),
    ("map-pin", "MapPin"),
    ("calendar", "Calendar"),
    ("clock", "Clock"),
    ("file-text", "FileText"),
    ("image", "Image"),
    ("link", "Link"),
    ("download", "Download"),
    ("upload", "Upload"),
    ("search", "Search"),
    ("menu", "Menu"),
    ("x", "X"),
    ("plus", "Plus"),
    ("minus", "Minus"),
    ("edit", "Pencil"),
    ("trash-2", "Trash2"),
    ("save", "Save"),
    ("copy", "Copy"),
    ("share-2", "Share2"),
    ("bell", "Bell"),
    ("home", "Home"),
    ("info", "Info"),
    ("alert-circle", "AlertCircle"),
];

#[derive(Debug, Clone)]
pub struct IconSet {
    table: FallbackTable<String>,
}

impl IconSet {
    /// The standard icons with `fallback` as the handle for unknown keys.
    pub fn standard(fallback: &str) -> Self {
        let mut table = FallbackTable::new(fallback.to_string());
        table.extend(STANDARD_ICONS.iter().map(|(key, handle)| (*key, handle.to_string())));
        Self { table }
    }

    /// The standard icons with the configured fallback handle.
    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::standard(&config.fallback_icon)
    }

    /// Handle for `key`, or the fallback handle.
    pub fn resolve(&self, key: &str) -> &str {
        self.table.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.table.contains(key)
    }

    /// Known icon keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        self.table.keys()
    }

    pub fn fallback(&self) -> &str {
        self.table.fallback()
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::from_config(&RegistryConfig::default())
    }
}
