//! Page document commands behind the `blockforge` binary.
//!
//! A page document is `{"blocks": [...]}`. Commands here are pure over a
//! [`BlockRegistry`] and an in-memory [`Page`]; only [`load_page`] and
//! [`save_page`] touch the filesystem.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use blockforge_model::{BlockInstance, PublishedBlock};
use blockforge_registry::{BlockRegistry, migrate_page};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub blocks: Vec<BlockInstance>,
}

/// A page as handed to published rendering: no builder-only `meta`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishedPage {
    pub blocks: Vec<PublishedBlock>,
}

impl Page {
    pub fn block(&self, block_id: &str) -> Option<&BlockInstance> {
        self.blocks.iter().find(|b| b.id == block_id)
    }

    pub fn block_mut(&mut self, block_id: &str) -> Option<&mut BlockInstance> {
        self.blocks.iter_mut().find(|b| b.id == block_id)
    }

    pub fn into_published(self) -> PublishedPage {
        PublishedPage {
            blocks: self.blocks.into_iter().map(BlockInstance::into_published).collect(),
        }
    }
}

pub fn load_page(path: &Path) -> Result<Page> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read page {}", path.display()))?;
    let page: Page = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse page {}", path.display()))?;
    debug!("Loaded {} block(s) from {}", page.blocks.len(), path.display());
    Ok(page)
}

pub fn save_page(path: &Path, page: &Page) -> Result<()> {
    let json = serde_json::to_string_pretty(page)?;
    fs::write(path, json + "\n").with_context(|| format!("failed to write page {}", path.display()))?;
    info!("Wrote {} block(s) to {}", page.blocks.len(), path.display());
    Ok(())
}

/// One line per registered type: `type<TAB>display name<TAB>vN`.
pub fn list_rows(registry: &BlockRegistry) -> Vec<String> {
    registry
        .iter()
        .map(|d| format!("{}\t{}\tv{}", d.block_type, d.display_name, d.version))
        .collect()
}

/// A fresh instance of `block_type` seeded from its defaults.
pub fn new_block(registry: &BlockRegistry, block_type: &str) -> Result<BlockInstance> {
    registry
        .instantiate(block_type)
        .ok_or_else(|| anyhow!("unknown block type: {block_type}"))
}

/// Brings every block up to its definition's version.
pub fn migrate_document(registry: &BlockRegistry, page: Page) -> Page {
    let stale = page
        .blocks
        .iter()
        .filter(|b| registry.classify(b).needs_migration())
        .count();
    if stale > 0 {
        info!("Migrating {stale} stale block(s)");
    }
    Page {
        blocks: migrate_page(registry, page.blocks),
    }
}

/// The value at `path` inside the props of block `block_id`.
pub fn get_value<'a>(page: &'a Page, block_id: &str, path: &str) -> Result<&'a Value> {
    let block = page
        .block(block_id)
        .ok_or_else(|| anyhow!("no block with id {block_id}"))?;
    block
        .get_prop(path)
        .ok_or_else(|| anyhow!("no value at {path} in block {block_id}"))
}

/// Writes `raw` at `path` in block `block_id`. The edit is kept even if the
/// block no longer validates; the issues are logged.
pub fn set_value(
    registry: &BlockRegistry,
    page: &mut Page,
    block_id: &str,
    path: &str,
    raw: &str,
) -> Result<()> {
    let block = page
        .block_mut(block_id)
        .ok_or_else(|| anyhow!("no block with id {block_id}"))?;
    if path.is_empty() {
        bail!("empty path");
    }
    block
        .set_prop(path, parse_value(raw))
        .with_context(|| format!("cannot set {path} in block {block_id}"))?;

    match registry.get(&block.block_type) {
        Some(definition) => {
            if let Err(err) = definition.validate(&block.props) {
                warn!("Block {} no longer validates: {}", block_id, err);
            }
        }
        None => debug!("Block {} has unknown type {}", block_id, block.block_type),
    }
    Ok(())
}

/// JSON if it parses, otherwise the raw text as a string.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
