//! Version migration of stored block instances.
//!
//! Every stored instance maps to exactly one [`MigrationState`]. Only the two
//! stale states produce a new value; everything else (current, ahead of the
//! definition, unknown type) comes back untouched. Migration never fails, so
//! the editor and renderer always have an instance to work with.

use std::borrow::Cow;

use blockforge_model::BlockInstance;
use tracing::{debug, warn};

use crate::registry::BlockRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationState {
    /// No definition is registered for the instance's type.
    UnknownType,
    /// Instance version equals the definition version.
    Current,
    /// Instance claims a newer version than the definition (e.g. after a
    /// code rollback). Treated like `Current`.
    AheadOfDefinition { stored: u32, current: u32 },
    /// Stale, and the definition has a migration function.
    StaleMigratable { from: u32, to: u32 },
    /// Stale, no migration function: only the version is bumped, props are
    /// kept as-is and may not match the current shape.
    StaleUnmigratable { from: u32, to: u32 },
}

impl MigrationState {
    /// Whether migrating would produce a different instance.
    pub fn needs_migration(&self) -> bool {
        matches!(
            self,
            MigrationState::StaleMigratable { .. } | MigrationState::StaleUnmigratable { .. }
        )
    }
}

/// Determines which state `block` is in relative to `registry`.
pub fn classify(registry: &BlockRegistry, block: &BlockInstance) -> MigrationState {
    let Some(definition) = registry.get(&block.block_type) else {
        return MigrationState::UnknownType;
    };
    let (stored, current) = (block.version, definition.version);

    if stored == current {
        MigrationState::Current
    } else if stored > current {
        MigrationState::AheadOfDefinition { stored, current }
    } else if definition.has_migration() {
        MigrationState::StaleMigratable { from: stored, to: current }
    } else {
        MigrationState::StaleUnmigratable { from: stored, to: current }
    }
}

/// Brings `block` up to its definition's current version.
///
/// Stale instances yield a new, owned instance; the input is never mutated.
/// The migration function runs once with the instance's original version,
/// not once per intermediate version. Every other state returns the input
/// borrowed, unchanged.
pub fn migrate_block<'a>(registry: &BlockRegistry, block: &'a BlockInstance) -> Cow<'a, BlockInstance> {
    match classify(registry, block) {
        MigrationState::UnknownType => {
            debug!(block_id = %block.id, block_type = %block.block_type, "Unknown block type, leaving as-is");
            Cow::Borrowed(block)
        }
        MigrationState::Current => Cow::Borrowed(block),
        MigrationState::AheadOfDefinition { stored, current } => {
            warn!(
                block_id = %block.id,
                block_type = %block.block_type,
                stored,
                current,
                "Block version is ahead of its definition, leaving as-is"
            );
            Cow::Borrowed(block)
        }
        MigrationState::StaleMigratable { from, to } => {
            // The clone is the only copy of the props; migrate consumes it.
            let mut migrated = block.clone();
            if let Some(migrate) = registry.get(&block.block_type).and_then(|d| d.migrate.as_ref()) {
                migrated.props = migrate(std::mem::take(&mut migrated.props), from);
            }
            migrated.version = to;
            debug!(block_id = %block.id, block_type = %block.block_type, from, to, "Migrated block");
            Cow::Owned(migrated)
        }
        MigrationState::StaleUnmigratable { from, to } => {
            warn!(
                block_id = %block.id,
                block_type = %block.block_type,
                from,
                to,
                "No migration for stale block, bumping version only"
            );
            let mut bumped = block.clone();
            bumped.version = to;
            Cow::Owned(bumped)
        }
    }
}

/// Migrates every block of a page, preserving order.
pub fn migrate_page(registry: &BlockRegistry, blocks: Vec<BlockInstance>) -> Vec<BlockInstance> {
    blocks
        .into_iter()
        .map(|block| {
            let migrated = match migrate_block(registry, &block) {
                Cow::Owned(migrated) => Some(migrated),
                Cow::Borrowed(_) => None,
            };
            migrated.unwrap_or(block)
        })
        .collect()
}
