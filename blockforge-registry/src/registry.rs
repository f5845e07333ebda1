use std::borrow::Cow;
use std::collections::HashMap;

use blockforge_model::{BlockDefinition, BlockInstance};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{DuplicatePolicy, RegistryConfig};
use crate::error::{RegistryError, RegistryResult};
use crate::migration::{self, MigrationState};

/// Menu entry for a registered block type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSummary {
    #[serde(rename = "type")]
    pub block_type: String,
    pub display_name: String,
}

/// Immutable lookup table from block type to definition.
///
/// Built once from an explicit, ordered list of definitions. Lookups are
/// O(1); [`list`](Self::list) and [`iter`](Self::iter) follow registration order.
#[derive(Debug, Clone, Default)]
pub struct BlockRegistry {
    definitions: HashMap<String, BlockDefinition>,
    order: Vec<String>,
}

impl BlockRegistry {
    /// Builds a registry where a later duplicate replaces an earlier one.
    pub fn build(definitions: impl IntoIterator<Item = BlockDefinition>) -> Self {
        let mut registry = Self::default();
        for definition in definitions {
            registry.insert(definition);
        }
        registry
    }

    /// Builds a registry, applying `policy` to duplicate types.
    pub fn build_with(
        definitions: impl IntoIterator<Item = BlockDefinition>,
        policy: DuplicatePolicy,
    ) -> RegistryResult<Self> {
        let mut registry = Self::default();
        for definition in definitions {
            if policy == DuplicatePolicy::Reject && registry.contains(&definition.block_type) {
                return Err(RegistryError::DuplicateType(definition.block_type));
            }
            registry.insert(definition);
        }
        Ok(registry)
    }

    /// Builds a registry with the duplicate policy from `config`.
    pub fn from_config(
        definitions: impl IntoIterator<Item = BlockDefinition>,
        config: &RegistryConfig,
    ) -> RegistryResult<Self> {
        Self::build_with(definitions, config.duplicate_policy)
    }

    fn insert(&mut self, definition: BlockDefinition) {
        let block_type = definition.block_type.clone();
        debug!(block_type = %block_type, version = definition.version, "Registering block definition");
        if self.definitions.insert(block_type.clone(), definition).is_some() {
            warn!(block_type = %block_type, "Duplicate block type, later definition wins");
        } else {
            self.order.push(block_type);
        }
    }

    pub fn get(&self, block_type: &str) -> Option<&BlockDefinition> {
        self.definitions.get(block_type)
    }

    pub fn contains(&self, block_type: &str) -> bool {
        self.definitions.contains_key(block_type)
    }

    pub fn display_name(&self, block_type: &str) -> Option<&str> {
        self.get(block_type).map(|d| d.display_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &BlockDefinition> {
        self.order.iter().filter_map(|t| self.definitions.get(t))
    }

    /// `{type, displayName}` pairs in registration order, for menus.
    pub fn list(&self) -> Vec<BlockSummary> {
        self.iter()
            .map(|d| BlockSummary {
                block_type: d.block_type.clone(),
                display_name: d.display_name.clone(),
            })
            .collect()
    }

    /// Creates a fresh instance of a registered type.
    pub fn instantiate(&self, block_type: &str) -> Option<BlockInstance> {
        self.get(block_type).map(BlockDefinition::instantiate)
    }

    /// See [`migration::classify`].
    pub fn classify(&self, block: &BlockInstance) -> MigrationState {
        migration::classify(self, block)
    }

    /// See [`migration::migrate_block`].
    pub fn migrate<'a>(&self, block: &'a BlockInstance) -> Cow<'a, BlockInstance> {
        migration::migrate_block(self, block)
    }
}
