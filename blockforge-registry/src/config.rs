//! Registry configuration, read from a TOML file such as `blockforge.toml`:
//!
//! ```toml
//! duplicate_policy = "reject"
//! fallback_icon = "HelpCircle"
//! fallback_component = "block-fallback"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{RegistryError, RegistryResult};

/// What to do when two definitions share a block type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    #[default]
    /// The later definition replaces the earlier one, keeping its list position.
    LastWins,
    /// Building the registry fails with `RegistryError::DuplicateType`.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
    /// Icon handle returned for unknown icon keys.
    #[serde(default = "default_fallback_icon")]
    pub fallback_icon: String,
    /// Component name returned for unregistered block types.
    #[serde(default = "default_fallback_component")]
    pub fallback_component: String,
}

fn default_fallback_icon() -> String {
    "HelpCircle".to_string()
}

fn default_fallback_component() -> String {
    "block-fallback".to_string()
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::default(),
            fallback_icon: default_fallback_icon(),
            fallback_component: default_fallback_component(),
        }
    }
}

impl RegistryConfig {
    /// Parses a config document, failing on malformed input.
    pub fn from_toml_str(contents: &str) -> RegistryResult<Self> {
        toml::from_str(contents).map_err(|e| RegistryError::Config {
            path: None,
            message: e.to_string(),
        })
    }

    /// Loads config from `path`. Never fails: a missing file yields the
    /// defaults, an unreadable or malformed one yields the defaults with a warning.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No registry config found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!("Loaded registry config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("Failed to parse registry config {:?}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read registry config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Like [`load_from`](Self::load_from) but surfaces read and parse errors.
    pub fn load_strict(path: &Path) -> RegistryResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| RegistryError::Config {
            path: Some(path.to_path_buf()),
            message: e.to_string(),
        })?;
        toml::from_str(&contents).map_err(|e| RegistryError::Config {
            path: Some(path.to_path_buf()),
            message: e.to_string(),
        })
    }
}
