//! Block definition registry and version migration.
//!
//! - [`BlockRegistry`]: immutable type → [`BlockDefinition`] table, built once
//!   from an ordered list and passed explicitly to whoever needs it
//! - [`migrate_block`] / [`classify`]: bring stored instances up to their
//!   definition's version without ever failing
//! - [`FallbackTable`]: the lookup contract for renderers and icons; a miss
//!   degrades to a fallback entry instead of an error
//! - [`RegistryConfig`]: TOML-loaded knobs (duplicate policy, fallbacks)
//!
//! The registry is never mutated after it is built, so a shared reference can
//! be read from any number of threads without locking.
//!
//! [`BlockDefinition`]: blockforge_model::BlockDefinition

mod config;
mod error;
mod icons;
mod lookup;
mod migration;
mod registry;

pub use config::{DuplicatePolicy, RegistryConfig};
pub use error::{RegistryError, RegistryResult};
pub use icons::{IconSet, STANDARD_ICONS};
pub use lookup::{ComponentLookup, FallbackTable};
pub use migration::{MigrationState, classify, migrate_block, migrate_page};
pub use registry::{BlockRegistry, BlockSummary};
