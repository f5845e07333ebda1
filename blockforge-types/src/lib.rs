//! Core type definitions for blockforge.
//!
//! This crate defines the identifiers shared by every other crate:
//! - [`BlockId`]: globally unique block instance identifier (UUID v7)
//! - [`ItemId`]: stable identity token carried by array items as `_id`
//!
//! Block-specific shapes (props, definitions, manifests) live in
//! `blockforge-model`, not here.

mod ids;

pub use ids::{BlockId, ItemId, ITEM_ID_FIELD, ITEM_ID_PREFIX, next_id};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid item id: {0:?}")]
    InvalidItemId(String),
}
