//! Identifier types used throughout blockforge.
//!
//! Block ids are UUID v7. Array item ids are opaque strings: freshly generated
//! ones embed a UUID v7, but stored documents may carry any non-empty string
//! (the built-in defaults use `_id1`, `_id2`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::Error;

/// Name of the identity field carried by object items inside arrays.
pub const ITEM_ID_FIELD: &str = "_id";

/// Prefix of generated item ids.
pub const ITEM_ID_PREFIX: &str = "_id";

/// Identifier of a block instance on a page.
///
/// Instances store it in string form (`BlockInstance::id`), so it is only
/// generated here and parsed back when a caller needs to check one.
/// UUID v7 keeps ids of blocks created in sequence sortable by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(Uuid);

impl BlockId {
    /// Creates a new block ID with the current timestamp.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Parses a stored block id.
    pub fn parse(s: &str) -> crate::Result<Self> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BlockId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Stable identity token of an array item.
///
/// Assigned once when the item is created and never reassigned, so the item
/// keeps its identity across reorders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Generates a fresh token: `_id` followed by a UUID v7 in simple hex form.
    ///
    /// UUID v7 combines a millisecond timestamp with random bits and a
    /// per-process counter, so rapid successive calls within the same
    /// millisecond still produce distinct, increasing tokens. Not suitable
    /// as a security token.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("{ITEM_ID_PREFIX}{}", Uuid::now_v7().simple()))
    }

    /// Wraps an existing token. Empty strings are rejected.
    pub fn parse(s: &str) -> crate::Result<Self> {
        if s.is_empty() {
            return Err(Error::InvalidItemId(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id, returning the token string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Produces a fresh item id token as a plain string.
#[must_use]
pub fn next_id() -> String {
    ItemId::generate().into_string()
}
