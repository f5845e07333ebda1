use blockforge_path::{Path, PathResult, get_path, parse};
use blockforge_types::BlockId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A block's editable property tree. Opaque to everything but the block's
/// own manifest and validator.
pub type Props = Map<String, Value>;

/// One stored piece of page content.
///
/// Serializes as `{id, type, version, props, meta?}`. `meta` is a builder-only
/// annotation channel and must never reach published rendering; use
/// [`BlockInstance::published`] on that path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockInstance {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: String,
    pub version: u32,
    #[serde(default)]
    pub props: Props,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Props>,
}

/// A block instance stripped of builder-only data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: String,
    pub version: u32,
    pub props: Props,
}

impl BlockInstance {
    /// Creates an instance with a fresh id and no meta.
    pub fn new(block_type: impl Into<String>, version: u32, props: Props) -> Self {
        Self {
            id: BlockId::new().to_string(),
            block_type: block_type.into(),
            version,
            props,
            meta: None,
        }
    }

    /// Read a prop by path (e.g. `"features[0].title"`).
    pub fn get_prop(&self, path: &str) -> Option<&Value> {
        let path = parse(path);
        let (first, rest) = path.segments().split_first()?;
        let head = self.props.get(first.as_field()?)?;
        if rest.is_empty() {
            Some(head)
        } else {
            get_path(head, &Path::from_segments(rest.to_vec()))
        }
    }

    /// Write a prop by path, creating intermediate containers as needed.
    pub fn set_prop(&mut self, path: &str, value: Value) -> PathResult<()> {
        self.edit(|root| blockforge_path::set(root, path, value))
    }

    /// Append an item to the array at `array_path`; returns the item's `_id`.
    pub fn add_item(&mut self, array_path: &str, item: Value) -> PathResult<Option<String>> {
        self.edit(|root| blockforge_path::add_item(root, array_path, item))
    }

    pub fn remove_item_by_index(&mut self, array_path: &str, index: usize) -> PathResult<Option<Value>> {
        self.edit(|root| blockforge_path::remove_item_by_index(root, array_path, index))
    }

    pub fn remove_item_by_id(&mut self, array_path: &str, id: &str) -> PathResult<Option<Value>> {
        self.edit(|root| blockforge_path::remove_item_by_id(root, array_path, id))
    }

    pub fn move_item(&mut self, array_path: &str, from: usize, to: usize) -> PathResult<bool> {
        self.edit(|root| blockforge_path::move_item(root, array_path, from, to))
    }

    /// Runs a path operation against the props as an object root.
    ///
    /// Path writes never replace a non-null root, so the props always come back
    /// as an object.
    pub(crate) fn edit<T>(&mut self, op: impl FnOnce(&mut Value) -> T) -> T {
        let mut root = Value::Object(std::mem::take(&mut self.props));
        let out = op(&mut root);
        if let Value::Object(props) = root {
            self.props = props;
        }
        out
    }

    /// Copy of this instance for published rendering, with `meta` dropped.
    pub fn published(&self) -> PublishedBlock {
        PublishedBlock {
            id: self.id.clone(),
            block_type: self.block_type.clone(),
            version: self.version,
            props: self.props.clone(),
        }
    }

    pub fn into_published(self) -> PublishedBlock {
        PublishedBlock {
            id: self.id,
            block_type: self.block_type,
            version: self.version,
            props: self.props,
        }
    }
}
