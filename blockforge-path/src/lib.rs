//! Path addressing for block prop trees.
//!
//! Paths are strings like `"features[2].title"`: dot notation for object
//! fields, bracket notation for array indices. This crate provides:
//!
//! - [`Path`] / [`Seg`]: the parsed form, produced by the total, lenient [`parse`]
//! - [`get`] / [`get_mut`]: reads that report absence as `None`, never an error
//! - [`set`]: in-place writes that auto-create missing intermediate containers
//! - array operations ([`add_item`], [`remove_item_by_index`],
//!   [`remove_item_by_id`], [`move_item`], ...) that keep every object item
//!   tagged with a stable `_id`
//!
//! Not JSONPath or JSON Pointer: no wildcards, filters or
//! escaping.

mod array;
mod error;
mod path;
mod resolve;

pub use array::{
    add_item, array_path_of, ensure_item_ids, find_item_by_id, item_id, move_item,
    remove_item_by_id, remove_item_by_index,
};
pub use error::{PathError, PathResult, value_kind};
pub use path::{Path, Seg, parse};
pub use resolve::{MAX_INDEX_GAP, get, get_mut, get_path, set, set_path};
