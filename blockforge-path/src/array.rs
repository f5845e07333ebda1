//! Array operations on prop trees.
//!
//! Every object item that passes through [`add_item`] or [`ensure_item_ids`]
//! carries a string `_id` that is unique within its array and never
//! reassigned afterwards. Arrays are never created here; use
//! [`set`](crate::set) for that.

use blockforge_types::{ITEM_ID_FIELD, next_id};
use serde_json::Value;

use crate::error::{PathError, PathResult};
use crate::path::{Path, parse};
use crate::resolve::{get, get_path_mut};

/// Returns the `_id` of an object item, if it carries a non-empty string one.
pub fn item_id(item: &Value) -> Option<&str> {
    item.get(ITEM_ID_FIELD)
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
}

fn array_at<'a>(root: &'a mut Value, array_path: &str) -> PathResult<&'a mut Vec<Value>> {
    match get_path_mut(root, parse(array_path).segments()) {
        Some(Value::Array(arr)) => Ok(arr),
        other => Err(PathError::not_an_array(array_path, other.map(|v| &*v))),
    }
}

/// Appends `item` to the array at `array_path`.
///
/// An object item without a valid `_id`, or with one already used by another
/// item of the same array, gets a fresh id. Returns the id of the appended
/// item, or `None` when the item is not an object.
pub fn add_item(root: &mut Value, array_path: &str, item: Value) -> PathResult<Option<String>> {
    let arr = array_at(root, array_path)?;

    let Value::Object(mut fields) = item else {
        arr.push(item);
        return Ok(None);
    };

    let reusable = fields
        .get(ITEM_ID_FIELD)
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty() && !arr.iter().any(|existing| item_id(existing) == Some(*id)))
        .map(str::to_owned);

    let id = match reusable {
        Some(id) => id,
        None => {
            let id = next_id();
            fields.insert(ITEM_ID_FIELD.to_string(), Value::String(id.clone()));
            id
        }
    };

    arr.push(Value::Object(fields));
    Ok(Some(id))
}

/// Removes the item at `index`, shifting later items left.
///
/// Out-of-range indices are a no-op and return `None`.
pub fn remove_item_by_index(root: &mut Value, array_path: &str, index: usize) -> PathResult<Option<Value>> {
    let arr = array_at(root, array_path)?;
    if index < arr.len() {
        Ok(Some(arr.remove(index)))
    } else {
        Ok(None)
    }
}

/// Removes the first object item whose `_id` equals `id`.
///
/// Removing an id that is not present is a silent no-op, so repeating the
/// call leaves the array unchanged.
pub fn remove_item_by_id(root: &mut Value, array_path: &str, id: &str) -> PathResult<Option<Value>> {
    let arr = array_at(root, array_path)?;
    match arr.iter().position(|item| item_id(item) == Some(id)) {
        Some(index) => Ok(Some(arr.remove(index))),
        None => Ok(None),
    }
}

/// Moves the item at `from` so that it ends up at `to`. Item ids are untouched.
///
/// Returns `false` without changing anything when either index is out of range.
pub fn move_item(root: &mut Value, array_path: &str, from: usize, to: usize) -> PathResult<bool> {
    let arr = array_at(root, array_path)?;
    if from >= arr.len() || to >= arr.len() {
        return Ok(false);
    }
    if from != to {
        let item = arr.remove(from);
        arr.insert(to, item);
    }
    Ok(true)
}

/// Finds the first object item with the given `_id`.
pub fn find_item_by_id<'a>(root: &'a Value, array_path: &str, id: &str) -> Option<&'a Value> {
    get(root, array_path)?
        .as_array()?
        .iter()
        .find(|item| item_id(item) == Some(id))
}

/// Stamps a fresh `_id` onto every object item that lacks a valid one.
///
/// Items that already carry an id keep it. Returns how many items were stamped.
pub fn ensure_item_ids(root: &mut Value, array_path: &str) -> PathResult<usize> {
    let arr = array_at(root, array_path)?;
    let mut stamped = 0;
    for item in arr.iter_mut() {
        if item_id(item).is_some() {
            continue;
        }
        if let Value::Object(fields) = item {
            fields.insert(ITEM_ID_FIELD.to_string(), Value::String(next_id()));
            stamped += 1;
        }
    }
    Ok(stamped)
}

/// Returns the path of the collection that owns an item-level path.
///
/// `"features[2].title"` becomes `"features"`: the field segments up to the
/// first index. A path with no index comes back as its field chain.
pub fn array_path_of(full_path: &str) -> String {
    let prefix: Path = parse(full_path).field_prefix();
    prefix
        .iter()
        .filter_map(|seg| seg.as_field())
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_item_assigns_id() {
        let mut doc = json!({"faqs": []});
        let id = add_item(&mut doc, "faqs", json!({"question": "Why?"})).unwrap().unwrap();
        assert_eq!(doc["faqs"][0]["_id"], json!(id));
        assert_eq!(doc["faqs"][0]["question"], "Why?");
    }

    #[test]
    fn test_add_item_keeps_valid_id() {
        let mut doc = json!({"faqs": []});
        let id = add_item(&mut doc, "faqs", json!({"_id": "keep-me"})).unwrap();
        assert_eq!(id.as_deref(), Some("keep-me"));
    }

    #[test]
    fn test_add_item_requires_array() {
        let mut doc = json!({"faqs": {}});
        let err = add_item(&mut doc, "faqs", json!({})).unwrap_err();
        assert!(matches!(err, PathError::NotAnArray { found: "object", .. }));
        let err = add_item(&mut doc, "missing", json!({})).unwrap_err();
        assert!(matches!(err, PathError::NotAnArray { found: "nothing", .. }));
    }

    #[test]
    fn test_move_item_out_of_range_is_noop() {
        let mut doc = json!({"xs": [1, 2]});
        assert!(!move_item(&mut doc, "xs", 0, 2).unwrap());
        assert_eq!(doc, json!({"xs": [1, 2]}));
    }
}
