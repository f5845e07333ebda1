//! Reading and writing values by path.
//!
//! Reads report absence as `None`. Writes auto-create missing containers and
//! replace values of the wrong shape (replace-on-type-conflict); only a root
//! that is already a container of the wrong kind is rejected.

use serde_json::{Map, Value};

use crate::error::{PathError, PathResult};
use crate::path::{Path, Seg, parse};

/// How many slots past the current end a single write may extend an array.
///
/// `tags[3]` on a one-item array pads two slots and is fine; an index far
/// beyond the end fails with [`PathError::IndexOutOfRange`] instead of
/// allocating the gap.
pub const MAX_INDEX_GAP: usize = 1024;

/// Get a reference to the value at `path`.
///
/// Returns `None` for an empty path, for a missing field or index, and as soon
/// as a segment meets a value of the wrong shape (a field segment against a
/// non-object, an index segment against a non-array, anything below a
/// primitive or `null`).
pub fn get<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    get_path(root, &parse(path))
}

/// [`get`] over an already parsed path.
pub fn get_path<'a>(root: &'a Value, path: &Path) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }
    let mut current = root;
    for seg in path {
        current = match (seg, current) {
            (Seg::Field(name), Value::Object(map)) => map.get(name)?,
            (Seg::Index(i), Value::Array(arr)) => arr.get(*i)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Get a mutable reference to the value at `path`. Same rules as [`get`].
pub fn get_mut<'a>(root: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    get_path_mut(root, parse(path).segments())
}

pub(crate) fn get_path_mut<'a>(current: &'a mut Value, segments: &[Seg]) -> Option<&'a mut Value> {
    if segments.is_empty() {
        return None;
    }
    let mut current = current;
    for seg in segments {
        current = match (seg, current) {
            (Seg::Field(name), Value::Object(map)) => map.get_mut(name)?,
            (Seg::Index(i), Value::Array(arr)) => arr.get_mut(*i)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Set the value at `path`, mutating `root` in place.
///
/// Missing intermediates are created with the shape the next segment asks
/// for: an array before an index segment, an object before a field segment.
/// An intermediate holding a primitive, `null`, or the other container kind
/// is replaced. Indexing past the end of an array fills the gap: with `{}`
/// placeholders on the way down, with `null` for the final assignment. The
/// gap is limited to [`MAX_INDEX_GAP`] slots.
///
/// An empty path is a no-op. A `null` root is turned into the container the
/// first segment needs; any other root that cannot take the first segment
/// fails with [`PathError::PathType`].
pub fn set(root: &mut Value, path: &str, value: Value) -> PathResult<()> {
    set_path(root, &parse(path), value)
}

/// [`set`] over an already parsed path.
pub fn set_path(root: &mut Value, path: &Path, value: Value) -> PathResult<()> {
    let segments = path.segments();
    let Some(first) = segments.first() else {
        return Ok(());
    };
    check_gaps(root, segments, path)?;
    if root.is_null() {
        *root = empty_container_for(first);
    }
    set_in(root, segments, value, path)
}

fn set_in(current: &mut Value, segments: &[Seg], value: Value, full: &Path) -> PathResult<()> {
    match segments {
        [] => {
            *current = value;
            Ok(())
        }
        [last] => assign(current, last, value, full),
        [seg, rest @ ..] => {
            let child = descend(current, seg, &rest[0], full)?;
            set_in(child, rest, value, full)
        }
    }
}

/// Steps through `seg`, making sure the child has the shape `next` needs.
fn descend<'a>(current: &'a mut Value, seg: &Seg, next: &Seg, full: &Path) -> PathResult<&'a mut Value> {
    match (seg, current) {
        (Seg::Field(name), Value::Object(map)) => {
            let slot = map.entry(name.clone()).or_insert(Value::Null);
            ensure_container(slot, next);
            Ok(slot)
        }
        (Seg::Index(i), Value::Array(arr)) => {
            let i = *i;
            if i >= arr.len() {
                arr.resize(i, Value::Object(Map::new()));
                arr.push(empty_container_for(next));
            } else {
                ensure_container(&mut arr[i], next);
            }
            Ok(&mut arr[i])
        }
        (Seg::Field(_), other) => Err(PathError::path_type(&full.to_string(), "field", other)),
        (Seg::Index(_), other) => Err(PathError::path_type(&full.to_string(), "index", other)),
    }
}

fn assign(current: &mut Value, seg: &Seg, value: Value, full: &Path) -> PathResult<()> {
    match (seg, current) {
        (Seg::Field(name), Value::Object(map)) => {
            map.insert(name.clone(), value);
            Ok(())
        }
        (Seg::Index(i), Value::Array(arr)) => {
            let i = *i;
            if i >= arr.len() {
                arr.resize(i + 1, Value::Null);
            }
            arr[i] = value;
            Ok(())
        }
        (Seg::Field(_), other) => Err(PathError::path_type(&full.to_string(), "field", other)),
        (Seg::Index(_), other) => Err(PathError::path_type(&full.to_string(), "index", other)),
    }
}

/// Walks the existing document along `segments` and rejects any index that
/// would pad its array by more than [`MAX_INDEX_GAP`] slots. Runs before the
/// write so a rejected path leaves `root` untouched. Arrays the write would
/// create or replace count as empty.
fn check_gaps(root: &Value, segments: &[Seg], full: &Path) -> PathResult<()> {
    let mut current = Some(root);
    for seg in segments {
        current = match seg {
            Seg::Field(name) => current.and_then(|v| v.get(name.as_str())),
            Seg::Index(i) => {
                let arr = current.and_then(Value::as_array).map_or(&[][..], Vec::as_slice);
                if i.saturating_sub(arr.len()) > MAX_INDEX_GAP {
                    return Err(PathError::IndexOutOfRange {
                        path: full.to_string(),
                        index: *i,
                        len: arr.len(),
                    });
                }
                arr.get(*i)
            }
        };
    }
    Ok(())
}

fn ensure_container(slot: &mut Value, next: &Seg) {
    let fits = matches!(
        (next, &*slot),
        (Seg::Field(_), Value::Object(_)) | (Seg::Index(_), Value::Array(_))
    );
    if !fits {
        *slot = empty_container_for(next);
    }
}

fn empty_container_for(seg: &Seg) -> Value {
    match seg {
        Seg::Field(_) => Value::Object(Map::new()),
        Seg::Index(_) => Value::Array(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_creates_intermediate_objects() {
        let mut doc = json!({});
        set(&mut doc, "cta.label", json!("Go")).unwrap();
        assert_eq!(doc, json!({"cta": {"label": "Go"}}));
    }

    #[test]
    fn test_set_creates_array_before_index() {
        let mut doc = json!({});
        set(&mut doc, "items[1].label", json!("x")).unwrap();
        assert_eq!(doc, json!({"items": [{}, {"label": "x"}]}));
    }

    #[test]
    fn test_terminal_index_pads_with_null() {
        let mut doc = json!({"tags": ["a"]});
        set(&mut doc, "tags[3]", json!("d")).unwrap();
        assert_eq!(doc, json!({"tags": ["a", null, null, "d"]}));
    }

    #[test]
    fn test_get_empty_path_is_none() {
        assert_eq!(get(&json!({"a": 1}), ""), None);
    }

    #[test]
    fn test_set_empty_path_is_noop() {
        let mut doc = json!({"a": 1});
        set(&mut doc, "...", json!(2)).unwrap();
        assert_eq!(doc, json!({"a": 1}));
    }

    #[test]
    fn test_null_root_is_vivified() {
        let mut doc = Value::Null;
        set(&mut doc, "[0]", json!(true)).unwrap();
        assert_eq!(doc, json!([true]));
    }
}
