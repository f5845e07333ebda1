//! Error types for path writes and array operations.

use serde_json::Value;
use thiserror::Error;

/// Structural failures of write operations. Reads never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A segment demands a container the target cannot become.
    #[error("cannot apply {expected} segment to {found} at path: {path}")]
    PathType {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// An array operation was invoked on a path that does not resolve to an array.
    #[error("path {path} does not point to an array (found {found})")]
    NotAnArray { path: String, found: &'static str },

    /// A write would extend an array further than [`MAX_INDEX_GAP`](crate::MAX_INDEX_GAP)
    /// slots past its end.
    #[error("index {index} is too far past the end of a {len}-item array at path: {path}")]
    IndexOutOfRange { path: String, index: usize, len: usize },
}

impl PathError {
    pub(crate) fn path_type(path: &str, expected: &'static str, found: &Value) -> Self {
        Self::PathType {
            path: path.to_string(),
            expected,
            found: value_kind(found),
        }
    }

    pub(crate) fn not_an_array(path: &str, found: Option<&Value>) -> Self {
        Self::NotAnArray {
            path: path.to_string(),
            found: found.map_or("nothing", value_kind),
        }
    }
}

/// Result type for path operations.
pub type PathResult<T> = Result<T, PathError>;

/// Short name of a JSON value's type, for error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
