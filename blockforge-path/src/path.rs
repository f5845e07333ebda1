//! Parsed path representation.
//!
//! A path is a sequence of segments: each segment is either an object field
//! name or an array index. The string grammar is a chain of `name`, `.name`
//! and `[index]` tokens; see [`parse`] for the exact (lenient) rules.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A single segment in a path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seg {
    /// Object field access: `.name` or a non-numeric `[name]`.
    Field(String),
    /// Array index access: `[index]`.
    Index(usize),
}

impl Seg {
    /// Create a field segment.
    #[inline]
    pub fn field(name: impl Into<String>) -> Self {
        Seg::Field(name.into())
    }

    /// Create an index segment.
    #[inline]
    pub fn index(i: usize) -> Self {
        Seg::Index(i)
    }

    #[inline]
    pub fn is_field(&self) -> bool {
        matches!(self, Seg::Field(_))
    }

    #[inline]
    pub fn is_index(&self) -> bool {
        matches!(self, Seg::Index(_))
    }

    /// Get the field name if this is a field segment.
    #[inline]
    pub fn as_field(&self) -> Option<&str> {
        match self {
            Seg::Field(name) => Some(name),
            Seg::Index(_) => None,
        }
    }

    /// Get the index if this is an index segment.
    #[inline]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Seg::Field(_) => None,
            Seg::Index(i) => Some(*i),
        }
    }
}

impl fmt::Display for Seg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seg::Field(name) if needs_brackets(name) => write!(f, "[{name}]"),
            Seg::Field(name) => write!(f, ".{name}"),
            Seg::Index(i) => write!(f, "[{i}]"),
        }
    }
}

/// Field names holding a `.` only survive re-parsing in bracket form. `[` and
/// `]` never appear in parsed names.
fn needs_brackets(name: &str) -> bool {
    name.contains('.')
}

impl From<&str> for Seg {
    fn from(s: &str) -> Self {
        Seg::Field(s.to_owned())
    }
}

impl From<String> for Seg {
    fn from(s: String) -> Self {
        Seg::Field(s)
    }
}

impl From<usize> for Seg {
    fn from(i: usize) -> Self {
        Seg::Index(i)
    }
}

/// A parsed path into a prop tree.
///
/// ```
/// use blockforge_path::{Path, Seg};
///
/// let path = Path::parse("features[2].title");
/// assert_eq!(
///     path.segments(),
///     &[Seg::field("features"), Seg::index(2), Seg::field("title")]
/// );
/// assert_eq!(path.to_string(), "features[2].title");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path(Vec<Seg>);

impl Path {
    /// Create an empty path.
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parse a path string. Never fails; see [`parse`].
    pub fn parse(input: &str) -> Self {
        parse(input)
    }

    #[inline]
    pub fn from_segments(segments: Vec<Seg>) -> Self {
        Self(segments)
    }

    /// Append a field segment and return self.
    #[inline]
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.0.push(Seg::Field(name.into()));
        self
    }

    /// Append an index segment and return self.
    #[inline]
    pub fn index(mut self, i: usize) -> Self {
        self.0.push(Seg::Index(i));
        self
    }

    #[inline]
    pub fn push(&mut self, seg: Seg) {
        self.0.push(seg);
    }

    #[inline]
    pub fn segments(&self) -> &[Seg] {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn last(&self) -> Option<&Seg> {
        self.0.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Seg> {
        self.0.iter()
    }

    /// The leading run of field segments, stopping before the first index.
    pub fn field_prefix(&self) -> Path {
        Path(self.0.iter().take_while(|seg| seg.is_field()).cloned().collect())
    }

    /// Position of the first index segment, if any.
    pub fn first_index_position(&self) -> Option<usize> {
        self.0.iter().position(Seg::is_index)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.0.iter().enumerate() {
            match seg {
                Seg::Field(name) if i == 0 && !needs_brackets(name) => f.write_str(name)?,
                other => write!(f, "{other}")?,
            }
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse(s))
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        parse(s)
    }
}

impl From<Vec<Seg>> for Path {
    fn from(segments: Vec<Seg>) -> Self {
        Self(segments)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Seg;
    type IntoIter = std::slice::Iter<'a, Seg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Parses a path string into segments.
///
/// The parser is total and deterministic:
/// - `.` separates field names; leading, trailing and repeated dots are skipped.
/// - `[...]` closes the pending field name and yields one segment. Content that
///   is a plain non-negative decimal integer becomes [`Seg::Index`]; any other
///   non-empty content becomes a [`Seg::Field`] holding the raw text verbatim.
///   Empty brackets (`features[]`) yield nothing.
/// - A `[` inside brackets restarts the bracket content; a `]` outside brackets
///   is ignored; an unterminated bracket is dropped.
pub fn parse(input: &str) -> Path {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut bracket = String::new();
    let mut in_brackets = false;

    for ch in input.chars() {
        match ch {
            '[' => {
                if !current.is_empty() {
                    segments.push(Seg::Field(std::mem::take(&mut current)));
                }
                in_brackets = true;
                bracket.clear();
            }
            ']' => {
                if in_brackets && !bracket.is_empty() {
                    segments.push(bracket_segment(std::mem::take(&mut bracket)));
                }
                in_brackets = false;
                bracket.clear();
            }
            _ if in_brackets => bracket.push(ch),
            '.' => {
                if !current.is_empty() {
                    segments.push(Seg::Field(std::mem::take(&mut current)));
                }
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        segments.push(Seg::Field(current));
    }

    Path(segments)
}

fn bracket_segment(content: String) -> Seg {
    if content.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(i) = content.parse::<usize>() {
            return Seg::Index(i);
        }
    }
    Seg::Field(content)
}
