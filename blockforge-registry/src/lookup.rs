use std::collections::HashMap;

use crate::registry::BlockRegistry;

/// Key → value table that never reports a miss to readers.
///
/// [`get`](Self::get) returns the fallback entry for unknown keys, so a
/// renderer asking for an unregistered block type gets a placeholder rather
/// than an error. [`contains`](Self::contains) is there for callers that do
/// need to tell the two apart.
#[derive(Debug, Clone)]
pub struct FallbackTable<V> {
    entries: HashMap<String, V>,
    fallback: V,
}

/// Block type → renderable view, with a placeholder for unknown types.
pub type ComponentLookup<C> = FallbackTable<C>;

impl<V> FallbackTable<V> {
    pub fn new(fallback: V) -> Self {
        Self {
            entries: HashMap::new(),
            fallback,
        }
    }

    /// Builds a table with one entry per registered block type.
    pub fn for_registry(registry: &BlockRegistry, fallback: V, mut view: impl FnMut(&str) -> V) -> Self {
        let mut table = Self::new(fallback);
        for definition in registry.iter() {
            table.insert(&definition.block_type, view(&definition.block_type));
        }
        table
    }

    /// Adds or replaces an entry, returning the previous value.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        self.entries.insert(key.to_string(), value)
    }

    pub fn with(mut self, key: &str, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// The entry for `key`, or the fallback.
    pub fn get(&self, key: &str) -> &V {
        self.entries.get(key).unwrap_or(&self.fallback)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn fallback(&self) -> &V {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl<V, K: AsRef<str>> Extend<(K, V)> for FallbackTable<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key.as_ref(), value);
        }
    }
}
