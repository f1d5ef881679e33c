use std::fmt;

use super::Key;

/// A vertex record: key plus payload.
///
/// Graphs hand vertices out by value, so holding one never aliases the
/// graph's own tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<V> {
    key: Key,
    value: V,
}

impl<V> Vertex<V> {
    pub(crate) fn new(key: Key, value: V) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_value(self) -> V {
        self.value
    }
}

/// Renders the payload only; the key is not part of a vertex's text form.
impl<V: fmt::Display> fmt::Display for Vertex<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
