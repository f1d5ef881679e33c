//! The vertex / forward / reverse table triple behind a `Graph`.
//!
//! Nothing here locks. `Graph` owns one `GraphTables` behind its mutex and
//! every multi-table update happens inside a single method of this type, so
//! the forward/reverse symmetry holds whenever the lock is released.

use std::collections::HashMap;

use super::{Edge, Key, Vertex};
use crate::core::{GraphError, GraphResult};

/// Per-vertex neighbor map: neighbor key -> edge cost
pub(crate) type Adjacency = HashMap<Key, HashMap<Key, i64>>;

#[derive(Debug, Clone)]
pub(crate) struct GraphTables<V> {
    pub(crate) vertices: HashMap<Key, Vertex<V>>,
    pub(crate) forward: Adjacency,
    pub(crate) reverse: Adjacency,
}

impl<V> GraphTables<V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: HashMap::with_capacity(capacity),
            forward: HashMap::with_capacity(capacity),
            reverse: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn contains(&self, key: Key) -> bool {
        self.vertices.contains_key(&key)
    }

    pub(crate) fn insert_vertex(&mut self, key: Key, value: V) {
        self.vertices.insert(key, Vertex::new(key, value));
    }

    /// Inserts or overwrites `from -> to`. Fails without touching any table
    /// when either endpoint is unknown.
    pub(crate) fn insert_edge(&mut self, from: Key, to: Key, cost: i64) -> GraphResult<()> {
        if !self.contains(from) {
            return Err(GraphError::VertexNotFound(from));
        }
        if !self.contains(to) {
            return Err(GraphError::VertexNotFound(to));
        }

        self.forward.entry(from).or_default().insert(to, cost);
        self.reverse.entry(to).or_default().insert(from, cost);
        Ok(())
    }

    /// Removes exactly `from -> to`, self-loops included.
    pub(crate) fn remove_edge(&mut self, from: Key, to: Key) -> bool {
        let removed = self
            .forward
            .get_mut(&from)
            .and_then(|out| out.remove(&to))
            .is_some();
        if let Some(incoming) = self.reverse.get_mut(&to) {
            incoming.remove(&from);
        }
        removed
    }

    /// Edge deletion with wildcard support.
    ///
    /// `from == to` is a no-op. `Key::ANY` on one side removes every edge
    /// incident to the other side in that direction, provided that side is a
    /// known vertex.
    pub(crate) fn delete_edge(&mut self, from: Key, to: Key) {
        if from == to {
            return;
        }

        if from != Key::ANY && to != Key::ANY {
            self.remove_edge(from, to);
            return;
        }

        if from == Key::ANY {
            if !self.contains(to) {
                return;
            }
            if let Some(incoming) = self.reverse.get_mut(&to) {
                for (source, _) in incoming.drain() {
                    if let Some(out) = self.forward.get_mut(&source) {
                        out.remove(&to);
                    }
                }
            }
        } else {
            if !self.contains(from) {
                return;
            }
            if let Some(out) = self.forward.get_mut(&from) {
                for (target, _) in out.drain() {
                    if let Some(incoming) = self.reverse.get_mut(&target) {
                        incoming.remove(&from);
                    }
                }
            }
        }
    }

    /// Removes a vertex and every edge touching it in either direction.
    pub(crate) fn remove_vertex(&mut self, key: Key) -> Option<Vertex<V>> {
        self.delete_edge(key, Key::ANY);
        self.delete_edge(Key::ANY, key);

        let vertex = self.vertices.remove(&key)?;
        self.forward.remove(&key);
        self.reverse.remove(&key);
        Some(vertex)
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.forward.values().map(HashMap::len).sum()
    }
}

#[cfg(test)]
impl<V> GraphTables<V> {
    fn cost(&self, from: Key, to: Key) -> Option<i64> {
        self.forward.get(&from)?.get(&to).copied()
    }

    fn reverse_cost(&self, to: Key, from: Key) -> Option<i64> {
        self.reverse.get(&to)?.get(&from).copied()
    }
}

impl<V: Clone> GraphTables<V> {
    /// Materializes an edge. `None` when either endpoint has no vertex record.
    pub(crate) fn edge(&self, start: Key, end: Key, cost: i64) -> Option<Edge<V>> {
        Some(Edge {
            start: self.vertices.get(&start)?.clone(),
            end: self.vertices.get(&end)?.clone(),
            cost,
        })
    }

    /// Feeds the outgoing edges of `start` to `visitor` until it returns
    /// `false`. Returns `false` if the visitor stopped early.
    pub(crate) fn visit_outgoing<F>(&self, start: Key, visitor: &mut F) -> bool
    where
        F: FnMut(Edge<V>) -> bool,
    {
        let Some(out) = self.forward.get(&start) else {
            return true;
        };

        for (&end, &cost) in out {
            let Some(edge) = self.edge(start, end, cost) else {
                continue;
            };
            if !visitor(edge) {
                return false;
            }
        }
        true
    }
}
