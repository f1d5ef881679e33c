//! The concurrency-safe graph handle.
//!
//! One `parking_lot::Mutex` guards the whole table triple. Each public method
//! takes it for the duration of the call. Traversal visitors run with the
//! lock held: a visitor must not call back into the same graph or it will
//! deadlock. Filters copy the tables under a single acquisition and run their
//! predicates against that private copy.

use std::collections::{HashSet, VecDeque};
use std::fmt;

use log::debug;
use parking_lot::Mutex;

use super::tables::GraphTables;
use super::{Edge, Key, KeyGenerator, Path, PathFinder, Paths, PathsFinder, Vertex};
use crate::config::GraphConfig;
use crate::core::GraphResult;

/// Cost of edges added through `Graph::add_edge`
pub const DEFAULT_EDGE_COST: i64 = 1;

/// A mutable directed (or undirected) graph keyed by `Key`.
#[derive(Debug)]
pub struct Graph<V> {
    keys: KeyGenerator,
    tables: Mutex<GraphTables<V>>,
    undirected: bool,
}

impl<V> Graph<V> {
    /// Creates an empty directed graph.
    pub fn new() -> Self {
        Self::with_config(&GraphConfig::default())
    }

    /// Creates an empty undirected graph.
    pub fn new_undirected() -> Self {
        Self::with_config(&GraphConfig {
            undirected: true,
            ..GraphConfig::default()
        })
    }

    pub fn with_config(config: &GraphConfig) -> Self {
        Self {
            keys: KeyGenerator::new(),
            tables: Mutex::new(GraphTables::with_capacity(config.initial_capacity)),
            undirected: config.undirected,
        }
    }

    pub fn is_undirected(&self) -> bool {
        self.undirected
    }

    /// Adds a vertex holding `value` and returns its key.
    pub fn add_vertex(&self, value: V) -> Key {
        let key = self.keys.next_key();
        self.tables.lock().insert_vertex(key, value);
        debug!("added vertex {}", key);
        key
    }

    /// Adds `from -> to` with cost 1. See `add_edge_cost`.
    pub fn add_edge(&self, from: Key, to: Key) -> bool {
        self.add_edge_cost(from, to, DEFAULT_EDGE_COST)
    }

    /// Adds (or overwrites) the directed edge `from -> to` with `cost`. On an
    /// undirected graph the reverse edge is written with the same cost.
    ///
    /// Returns `false` and leaves the graph untouched when either endpoint is
    /// not a vertex of this graph.
    pub fn add_edge_cost(&self, from: Key, to: Key, cost: i64) -> bool {
        self.try_add_edge_cost(from, to, cost).is_ok()
    }

    /// Like `add_edge_cost`, reporting the unknown endpoint on failure.
    pub fn try_add_edge_cost(&self, from: Key, to: Key, cost: i64) -> GraphResult<()> {
        let mut tables = self.tables.lock();
        tables.insert_edge(from, to, cost)?;
        if self.undirected {
            // both endpoints were just checked, this cannot fail
            tables.insert_edge(to, from, cost)?;
        }
        debug!("added edge {}->{}({})", from, to, cost);
        Ok(())
    }

    /// Deletes a vertex and all of its incident edges. Unknown keys are a
    /// no-op. Deleting a vertex may fragment the graph.
    pub fn delete_vertex(&self, key: Key) {
        if self.tables.lock().remove_vertex(key).is_some() {
            debug!("deleted vertex {}", key);
        }
    }

    /// Deletes the directed edge `from -> to` if present.
    ///
    /// `from == to` is always a no-op. Passing `Key::ANY` for one endpoint
    /// deletes every edge incident to the other endpoint in that direction.
    /// On undirected graphs only the requested direction is removed.
    pub fn delete_edge(&self, from: Key, to: Key) {
        self.tables.lock().delete_edge(from, to);
    }

    pub fn contains(&self, key: Key) -> bool {
        self.tables.lock().contains(key)
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.tables.lock().vertices.len()
    }

    /// Number of directed edges. An undirected connection counts twice.
    pub fn size(&self) -> usize {
        self.tables.lock().edge_count()
    }

    /// Runs `algo` to find one path between `from` and `to`.
    ///
    /// The graph is not locked around the call; the algorithm locks per
    /// traversal call, so concurrent mutation may interleave with a search.
    pub fn find_path<A>(&self, algo: &A, from: Key, to: Key) -> Path
    where
        A: PathFinder<V> + ?Sized,
    {
        algo.find_path(self, from, to)
    }

    /// Runs `algo` to find paths between `from` and `to`. Count and order are
    /// up to `algo`.
    pub fn find_paths<A>(&self, algo: &A, from: Key, to: Key) -> Paths
    where
        A: PathsFinder<V> + ?Sized,
    {
        algo.find_paths(self, from, to)
    }
}

impl<V: Clone> Graph<V> {
    /// Looks up a vertex, returning a copy.
    pub fn get(&self, key: Key) -> Option<Vertex<V>> {
        self.tables.lock().vertices.get(&key).cloned()
    }

    /// Breadth-first vertex traversal from `start`, or from every vertex at
    /// once when `start` is `Key::ROOT`. Each vertex is visited at most once;
    /// returning `false` from `visitor` ends the traversal.
    pub fn visit_vertices<F>(&self, start: Key, mut visitor: F)
    where
        F: FnMut(Vertex<V>) -> bool,
    {
        let tables = self.tables.lock();

        let mut queue: VecDeque<Key> = if start == Key::ROOT {
            tables.vertices.keys().copied().collect()
        } else {
            VecDeque::from([start])
        };
        let mut visited: HashSet<Key> = HashSet::with_capacity(queue.len());

        while let Some(key) = queue.pop_front() {
            if !visited.insert(key) {
                continue;
            }
            let Some(vertex) = tables.vertices.get(&key) else {
                continue;
            };
            if !visitor(vertex.clone()) {
                break;
            }
            if let Some(out) = tables.forward.get(&key) {
                queue.extend(out.keys().filter(|next| !visited.contains(*next)));
            }
        }
    }

    /// Visits the outgoing edges of `start`, or of every vertex when `start`
    /// is `Key::ROOT`.
    ///
    /// Returning `false` from `visitor` stops the edges of the *current*
    /// source vertex only. With `Key::ROOT` the visit then moves on to the
    /// next source vertex. This asymmetry is intentional and relied upon.
    pub fn visit_edges<F>(&self, start: Key, mut visitor: F)
    where
        F: FnMut(Edge<V>) -> bool,
    {
        let tables = self.tables.lock();

        if start != Key::ROOT {
            tables.visit_outgoing(start, &mut visitor);
            return;
        }

        for &source in tables.forward.keys() {
            tables.visit_outgoing(source, &mut visitor);
        }
    }

    /// Returns a copy of the graph without the vertices for which `predicate`
    /// is `false`, along with their incident edges. The source graph is not
    /// modified. Every decision is made against the unfiltered structure.
    pub fn filter_vertices<P>(&self, mut predicate: P) -> Graph<V>
    where
        P: FnMut(&Vertex<V>) -> bool,
    {
        let mut dup = self.clone();
        let tables = dup.tables.get_mut();

        let rejected: Vec<Key> = tables
            .vertices
            .values()
            .filter(|vertex| !predicate(*vertex))
            .map(Vertex::key)
            .collect();

        debug!("filter removes {} vertices", rejected.len());
        for key in rejected {
            tables.remove_vertex(key);
        }

        dup
    }

    /// Returns a copy of the graph without the edges for which `predicate` is
    /// `false`. No vertex is removed, so the order is preserved. The source
    /// graph is not modified. Every decision is made against the unfiltered
    /// structure.
    pub fn filter_edges<P>(&self, mut predicate: P) -> Graph<V>
    where
        P: FnMut(&Edge<V>) -> bool,
    {
        let mut dup = self.clone();
        let tables = dup.tables.get_mut();

        let mut rejected = Vec::new();
        for (&start, out) in &tables.forward {
            for (&end, &cost) in out {
                let Some(edge) = tables.edge(start, end, cost) else {
                    continue;
                };
                if !predicate(&edge) {
                    rejected.push((start, end));
                }
            }
        }

        debug!("filter removes {} edges", rejected.len());
        for (start, end) in rejected {
            tables.remove_edge(start, end);
        }

        dup
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy taken under a single lock acquisition. The copy's key counter
/// continues from the source's.
impl<V: Clone> Clone for Graph<V> {
    fn clone(&self) -> Self {
        let tables = self.tables.lock();
        Self {
            keys: self.keys.clone(),
            tables: Mutex::new(tables.clone()),
            undirected: self.undirected,
        }
    }
}

/// Diagnostic rendering: one line per vertex (its payload), each outgoing
/// edge target appended as `\t<target>` on its own line. A vertex without
/// outgoing edges is followed by a bare newline. Vertices and targets are
/// rendered in key order.
impl<V: fmt::Display> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tables = self.tables.lock();

        let mut keys: Vec<Key> = tables.vertices.keys().copied().collect();
        keys.sort_unstable();

        for key in keys {
            let Some(vertex) = tables.vertices.get(&key) else {
                continue;
            };
            write!(f, "{}", vertex)?;

            let mut targets: Vec<Key> = tables
                .forward
                .get(&key)
                .map(|out| out.keys().copied().collect())
                .unwrap_or_default();
            targets.sort_unstable();

            let mut wrote_edge = false;
            for target in targets {
                if let Some(end) = tables.vertices.get(&target) {
                    writeln!(f, "\t{}", end)?;
                    wrote_edge = true;
                }
            }
            if !wrote_edge {
                writeln!(f)?;
            }
        }

        Ok(())
    }
}
