use super::{Graph, Key};

/// A costed sequence of vertex keys, where cost is the sum of the edge costs
/// along the sequence.
///
/// An empty vertex sequence means "no path"; it is distinct from the
/// zero-cost single-vertex path from a vertex to itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    pub cost: i64,
    pub vertices: Vec<Key>,
}

/// An ordered collection of paths, as returned by multi-path algorithms.
pub type Paths = Vec<Path>;

impl Path {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn first(&self) -> Option<Key> {
        self.vertices.first().copied()
    }

    pub fn last(&self) -> Option<Key> {
        self.vertices.last().copied()
    }
}

/// Pluggable single-path search used by `Graph::find_path`.
///
/// Implementations only see the graph's public surface. Any function or
/// closure with the matching shape is a `PathFinder`.
pub trait PathFinder<V> {
    fn find_path(&self, graph: &Graph<V>, from: Key, to: Key) -> Path;
}

impl<V, F> PathFinder<V> for F
where
    F: Fn(&Graph<V>, Key, Key) -> Path,
{
    fn find_path(&self, graph: &Graph<V>, from: Key, to: Key) -> Path {
        self(graph, from, to)
    }
}

/// Pluggable multi-path search used by `Graph::find_paths`. The number and
/// order of the returned paths is up to the implementation.
pub trait PathsFinder<V> {
    fn find_paths(&self, graph: &Graph<V>, from: Key, to: Key) -> Paths;
}

impl<V, F> PathsFinder<V> for F
where
    F: Fn(&Graph<V>, Key, Key) -> Paths,
{
    fn find_paths(&self, graph: &Graph<V>, from: Key, to: Key) -> Paths {
        self(graph, from, to)
    }
}
