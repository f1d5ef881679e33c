use std::fmt;

use super::Vertex;

/// A directed, costed connection between two vertices.
///
/// Edges are stored as key pairs and only materialized into `Edge` values
/// during traversal. On an undirected graph the reverse edge exists as a
/// separate entry with the same cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<V> {
    pub start: Vertex<V>,
    pub end: Vertex<V>,
    pub cost: i64,
}

/// `<start>-><end>(<cost>)`, using vertex keys
impl<V> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}({})", self.start.key(), self.end.key(), self.cost)
    }
}
