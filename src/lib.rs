//! adjgraph - A concurrency-safe in-memory graph container
//!
//! Vertices carry arbitrary payloads and are addressed by per-graph `Key`s.
//! The `Graph` keeps forward and reverse adjacency indices behind one lock,
//! supports breadth-first vertex traversal, edge visiting, structural
//! filtering into independent copies, and pluggable single-pair path search
//! (`services::algorithm::Dijkstra`).
//!
//! ```
//! use adjgraph::graph::Graph;
//! use adjgraph::services::algorithm::Dijkstra;
//!
//! let graph = Graph::new();
//! let a = graph.add_vertex("a");
//! let b = graph.add_vertex("b");
//! let c = graph.add_vertex("c");
//! graph.add_edge_cost(a, b, 1);
//! graph.add_edge_cost(b, c, 1);
//! graph.add_edge_cost(a, c, 5);
//!
//! let path = graph.find_path(&Dijkstra, a, c);
//! assert_eq!(path.vertices, vec![a, b, c]);
//! assert_eq!(path.cost, 2);
//! ```

pub mod config;
pub mod core;
pub mod graph;
pub mod services;
pub mod utils;
