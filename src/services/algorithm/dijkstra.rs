//! Dijkstra算法模块
//!
//! 在 `Graph` 上按路径对象扩展的最短路径搜索

use std::collections::HashSet;

use log::trace;

use super::path_heap::{PathHeap, SearchPath};
use crate::graph::{Graph, Key, Path, PathFinder};

/// Dijkstra算法结构体，可直接传给 `Graph::find_path`
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// 查找从起点到目标节点的最低代价路径
    pub fn shortest_path<V: Clone>(graph: &Graph<V>, from: Key, to: Key) -> Path {
        dijkstra(graph, from, to)
    }
}

impl<V: Clone> PathFinder<V> for Dijkstra {
    fn find_path(&self, graph: &Graph<V>, from: Key, to: Key) -> Path {
        dijkstra(graph, from, to)
    }
}

/// Finds the cheapest path from `from` to `to`.
///
/// The frontier holds whole candidate paths ordered by cumulative cost. A
/// vertex is settled the first time a path ending in it is popped, and later
/// paths ending in a settled vertex are discarded, so the first popped path
/// ending in `to` is optimal for non-negative costs. Negative costs are not
/// rejected and give unspecified results.
///
/// Only `Graph::visit_edges` is used, one lock acquisition per expanded
/// vertex. Returns an empty `Path` when `to` is unreachable.
pub fn dijkstra<V: Clone>(graph: &Graph<V>, from: Key, to: Key) -> Path {
    let mut visited: HashSet<Key> = HashSet::new();
    let mut heap = PathHeap::with_paths([SearchPath::start(from)]);

    while let Some(path) = heap.pop() {
        let Some(key) = path.last() else {
            continue;
        };

        if visited.contains(&key) {
            continue;
        }

        if key == to {
            trace!(
                "dijkstra {}->{} settled cost {} after {} vertices",
                from,
                to,
                path.cost,
                visited.len()
            );
            return path.into();
        }

        visited.insert(key);

        graph.visit_edges(key, |edge| {
            let end = edge.end.key();
            if !visited.contains(&end) {
                heap.push(path.extend(edge.cost, end));
            }
            true
        });
    }

    trace!("dijkstra {}->{} found no path", from, to);
    Path::default()
}
