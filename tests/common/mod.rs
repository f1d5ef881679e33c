//! 集成测试共享工具模块
//!
//! 提供测试图构建和计数辅助函数，供所有集成测试使用

#![allow(dead_code)]

use adjgraph::graph::{Graph, Key};

/// Twelve vertices `A..=L` with three competing routes from A to D:
/// - short but expensive: `B->C->D`, cost 10 each
/// - short but medium: `B->K->L->D`, cost 4 each
/// - long but cheap: `B->E->F->G->H->I->J->D`, cost 1 each
pub struct RouteFixture {
    pub graph: Graph<char>,
    pub keys: Vec<Key>,
}

impl RouteFixture {
    pub fn new() -> Self {
        let graph = Graph::new();
        let keys: Vec<Key> = ('A'..='L').map(|c| graph.add_vertex(c)).collect();

        let fixture = Self { graph, keys };
        fixture.edge('A', 'B', 1);

        fixture.edge('B', 'C', 10);
        fixture.edge('C', 'D', 10);

        fixture.edge('B', 'K', 4);
        fixture.edge('K', 'L', 4);
        fixture.edge('L', 'D', 4);

        for pair in ['B', 'E', 'F', 'G', 'H', 'I', 'J', 'D'].windows(2) {
            fixture.edge(pair[0], pair[1], 1);
        }

        fixture
    }

    /// Key of the vertex labelled `label`
    pub fn key(&self, label: char) -> Key {
        self.keys[(label as u8 - b'A') as usize]
    }

    pub fn keys_of(&self, labels: &str) -> Vec<Key> {
        labels.chars().map(|c| self.key(c)).collect()
    }

    fn edge(&self, from: char, to: char, cost: i64) {
        assert!(
            self.graph.add_edge_cost(self.key(from), self.key(to), cost),
            "边添加失败: {}->{}",
            from,
            to
        );
    }
}

/// `1 -> 2 -> ... -> n`, unit costs
pub fn chain(n: i32) -> (Graph<i32>, Vec<Key>) {
    let graph = Graph::new();
    let keys: Vec<Key> = (1..=n).map(|i| graph.add_vertex(i)).collect();
    for pair in keys.windows(2) {
        assert!(graph.add_edge(pair[0], pair[1]));
    }
    (graph, keys)
}

pub fn count_vertices<V: Clone>(graph: &Graph<V>) -> usize {
    let mut n = 0;
    graph.visit_vertices(Key::ROOT, |_| {
        n += 1;
        true
    });
    n
}

pub fn count_edges<V: Clone>(graph: &Graph<V>) -> usize {
    let mut n = 0;
    graph.visit_edges(Key::ROOT, |_| {
        n += 1;
        true
    });
    n
}

/// Every `(start, end, cost)` triple visible through `visit_edges(ROOT)`, sorted
pub fn edge_triples<V: Clone>(graph: &Graph<V>) -> Vec<(Key, Key, i64)> {
    let mut triples = Vec::new();
    graph.visit_edges(Key::ROOT, |edge| {
        triples.push((edge.start.key(), edge.end.key(), edge.cost));
        true
    });
    triples.sort_unstable();
    triples
}

/// Payloads reached by `visit_vertices(start)`, sorted
pub fn reachable_values<V: Clone + Ord>(graph: &Graph<V>, start: Key) -> Vec<V> {
    let mut values = Vec::new();
    graph.visit_vertices(start, |vertex| {
        values.push(vertex.into_value());
        true
    });
    values.sort();
    values
}
