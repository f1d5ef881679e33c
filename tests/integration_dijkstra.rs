//! 最短路径集成测试
//!
//! 测试范围:
//! - 三条竞争路线中选择最低代价路线
//! - 不可达目标返回空路径
//! - 可插拔的路径查找函数
//! - 过滤后的图上搜索

mod common;

use adjgraph::graph::{Graph, Key, Path, Paths};
use adjgraph::services::algorithm::{dijkstra, Dijkstra};
use common::RouteFixture;

/// 测试在三条路线中选择长而便宜的路线
#[test]
fn test_dijkstra_path() {
    let fixture = RouteFixture::new();
    let (a, d) = (fixture.key('A'), fixture.key('D'));

    let actual = fixture.graph.find_path(&Dijkstra, a, d);

    assert_eq!(actual.cost, 8);
    assert_eq!(actual.vertices, fixture.keys_of("ABEFGHIJD"));

    let labels: String = actual
        .vertices
        .iter()
        .map(|key| *fixture.graph.get(*key).expect("路径上的顶点应该存在").value())
        .collect();
    assert_eq!(labels, "ABEFGHIJD");
}

/// 测试去掉便宜路线后选择中等路线
#[test]
fn test_dijkstra_after_filter_vertices() {
    let fixture = RouteFixture::new();
    let cheap = fixture.key('G');
    let filtered = fixture.graph.filter_vertices(|vertex| vertex.key() != cheap);

    let path = filtered.find_path(&Dijkstra, fixture.key('A'), fixture.key('D'));
    assert_eq!(path.cost, 13);
    assert_eq!(path.vertices, fixture.keys_of("ABKLD"));

    // 原图仍然选择便宜路线
    let original = fixture.graph.find_path(&Dijkstra, fixture.key('A'), fixture.key('D'));
    assert_eq!(original.cost, 8);
}

/// 测试只保留低代价边后的搜索
#[test]
fn test_dijkstra_after_filter_edges() {
    let fixture = RouteFixture::new();
    let filtered = fixture.graph.filter_edges(|edge| edge.cost >= 4);

    assert!(filtered
        .find_path(&Dijkstra, fixture.key('A'), fixture.key('D'))
        .is_empty());
    let path = filtered.find_path(&Dijkstra, fixture.key('B'), fixture.key('D'));
    assert_eq!(path.cost, 12);
    assert_eq!(path.vertices, fixture.keys_of("BKLD"));
}

/// 测试不可达目标返回空路径
#[test]
fn test_dijkstra_unreachable() {
    let fixture = RouteFixture::new();

    // D 没有出边，无法回到 A
    let path = dijkstra(&fixture.graph, fixture.key('D'), fixture.key('A'));
    assert!(path.is_empty());
    assert_eq!(path, Path::default());

    // 未知的目标
    let path = dijkstra(&fixture.graph, fixture.key('A'), Key::default());
    assert!(path.is_empty());
}

/// 测试删除顶点后的搜索
#[test]
fn test_dijkstra_after_delete_vertex() {
    let fixture = RouteFixture::new();
    fixture.graph.delete_vertex(fixture.key('B'));

    assert!(Dijkstra::shortest_path(&fixture.graph, fixture.key('A'), fixture.key('D')).is_empty());
    let path = Dijkstra::shortest_path(&fixture.graph, fixture.key('E'), fixture.key('D'));
    assert_eq!(path.cost, 6);
    assert_eq!(path.vertices, fixture.keys_of("EFGHIJD"));
}

/// 测试无向图中的反向搜索
#[test]
fn test_dijkstra_undirected() {
    let graph = Graph::new_undirected();
    let keys: Vec<Key> = (0..4).map(|i| graph.add_vertex(i)).collect();
    graph.add_edge_cost(keys[0], keys[1], 2);
    graph.add_edge_cost(keys[1], keys[2], 2);
    graph.add_edge_cost(keys[0], keys[2], 5);
    graph.add_edge_cost(keys[2], keys[3], 1);

    let path = graph.find_path(&Dijkstra, keys[3], keys[0]);
    assert_eq!(path.cost, 5);
    assert_eq!(path.vertices, vec![keys[3], keys[2], keys[1], keys[0]]);
}

/// 测试可插拔的查找函数
#[test]
fn test_find_path_with_closure() {
    let fixture = RouteFixture::new();

    let direct_only = |graph: &Graph<char>, from: Key, to: Key| -> Path {
        let mut found = Path::default();
        graph.visit_edges(from, |edge| {
            if edge.end.key() == to {
                found = Path {
                    cost: edge.cost,
                    vertices: vec![from, to],
                };
                return false;
            }
            true
        });
        found
    };

    let path = fixture.graph.find_path(&direct_only, fixture.key('A'), fixture.key('B'));
    assert_eq!(path.cost, 1);
    assert!(fixture
        .graph
        .find_path(&direct_only, fixture.key('A'), fixture.key('D'))
        .is_empty());

    let wrapped = |graph: &Graph<char>, from: Key, to: Key| dijkstra(graph, from, to);
    let path = fixture.graph.find_path(&wrapped, fixture.key('A'), fixture.key('D'));
    assert_eq!(path.cost, 8);
}

/// 测试多路径查找入口
#[test]
fn test_find_paths_with_closure() {
    let fixture = RouteFixture::new();

    // 对每个直接后继分别求最短路径
    let via_successors = |graph: &Graph<char>, from: Key, to: Key| -> Paths {
        let mut successors = Vec::new();
        graph.visit_edges(from, |edge| {
            successors.push((edge.end.key(), edge.cost));
            true
        });

        let mut paths: Paths = successors
            .into_iter()
            .filter_map(|(next, cost)| {
                let tail = dijkstra(graph, next, to);
                if tail.is_empty() {
                    return None;
                }
                let mut vertices = vec![from];
                vertices.extend(tail.vertices);
                Some(Path {
                    cost: cost + tail.cost,
                    vertices,
                })
            })
            .collect();
        paths.sort_by_key(|path| path.cost);
        paths
    };

    let paths = fixture.graph.find_paths(&via_successors, fixture.key('B'), fixture.key('D'));
    let costs: Vec<i64> = paths.iter().map(|path| path.cost).collect();
    assert_eq!(costs, vec![7, 12, 20]);
    assert_eq!(paths[0].vertices, fixture.keys_of("BEFGHIJD"));
}
