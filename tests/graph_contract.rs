//! 图公开接口测试
//!
//! 只通过公开接口观察图的行为

mod common;

use common::{init_tracing, labels, weights};
use std::collections::HashMap;
use wdgraph::{Error, WeightedDirectedGraph};

fn empty() -> WeightedDirectedGraph<String> {
    init_tracing();
    WeightedDirectedGraph::new()
}

fn s(label: &str) -> String {
    label.to_string()
}

// ==================== add ====================

#[test]
fn test_initial_vertices_empty() {
    let graph = empty();

    assert!(graph.vertices().is_empty());
    assert!(graph.sources("V1").is_empty());
    assert!(graph.targets("V1").is_empty());
}

#[test]
fn test_add_vertices() {
    let mut graph = empty();

    assert!(graph.add(s("V1")));
    assert!(graph.add(s("V2")));
    assert!(graph.add(s("V3")));
    assert_eq!(graph.vertices(), labels(&["V1", "V2", "V3"]));
}

#[test]
fn test_add_existing_vertex() {
    let mut graph = empty();
    graph.add(s("V1"));
    graph.add(s("V2"));

    let before = graph.vertices();
    assert!(!graph.add(s("V2")));
    assert_eq!(graph.vertices(), before);
    assert_eq!(graph.vertex_count(), 2);
}

#[test]
fn test_add_keeps_existing_edges() {
    let mut graph = empty();
    graph.set(s("V1"), s("V2"), 4);

    assert!(!graph.add(s("V1")));
    assert_eq!(graph.targets("V1"), weights(&[("V2", 4)]));
}

// ==================== set ====================

#[test]
fn test_set_edge_empty_graph() {
    let mut graph = empty();

    assert_eq!(graph.set(s("V1"), s("V2"), 1), 0);
    assert_eq!(graph.targets("V1").get("V2"), Some(&1));
    assert_eq!(graph.sources("V2").get("V1"), Some(&1));
    assert_eq!(graph.vertices().len(), 2);
}

#[test]
fn test_set_edge_existing_source() {
    let mut graph = empty();
    graph.add(s("V1"));

    assert_eq!(graph.set(s("V1"), s("V2"), 2), 0);
    assert_eq!(graph.targets("V1"), weights(&[("V2", 2)]));
}

#[test]
fn test_set_edge_weight_zero_new_target() {
    let mut graph = empty();
    graph.add(s("V1"));

    assert_eq!(graph.set(s("V1"), s("V2"), 0), 0);
    assert_eq!(graph.vertices(), labels(&["V1"]));
}

#[test]
fn test_set_self_loop() {
    let mut graph = empty();

    assert_eq!(graph.set(s("A"), s("A"), 5), 0);
    assert_eq!(graph.vertices(), labels(&["A"]));
    assert_eq!(graph.targets("A"), weights(&[("A", 5)]));
}

#[test]
fn test_set_returns_previous_weight() {
    let mut graph = empty();

    assert_eq!(graph.set(s("A"), s("B"), 3), 0);
    assert_eq!(graph.set(s("A"), s("B"), 7), 3);
    assert_eq!(graph.set(s("A"), s("B"), 0), 7);
    assert_eq!(graph.set(s("A"), s("B"), 0), 0);
}

#[test]
fn test_set_edge_delete() {
    let mut graph = empty();
    graph.set(s("A"), s("B"), 1);

    assert_eq!(graph.set(s("A"), s("B"), 0), 1);
    assert!(!graph.targets("A").contains_key("B"));
    assert!(graph.sources("B").is_empty());
    assert_eq!(graph.vertices(), labels(&["A", "B"]));
}

#[test]
fn test_set_reverse_direction_is_distinct() {
    let mut graph = empty();
    graph.set(s("A"), s("B"), 1);
    graph.set(s("B"), s("A"), 2);

    assert_eq!(graph.targets("A"), weights(&[("B", 1)]));
    assert_eq!(graph.targets("B"), weights(&[("A", 2)]));
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_set_negative_weight_is_noop() {
    let mut graph = empty();
    graph.set(s("A"), s("B"), 3);

    assert_eq!(graph.set(s("A"), s("B"), -3), 0);
    assert_eq!(graph.set(s("X"), s("Y"), -1), 0);

    assert_eq!(graph.targets("A"), weights(&[("B", 3)]));
    assert_eq!(graph.vertices(), labels(&["A", "B"]));
}

#[test]
fn test_try_set_rejects_negative_weight() {
    let mut graph = empty();

    assert_eq!(
        graph.try_set(s("X"), s("Y"), -1),
        Err(Error::InvalidWeight(-1))
    );
    assert!(graph.vertices().is_empty());
    assert_eq!(graph.try_set(s("X"), s("Y"), 1), Ok(0));
}

// ==================== remove ====================

#[test]
fn test_remove_missing_vertex() {
    let mut graph = empty();
    graph.add(s("V1"));

    assert!(!graph.remove("V2"));
    assert_eq!(graph.vertices(), labels(&["V1"]));
}

#[test]
fn test_remove_cascades_incoming_edges() {
    let mut graph = empty();
    graph.set(s("A"), s("B"), 1);
    graph.set(s("C"), s("B"), 2);
    graph.set(s("A"), s("C"), 3);

    assert!(graph.remove("B"));
    assert_eq!(graph.vertices(), labels(&["A", "C"]));
    assert!(!graph.targets("A").contains_key("B"));
    assert!(!graph.targets("C").contains_key("B"));
    assert_eq!(graph.targets("A"), weights(&[("C", 3)]));
    assert!(graph.validate().is_ok());
}

#[test]
fn test_remove_then_readd_starts_empty() {
    let mut graph = empty();
    graph.set(s("A"), s("B"), 1);
    graph.set(s("B"), s("A"), 1);

    assert!(graph.remove("B"));
    assert!(graph.add(s("B")));
    assert!(graph.targets("B").is_empty());
    assert!(graph.sources("B").is_empty());
}

// ==================== sources / targets ====================

#[test]
fn test_sources_many() {
    let mut graph = empty();
    graph.set(s("V1"), s("V4"), 1);
    graph.set(s("V2"), s("V4"), 2);
    graph.set(s("V3"), s("V4"), 3);
    graph.set(s("V4"), s("V1"), 9);

    assert_eq!(
        graph.sources("V4"),
        weights(&[("V1", 1), ("V2", 2), ("V3", 3)])
    );
}

#[test]
fn test_targets_is_independent_copy() {
    let mut graph = empty();
    graph.set(s("V1"), s("V2"), 1);

    let mut targets = graph.targets("V1");
    targets.insert(s("V3"), 5);
    targets.clear();

    assert_eq!(graph.targets("V1"), weights(&[("V2", 1)]));
}

#[test]
fn test_vertices_is_independent_copy() {
    let mut graph = empty();
    graph.add(s("V1"));

    let mut vertices = graph.vertices();
    vertices.insert(s("V9"));

    assert_eq!(graph.vertices(), labels(&["V1"]));
}

// ==================== 场景 ====================

#[test]
fn test_scenario() {
    let mut graph = empty();

    assert!(graph.add(s("V1")));
    assert_eq!(graph.set(s("V1"), s("V2"), 2), 0);
    assert_eq!(graph.vertices(), labels(&["V1", "V2"]));
    assert_eq!(graph.set(s("V1"), s("V2"), 5), 2);
    assert!(graph.remove("V2"));
    assert_eq!(graph.targets("V1"), HashMap::new());
    assert_eq!(graph.vertices(), labels(&["V1"]));
    assert_eq!(graph.to_string(), "Graph contains 1 vertices and 0 edges");
}

#[test]
fn test_integer_labels() {
    init_tracing();
    let mut graph: WeightedDirectedGraph<u32> = WeightedDirectedGraph::new();

    graph.set(1, 2, 10);
    graph.set(2, 3, 20);

    assert_eq!(graph.sources(&3), HashMap::from([(2, 20)]));
    assert!(graph.remove(&2));
    assert!(graph.targets(&1).is_empty());
    assert_eq!(graph.edge_count(), 0);
}

// ==================== 序列化 ====================

#[test]
fn test_json_shape() {
    let mut graph = empty();
    graph.set(s("A"), s("B"), 2);

    let value = serde_json::to_value(&graph).unwrap();
    let vertices = value.as_array().unwrap();
    assert_eq!(vertices.len(), 2);
    assert_eq!(vertices[0]["label"], "A");
    assert_eq!(vertices[0]["targets"]["B"], 2);

    let restored: WeightedDirectedGraph<String> = serde_json::from_value(value).unwrap();
    assert_eq!(restored, graph);
}

#[test]
fn test_json_rejects_invalid_snapshots() {
    init_tracing();

    let duplicate = r#"[{"label":"A","targets":{}},{"label":"A","targets":{}}]"#;
    assert!(serde_json::from_str::<WeightedDirectedGraph<String>>(duplicate).is_err());

    let dangling = r#"[{"label":"A","targets":{"B":1}}]"#;
    assert!(serde_json::from_str::<WeightedDirectedGraph<String>>(dangling).is_err());

    let zero_weight = r#"[{"label":"A","targets":{"A":0}}]"#;
    assert!(serde_json::from_str::<WeightedDirectedGraph<String>>(zero_weight).is_err());
}

#[test]
fn test_from_bytes_rejects_garbage() {
    init_tracing();

    let result = WeightedDirectedGraph::<String>::from_bytes(&[0xff, 0xff, 0xff]);
    assert!(matches!(result, Err(Error::SerializationError(_))));
}
