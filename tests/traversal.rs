//! Traversal tests: full coverage per mode, deterministic orders, parsing.

use std::collections::HashSet;

use routegraph::graph::{TraversalMode, WeightedGraph};
use routegraph::types::error::GraphError;

// ==================== Helpers ====================

const ALL_MODES: [TraversalMode; 3] = [
    TraversalMode::BreadthFirst,
    TraversalMode::DepthFirstIterative,
    TraversalMode::DepthFirstRecursive,
];

/// The complete 4-vertex example.
fn k4() -> WeightedGraph<&'static str> {
    WeightedGraph::from_triples([
        ("A", "B", 5),
        ("A", "C", 6),
        ("A", "D", 8),
        ("B", "C", 7),
        ("B", "D", 10),
        ("C", "D", 3),
    ])
}

/// A two-component forest: a tree rooted near 7 plus the pair 8-10.
fn forest() -> WeightedGraph<u32> {
    WeightedGraph::from_triples([
        (7, 6, 1),
        (7, 2, 1),
        (7, 5, 1),
        (6, 4, 1),
        (2, 1, 1),
        (5, 9, 1),
        (8, 10, 1),
    ])
}

// ==================== Coverage Tests ====================

#[test]
fn test_every_mode_emits_each_vertex_once() {
    let graph = forest();
    let expected: HashSet<u32> = graph.keys().copied().collect();

    for mode in ALL_MODES {
        let order = graph.traverse(mode);
        assert_eq!(order.len(), graph.vertex_count(), "mode {}", mode);
        let seen: HashSet<u32> = order.iter().copied().collect();
        assert_eq!(seen, expected, "mode {}", mode);
    }
}

#[test]
fn test_traverse_empty_graph() {
    let graph: WeightedGraph<&str> = WeightedGraph::from_triples([]);
    for mode in ALL_MODES {
        assert!(graph.traverse(mode).is_empty());
    }
}

#[test]
fn test_traverse_single_vertex_self_loop() {
    let graph = WeightedGraph::from_triples([("solo", "solo", 1)]);
    for mode in ALL_MODES {
        assert_eq!(graph.traverse(mode), vec!["solo"]);
    }
}

#[test]
fn test_disconnected_components_all_covered() {
    let graph = WeightedGraph::from_triples([("a", "b", 1), ("c", "d", 1), ("e", "f", 1)]);
    for mode in ALL_MODES {
        assert_eq!(graph.traverse(mode).len(), 6, "mode {}", mode);
    }
}

// ==================== Order Tests ====================

#[test]
fn test_bfs_order_on_forest() {
    // Component of 7 level by level, then the 8-10 pair.
    let graph = forest();
    assert_eq!(
        graph.traverse(TraversalMode::BreadthFirst),
        vec![7, 6, 2, 5, 4, 1, 9, 8, 10]
    );
}

#[test]
fn test_dfs_orders_on_forest() {
    // Both DFS variants descend edge-insertion-order-first and agree.
    let graph = forest();
    let expected = vec![7, 6, 4, 2, 1, 5, 9, 8, 10];
    assert_eq!(graph.traverse(TraversalMode::DepthFirstIterative), expected);
    assert_eq!(graph.traverse(TraversalMode::DepthFirstRecursive), expected);
}

#[test]
fn test_bfs_order_on_complete_graph() {
    let graph = k4();
    assert_eq!(
        graph.traverse(TraversalMode::BreadthFirst),
        vec!["A", "B", "C", "D"]
    );
}

#[test]
fn test_iterative_dfs_matches_recursive_dfs() {
    let graph = k4();
    assert_eq!(
        graph.traverse(TraversalMode::DepthFirstIterative),
        graph.traverse(TraversalMode::DepthFirstRecursive)
    );
}

// ==================== Mode Parsing Tests ====================

#[test]
fn test_mode_name_roundtrip() {
    for mode in ALL_MODES {
        assert_eq!(TraversalMode::from_name(mode.name()), Some(mode));
    }
}

#[test]
fn test_mode_from_name_aliases() {
    assert_eq!(
        TraversalMode::from_name("breadth-first"),
        Some(TraversalMode::BreadthFirst)
    );
    assert_eq!(
        TraversalMode::from_name("DFS"),
        Some(TraversalMode::DepthFirstIterative)
    );
    assert_eq!(
        TraversalMode::from_name("rdfs"),
        Some(TraversalMode::DepthFirstRecursive)
    );
}

#[test]
fn test_unknown_mode_fails_parse() {
    assert_eq!(TraversalMode::from_name("dijkstra"), None);

    let result: Result<TraversalMode, _> = "sideways".parse();
    match result.unwrap_err() {
        GraphError::UnknownMode(name) => assert_eq!(name, "sideways"),
        e => panic!("Expected UnknownMode error, got {:?}", e),
    }
}
