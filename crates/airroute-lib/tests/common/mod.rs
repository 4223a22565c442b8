//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use airroute_lib::{
    build_graph, load_graph, EdgeRecord, Graph, GraphBuildOptions, NodeId, RouteColumns,
};

/// Path to the fixtures directory shared by the workspace.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Build a graph from `(source, destination, weight)` triples.
#[allow(dead_code)]
pub fn graph_from(edges: &[(&str, &str, f64)], options: &GraphBuildOptions) -> Graph {
    build_graph(
        edges
            .iter()
            .map(|&(source, destination, weight)| EdgeRecord::new(source, destination, weight)),
        options,
    )
    .expect("fixture edges are valid")
}

/// Scenario graph: A-B:1, B-C:2, A-C:5 (undirected).
#[allow(dead_code)]
pub fn triangle() -> Graph {
    graph_from(
        &[("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 5.0)],
        &GraphBuildOptions::undirected(),
    )
}

/// Scenario graph: A-B:1, A-C:1, B-D:1, C-D:1, A-D:10 (undirected).
#[allow(dead_code)]
pub fn diamond() -> Graph {
    graph_from(
        &[
            ("A", "B", 1.0),
            ("A", "C", 1.0),
            ("B", "D", 1.0),
            ("C", "D", 1.0),
            ("A", "D", 10.0),
        ],
        &GraphBuildOptions::undirected(),
    )
}

/// The flight-routes fixture with precomputed distances.
#[allow(dead_code)]
pub fn flight_graph(options: &GraphBuildOptions) -> Graph {
    load_graph(
        &fixtures_dir().join("flight_routes_distance.csv"),
        &RouteColumns::default(),
        options,
    )
    .expect("fixture loads")
}

#[allow(dead_code)]
pub fn nodes(names: &[&str]) -> Vec<NodeId> {
    names.iter().map(|name| name.to_string()).collect()
}

#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
