mod common;

use airroute_lib::{
    path_distance, shortest_distances, shortest_path, Error, GraphBuildOptions, ShortestPath,
};

use common::{assert_close, flight_graph, graph_from, nodes, triangle};

#[test]
fn prefers_lighter_two_hop_path() {
    let graph = triangle();
    let result = shortest_path(&graph, "A", "C").expect("known nodes");

    let route = result.route().expect("path exists");
    assert_eq!(route.path, nodes(&["A", "B", "C"]));
    assert_eq!(route.distance, 3.0);
}

#[test]
fn unknown_destination_is_an_error() {
    let graph = triangle();

    match shortest_path(&graph, "A", "D") {
        Err(Error::UnknownNode { name, .. }) => assert_eq!(name, "D"),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(matches!(
        shortest_path(&graph, "Z", "A"),
        Err(Error::UnknownNode { .. })
    ));
}

#[test]
fn disconnected_nodes_are_not_found() {
    let graph = graph_from(
        &[("A", "X", 1.0), ("B", "Y", 1.0)],
        &GraphBuildOptions::undirected(),
    );

    let result = shortest_path(&graph, "A", "B").expect("known nodes");
    assert_eq!(result, ShortestPath::NotFound);
    assert!(!result.is_found());
    assert_eq!(result.distance(), f64::INFINITY);
}

#[test]
fn source_equals_destination() {
    let graph = triangle();
    let result = shortest_path(&graph, "B", "B").expect("known node");

    let route = result.into_route().expect("trivial path");
    assert_eq!(route.path, nodes(&["B"]));
    assert_eq!(route.distance, 0.0);
    assert_eq!(route.hop_count(), 0);
}

#[test]
fn directed_edges_are_one_way() {
    let graph = graph_from(
        &[("A", "B", 1.0), ("B", "C", 1.0), ("C", "A", 1.0)],
        &GraphBuildOptions::directed(),
    );

    let forward = shortest_path(&graph, "A", "C").unwrap();
    assert_eq!(forward.distance(), 2.0);

    let backward = shortest_path(&graph, "C", "B").unwrap();
    assert_eq!(backward.route().unwrap().path, nodes(&["C", "A", "B"]));
}

#[test]
fn zero_weight_edges_are_usable() {
    let graph = graph_from(
        &[("A", "B", 0.0), ("B", "C", 0.0), ("A", "C", 0.5)],
        &GraphBuildOptions::undirected(),
    );

    let result = shortest_path(&graph, "A", "C").unwrap();
    assert_eq!(result.distance(), 0.0);
    assert_eq!(result.route().unwrap().path, nodes(&["A", "B", "C"]));
}

#[test]
fn reported_distance_matches_evaluated_path() {
    let graph = flight_graph(&GraphBuildOptions::undirected());
    let names: Vec<String> = graph.nodes().cloned().collect();

    for source in &names {
        for destination in &names {
            let result = shortest_path(&graph, source, destination).unwrap();
            if let ShortestPath::Found(route) = result {
                assert_eq!(route.path.first(), Some(source));
                assert_eq!(route.path.last(), Some(destination));
                let evaluated = path_distance(&graph, &route.path).unwrap();
                assert_eq!(evaluated, route.distance, "{source} -> {destination}");
            }
        }
    }
}

#[test]
fn no_relaxation_is_pending_after_search() {
    let graph = flight_graph(&GraphBuildOptions::undirected());
    let distances = shortest_distances(&graph, "Heathrow").unwrap();

    assert_eq!(distances["Heathrow"], 0.0);
    for node in graph.nodes() {
        let here = distances[node];
        if here.is_infinite() {
            continue;
        }
        for (neighbour, weight) in graph.neighbours(node) {
            assert!(
                distances[neighbour] <= here + weight + 1e-9,
                "{neighbour} could still be improved via {node}"
            );
        }
    }

    assert_eq!(distances["Svalbard Longyear"], f64::INFINITY);
}

#[test]
fn flight_fixture_routes() {
    let graph = flight_graph(&GraphBuildOptions::undirected());

    let result = shortest_path(&graph, "Heathrow", "Sydney Kingsford Smith").unwrap();
    let route = result.route().expect("connected");
    assert_eq!(
        route.path,
        nodes(&["Heathrow", "Frankfurt am Main", "Changi", "Sydney Kingsford Smith"])
    );
    assert_close(route.distance, 17_227.457878353584);

    let result = shortest_path(&graph, "John F Kennedy", "Narita").unwrap();
    assert_eq!(
        result.route().unwrap().path,
        nodes(&["John F Kennedy", "Los Angeles International", "Narita"])
    );
    assert_close(result.distance(), 12_728.010068004109);

    let result = shortest_path(&graph, "Heathrow", "Svalbard Longyear").unwrap();
    assert_eq!(result, ShortestPath::NotFound);
}

#[test]
fn directed_flight_fixture_respects_one_way_route() {
    let graph = flight_graph(&GraphBuildOptions::directed());

    let outbound = shortest_path(&graph, "Frankfurt am Main", "Changi").unwrap();
    assert_eq!(outbound.route().unwrap().hop_count(), 1);

    let inbound = shortest_path(&graph, "Changi", "Frankfurt am Main").unwrap();
    assert!(inbound.route().unwrap().hop_count() > 1);
}

#[test]
fn larger_grid_graph() {
    // 40 x 40 grid with unit horizontal edges and heavier vertical edges.
    let size = 40;
    let mut edges = Vec::new();
    let names: Vec<Vec<String>> = (0..size)
        .map(|row| (0..size).map(|col| format!("{row}:{col}")).collect())
        .collect();
    for row in 0..size {
        for col in 0..size {
            if col + 1 < size {
                edges.push((names[row][col].as_str(), names[row][col + 1].as_str(), 1.0));
            }
            if row + 1 < size {
                edges.push((names[row][col].as_str(), names[row + 1][col].as_str(), 2.0));
            }
        }
    }
    let graph = graph_from(&edges, &GraphBuildOptions::undirected());

    let result = shortest_path(&graph, "0:0", "39:39").unwrap();
    assert_eq!(result.distance(), 39.0 + 39.0 * 2.0);
    assert_eq!(result.route().unwrap().hop_count(), 78);
}
