mod common;

use std::thread;

use airroute_lib::{
    alternative_paths, plan_route, shortest_path, Error, GraphBuildOptions, RouteAlgorithm,
    RouteRequest, RouteSummary,
};

use common::{diamond, flight_graph, nodes, triangle};

#[test]
fn dijkstra_route_plan_succeeds() {
    let graph = triangle();
    let plan = plan_route(&graph, &RouteRequest::dijkstra("A", "C")).expect("route exists");

    assert_eq!(plan.algorithm, RouteAlgorithm::Dijkstra);
    assert_eq!(plan.routes.len(), 1);
    assert_eq!(plan.best().path, nodes(&["A", "B", "C"]));
    assert_eq!(plan.best().distance, 3.0);
}

#[test]
fn bfs_route_plan_lists_alternatives() {
    let graph = diamond();
    let plan = plan_route(&graph, &RouteRequest::bfs("A", "D", 3)).expect("routes exist");

    assert_eq!(plan.algorithm, RouteAlgorithm::Bfs);
    assert_eq!(plan.routes.len(), 3);
    assert_eq!(plan.best().distance, 2.0);
}

#[test]
fn unknown_node_includes_suggestions() {
    let graph = flight_graph(&GraphBuildOptions::default());
    let error = plan_route(&graph, &RouteRequest::dijkstra("Heathrw", "Narita"))
        .expect_err("should fail with unknown node");

    let message = error.to_string();
    assert!(message.contains("unknown node: Heathrw"));
    assert!(message.contains("Did you mean"));
    assert!(message.contains("Heathrow"));
}

#[test]
fn disconnected_plan_is_route_not_found() {
    let graph = flight_graph(&GraphBuildOptions::default());
    let error = plan_route(
        &graph,
        &RouteRequest::dijkstra("Heathrow", "Svalbard Longyear"),
    )
    .expect_err("different components");

    assert!(matches!(error, Error::RouteNotFound { .. }));
    assert!(error.to_string().contains("no route found"));
}

#[test]
fn zero_alternatives_is_an_invalid_request() {
    let graph = triangle();
    let error = plan_route(&graph, &RouteRequest::bfs("A", "C", 0))
        .expect_err("connected nodes but nothing requested");

    assert!(matches!(error, Error::InvalidRequest { .. }));
    assert_eq!(
        error.to_string(),
        "invalid route request: bfs needs at least one alternative"
    );

    // Dijkstra ignores the alternatives count.
    let request = RouteRequest {
        alternatives: 0,
        ..RouteRequest::dijkstra("A", "C")
    };
    assert!(plan_route(&graph, &request).is_ok());
}

#[test]
fn summary_serialises_to_json() {
    let graph = triangle();
    let plan = plan_route(&graph, &RouteRequest::bfs("A", "C", 2)).unwrap();
    let summary = RouteSummary::from_plan(&plan);

    let value = serde_json::to_value(&summary).expect("serialisable");
    assert_eq!(value["algorithm"], "bfs");
    assert_eq!(value["routes"][0]["rank"], 1);
    assert_eq!(value["routes"][0]["steps"][1], "B");
    assert_eq!(value["routes"][1]["distance"], 5.0);
}

#[test]
fn concurrent_queries_share_one_graph() {
    let graph = flight_graph(&GraphBuildOptions::default());

    thread::scope(|scope| {
        let shortest = scope.spawn(|| {
            shortest_path(&graph, "Heathrow", "Narita")
                .unwrap()
                .into_route()
                .unwrap()
        });
        let alternatives =
            scope.spawn(|| alternative_paths(&graph, "Heathrow", "Narita", 3).unwrap());

        let shortest = shortest.join().unwrap();
        let alternatives = alternatives.join().unwrap();
        assert_eq!(alternatives[0].path, shortest.path);
        assert_eq!(alternatives[0].distance, shortest.distance);
    });
}
