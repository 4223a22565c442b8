//! airroute library entry points.
//!
//! This crate turns flight-route records into a weighted graph and runs
//! pathfinding over it: Dijkstra for the single shortest route and a bounded
//! breadth-first search for alternatives. Higher-level consumers (the CLI)
//! should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod direction;
pub mod distance;
pub mod error;
pub mod geo;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;

pub use dataset::{
    annotate_distances, build_graph_from_csv, load_graph, read_connections, read_edge_records,
    RouteColumns,
};
pub use direction::{ConnectionKind, DirectionReport};
pub use distance::path_distance;
pub use error::{Error, Result};
pub use geo::{haversine_km, Coordinates};
pub use graph::{
    build_graph, EdgeRecord, Graph, GraphBuildOptions, GraphBuilder, GraphMode,
    MalformedRecordPolicy, NodeId,
};
pub use output::{RouteEntry, RouteSummary};
pub use path::{alternative_paths, shortest_distances, shortest_path, Route, ShortestPath};
pub use routing::{plan_route, RouteAlgorithm, RoutePlan, RouteRequest};
