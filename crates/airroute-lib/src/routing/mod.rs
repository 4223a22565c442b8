//! Route planning on top of the pathfinding engines.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported search algorithms (Dijkstra, bounded BFS)
//! - [`RouteRequest`] - High-level route planning request
//! - [`RoutePlan`] - Planned routes, verified against the graph
//! - [`plan_route`] - Main entry point for computing routes
//!
//! # Example
//!
//! ```ignore
//! use airroute_lib::{load_graph, plan_route, GraphBuildOptions, RouteColumns, RouteRequest};
//!
//! let graph = load_graph(path, &RouteColumns::default(), &GraphBuildOptions::default())?;
//! let plan = plan_route(&graph, &RouteRequest::dijkstra("Heathrow", "Narita"))?;
//! println!("{} km", plan.best().distance);
//! ```

mod planner;

pub use planner::{select_planner, BfsPlanner, DijkstraPlanner, RoutePlanner};

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::distance::path_distance;
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::path::Route;

/// Number of routes the BFS planner collects unless told otherwise.
pub const DEFAULT_ALTERNATIVES: usize = 3;

/// Tolerance when comparing a reported distance with a recomputed one.
const DISTANCE_EPSILON: f64 = 1e-9;

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Dijkstra's algorithm (single lowest-weight route).
    #[default]
    Dijkstra,
    /// Bounded breadth-first enumeration of alternative routes.
    Bfs,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::Bfs => "bfs",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: RouteAlgorithm,
    /// Maximum number of routes for [`RouteAlgorithm::Bfs`]. Must be at least
    /// 1 for BFS requests; [`plan_route`] rejects 0 with
    /// [`Error::InvalidRequest`].
    pub alternatives: usize,
}

impl RouteRequest {
    /// Convenience constructor for a Dijkstra shortest route.
    pub fn dijkstra(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::Dijkstra,
            alternatives: DEFAULT_ALTERNATIVES,
        }
    }

    /// Convenience constructor for up to `alternatives` BFS routes.
    pub fn bfs(start: impl Into<String>, goal: impl Into<String>, alternatives: usize) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::Bfs,
            alternatives,
        }
    }
}

/// Planned routes returned by the library, best first. Never empty.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: NodeId,
    pub goal: NodeId,
    pub routes: Vec<Route>,
}

impl RoutePlan {
    /// The lowest-weight route of the plan.
    pub fn best(&self) -> &Route {
        &self.routes[0]
    }
}

/// Compute routes using the requested algorithm.
///
/// Unknown endpoints fail with [`Error::UnknownNode`]; endpoints that are not
/// connected fail with [`Error::RouteNotFound`]. A BFS request for zero
/// alternatives fails with [`Error::InvalidRequest`]. Every route is
/// re-measured against the graph before it is returned.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    if request.algorithm == RouteAlgorithm::Bfs && request.alternatives == 0 {
        return Err(Error::InvalidRequest {
            message: "bfs needs at least one alternative".to_string(),
        });
    }

    let planner = select_planner(request);
    let routes = planner.find_routes(graph, &request.start, &request.goal)?;

    if routes.is_empty() {
        return Err(Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        });
    }

    for route in &routes {
        verify_route(graph, route)?;
    }

    debug!(
        algorithm = %planner.algorithm(),
        routes = routes.len(),
        best = routes[0].distance,
        "route planned"
    );

    Ok(RoutePlan {
        algorithm: planner.algorithm(),
        start: request.start.clone(),
        goal: request.goal.clone(),
        routes,
    })
}

fn verify_route(graph: &Graph, route: &Route) -> Result<()> {
    let measured = path_distance(graph, &route.path)?;
    if (measured - route.distance).abs() > DISTANCE_EPSILON {
        warn!(
            reported = route.distance,
            measured, "route distance differs from recomputed distance"
        );
    }
    Ok(())
}
