//! Route planning strategies implementing the Strategy pattern.
//!
//! This module provides the `RoutePlanner` trait and one implementation per
//! search algorithm. `plan_route` only talks to the trait, so adding an
//! algorithm does not touch the orchestration logic.

use crate::error::Result;
use crate::graph::Graph;
use crate::path::{alternative_paths, shortest_path, Route};

use super::{RouteAlgorithm, RouteRequest};

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the search on the given graph.
    ///
    /// Returns the routes found, best first. An empty vector means the
    /// endpoints are not connected.
    fn find_routes(&self, graph: &Graph, start: &str, goal: &str) -> Result<Vec<Route>>;
}

/// Dijkstra planner returning the single lowest-weight route.
#[derive(Debug, Clone, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_routes(&self, graph: &Graph, start: &str, goal: &str) -> Result<Vec<Route>> {
        Ok(shortest_path(graph, start, goal)?
            .into_route()
            .into_iter()
            .collect())
    }
}

/// Breadth-first planner returning up to `limit` simple routes ranked by
/// weight.
///
/// The routes are the first ones breadth-first expansion reaches, so they lean
/// towards few hops and are not guaranteed to be the globally lightest.
#[derive(Debug, Clone)]
pub struct BfsPlanner {
    limit: usize,
}

impl BfsPlanner {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Default for BfsPlanner {
    fn default() -> Self {
        Self::new(super::DEFAULT_ALTERNATIVES)
    }
}

impl RoutePlanner for BfsPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Bfs
    }

    fn find_routes(&self, graph: &Graph, start: &str, goal: &str) -> Result<Vec<Route>> {
        alternative_paths(graph, start, goal, self.limit)
    }
}

/// Select the planner matching the request's algorithm.
pub fn select_planner(request: &RouteRequest) -> Box<dyn RoutePlanner> {
    match request.algorithm {
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
        RouteAlgorithm::Bfs => Box::new(BfsPlanner::new(request.alternatives)),
    }
}
