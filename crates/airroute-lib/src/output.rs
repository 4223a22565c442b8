use std::fmt::Write;

use serde::Serialize;

use crate::graph::NodeId;
use crate::routing::{RouteAlgorithm, RoutePlan};

/// One ranked route in a [`RouteSummary`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteEntry {
    pub rank: usize,
    pub hops: usize,
    pub distance: f64,
    pub steps: Vec<NodeId>,
}

/// Structured representation of a route plan that higher-level consumers can
/// serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub start: NodeId,
    pub goal: NodeId,
    pub routes: Vec<RouteEntry>,
}

impl RouteSummary {
    pub fn from_plan(plan: &RoutePlan) -> Self {
        let routes = plan
            .routes
            .iter()
            .enumerate()
            .map(|(index, route)| RouteEntry {
                rank: index + 1,
                hops: route.hop_count(),
                distance: route.distance,
                steps: route.path.clone(),
            })
            .collect();

        Self {
            algorithm: plan.algorithm,
            start: plan.start.clone(),
            goal: plan.goal.clone(),
            routes,
        }
    }

    /// Human-readable rendering with one block per route.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route from {} to {} (algorithm: {})",
            self.start, self.goal, self.algorithm
        );
        for entry in &self.routes {
            let _ = writeln!(
                buffer,
                "\n#{} {:.2} km, {} {}",
                entry.rank,
                entry.distance,
                entry.hops,
                if entry.hops == 1 { "hop" } else { "hops" }
            );
            for (index, step) in entry.steps.iter().enumerate() {
                let marker = if index == 0 {
                    '+'
                } else if index + 1 == entry.steps.len() {
                    '-'
                } else {
                    '|'
                };
                let _ = writeln!(buffer, "  {marker} {step}");
            }
        }
        buffer
    }
}
