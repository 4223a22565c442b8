use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use serde::Serialize;

use crate::distance::path_distance;
use crate::error::Result;
use crate::graph::{Graph, NodeId};

/// A path through the graph together with its total weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub path: Vec<NodeId>,
    pub distance: f64,
}

impl Route {
    /// Number of edges in the route.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Outcome of a shortest-path query.
///
/// `NotFound` is a regular result for disconnected nodes, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ShortestPath {
    Found(Route),
    NotFound,
}

impl ShortestPath {
    /// Total distance, or infinity when no path exists.
    pub fn distance(&self) -> f64 {
        match self {
            ShortestPath::Found(route) => route.distance,
            ShortestPath::NotFound => f64::INFINITY,
        }
    }

    pub fn route(&self) -> Option<&Route> {
        match self {
            ShortestPath::Found(route) => Some(route),
            ShortestPath::NotFound => None,
        }
    }

    pub fn into_route(self) -> Option<Route> {
        match self {
            ShortestPath::Found(route) => Some(route),
            ShortestPath::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ShortestPath::Found(_))
    }
}

/// Find the lowest-weight path from `source` to `destination` with
/// Dijkstra's algorithm.
///
/// Both endpoints must be known to the graph. The search stops as soon as the
/// destination is popped from the queue; weights are non-negative so its
/// distance is final at that point.
pub fn shortest_path(graph: &Graph, source: &str, destination: &str) -> Result<ShortestPath> {
    let source = graph.require(source)?;
    let destination = graph.require(destination)?;

    let mut search = DijkstraSearch::new(graph, source);
    let Some(distance) = search.run_until(Some(destination)) else {
        return Ok(ShortestPath::NotFound);
    };

    Ok(ShortestPath::Found(Route {
        path: search.reconstruct(destination),
        distance,
    }))
}

/// Distances from `source` to every known node. Unreachable nodes map to
/// infinity.
pub fn shortest_distances(graph: &Graph, source: &str) -> Result<HashMap<NodeId, f64>> {
    let source = graph.require(source)?;

    let mut search = DijkstraSearch::new(graph, source);
    search.run_until(None);
    Ok(search
        .distances
        .into_iter()
        .map(|(node, distance)| (node.to_string(), distance))
        .collect())
}

/// Enumerate up to `k` simple paths from `source` to `destination` using
/// breadth-first expansion, then rank them by total weight.
///
/// Paths are recorded in the order plain BFS reaches the destination, which
/// favours paths with fewer hops. The result is the lowest-weight ordering of
/// that discovered subset and is not guaranteed to contain the `k` globally
/// lightest simple paths. Paths of equal weight keep their discovery order.
pub fn alternative_paths(
    graph: &Graph,
    source: &str,
    destination: &str,
    k: usize,
) -> Result<Vec<Route>> {
    let source = graph.require(source)?;
    let destination = graph.require(destination)?;

    // An unreachable destination would otherwise enumerate every simple path
    // in the source's component.
    if k == 0 || !is_reachable(graph, source, destination) {
        return Ok(Vec::new());
    }

    let mut found: Vec<Vec<&str>> = Vec::new();
    let mut queue: VecDeque<(&str, Vec<&str>)> = VecDeque::new();
    queue.push_back((source, vec![source]));

    while found.len() < k {
        let Some((current, path)) = queue.pop_front() else {
            break;
        };

        if current == destination {
            found.push(path);
            continue;
        }

        for next in sorted_neighbours(graph, current) {
            if path.contains(&next) {
                continue;
            }
            let mut extended = Vec::with_capacity(path.len() + 1);
            extended.extend_from_slice(&path);
            extended.push(next);
            queue.push_back((next, extended));
        }
    }

    let mut routes = found
        .into_iter()
        .map(|nodes| {
            let path: Vec<NodeId> = nodes.into_iter().map(str::to_string).collect();
            let distance = path_distance(graph, &path)?;
            Ok(Route { path, distance })
        })
        .collect::<Result<Vec<_>>>()?;

    routes.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    Ok(routes)
}

fn is_reachable(graph: &Graph, source: &str, destination: &str) -> bool {
    let mut visited: HashSet<&str> = HashSet::from([source]);
    let mut frontier: VecDeque<&str> = VecDeque::from([source]);
    while let Some(current) = frontier.pop_front() {
        if current == destination {
            return true;
        }
        for (next, _) in graph.neighbours(current) {
            if visited.insert(next.as_str()) {
                frontier.push_back(next.as_str());
            }
        }
    }
    false
}

/// Neighbour ids in lexicographic order so BFS discovery is reproducible.
fn sorted_neighbours<'a>(graph: &'a Graph, node: &str) -> Vec<&'a str> {
    let mut neighbours: Vec<&str> = graph
        .neighbours(node)
        .map(|(target, _)| target.as_str())
        .collect();
    neighbours.sort_unstable();
    neighbours
}

/// Transient state of one Dijkstra query.
struct DijkstraSearch<'g> {
    graph: &'g Graph,
    source: &'g str,
    distances: HashMap<&'g str, f64>,
    parents: HashMap<&'g str, &'g str>,
    queue: BinaryHeap<QueueEntry<'g>>,
}

impl<'g> DijkstraSearch<'g> {
    fn new(graph: &'g Graph, source: &'g str) -> Self {
        let mut distances: HashMap<&str, f64> = graph
            .nodes()
            .map(|node| (node.as_str(), f64::INFINITY))
            .collect();
        distances.insert(source, 0.0);

        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry::new(source, 0.0));

        Self {
            graph,
            source,
            distances,
            parents: HashMap::new(),
            queue,
        }
    }

    /// Relax edges until `goal` is settled or the queue runs dry. Returns the
    /// goal's distance when it was reached.
    fn run_until(&mut self, goal: Option<&str>) -> Option<f64> {
        let graph = self.graph;
        while let Some(entry) = self.queue.pop() {
            let best = self.distance(entry.node);
            if entry.cost.0 > best {
                continue;
            }

            if goal == Some(entry.node) {
                return Some(best);
            }

            for (next, weight) in graph.neighbours(entry.node) {
                let candidate = best + weight;
                if candidate < self.distance(next) {
                    self.distances.insert(next.as_str(), candidate);
                    self.parents.insert(next.as_str(), entry.node);
                    self.queue.push(QueueEntry::new(next.as_str(), candidate));
                }
            }
        }

        None
    }

    fn distance(&self, node: &str) -> f64 {
        self.distances.get(node).copied().unwrap_or(f64::INFINITY)
    }

    fn reconstruct(&self, goal: &str) -> Vec<NodeId> {
        let mut path = vec![goal.to_string()];
        let mut current = goal;
        while current != self.source {
            match self.parents.get(current) {
                Some(parent) => {
                    path.push(parent.to_string());
                    current = *parent;
                }
                None => break,
            }
        }
        path.reverse();
        path
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'g> {
    node: &'g str,
    cost: FloatOrd,
}

impl<'g> QueueEntry<'g> {
    fn new(node: &'g str, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
