use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Identifier for a node (airport label) within a [`Graph`].
pub type NodeId = String;

/// Minimum similarity score for a node name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Whether the graph mirrors each edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphMode {
    /// Every record inserts both `source -> destination` and the reverse edge.
    #[default]
    Undirected,
    /// Records only insert `source -> destination`.
    Directed,
}

/// What the builder does with a record it cannot turn into an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedRecordPolicy {
    /// Log the record, count it, and keep building.
    #[default]
    Skip,
    /// Stop the build and return the error.
    Abort,
}

/// Options controlling graph construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphBuildOptions {
    pub mode: GraphMode,
    pub on_malformed: MalformedRecordPolicy,
}

impl GraphBuildOptions {
    pub fn directed() -> Self {
        Self {
            mode: GraphMode::Directed,
            ..Self::default()
        }
    }

    pub fn undirected() -> Self {
        Self::default()
    }

    /// Switch to fail-fast handling of malformed records.
    pub fn strict(mut self) -> Self {
        self.on_malformed = MalformedRecordPolicy::Abort;
        self
    }
}

/// A single connection between two nodes as delivered by a record source.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub destination: NodeId,
    pub weight: f64,
    /// Directedness reported by the source, if any. Informational only: the
    /// graph-level [`GraphMode`] decides whether edges are mirrored.
    pub directed: Option<bool>,
}

impl EdgeRecord {
    pub fn new(source: impl Into<NodeId>, destination: impl Into<NodeId>, weight: f64) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            weight,
            directed: None,
        }
    }
}

type Adjacency = HashMap<NodeId, HashMap<NodeId, f64>>;

/// Weighted adjacency structure used by the pathfinding engines.
///
/// Every node that appeared as the source or destination of an accepted
/// record is a key, even when it has no outgoing edges. Weights are finite and
/// non-negative. In [`GraphMode::Undirected`] every edge `(u, v, w)` has a
/// mirror `(v, u, w)`.
///
/// The graph cannot be mutated once built; clones share the same adjacency.
#[derive(Debug, Clone)]
pub struct Graph {
    mode: GraphMode,
    adjacency: Arc<Adjacency>,
}

impl Graph {
    /// Mode the graph was built with.
    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    /// Whether `node` is known to the graph.
    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Neighbours of `node` with the weight of the connecting edge. Unknown
    /// nodes have no neighbours.
    pub fn neighbours<'a>(&'a self, node: &str) -> impl Iterator<Item = (&'a NodeId, f64)> + 'a {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(target, weight)| (target, *weight)))
    }

    /// Weight of the edge `from -> to`, if present.
    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        self.adjacency
            .get(from)
            .and_then(|edges| edges.get(to))
            .copied()
    }

    /// Iterate over every known node.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.adjacency.keys()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of adjacency entries. An undirected connection counts twice.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Node names that look similar to `name`, best match first.
    pub fn suggest(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &NodeId)> = self
            .adjacency
            .keys()
            .map(|node| (strsim::jaro_winkler(&needle, &node.to_lowercase()), node))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });
        scored
            .into_iter()
            .take(limit)
            .map(|(_, node)| node.clone())
            .collect()
    }

    /// Resolve `node` to the graph's own key, or fail with
    /// [`Error::UnknownNode`] carrying close matches.
    pub(crate) fn require(&self, node: &str) -> Result<&str> {
        match self.adjacency.get_key_value(node) {
            Some((key, _)) => Ok(key.as_str()),
            None => Err(Error::UnknownNode {
                name: node.to_string(),
                suggestions: self.suggest(node, 3),
            }),
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            mode: GraphMode::Undirected,
            adjacency: Arc::new(HashMap::new()),
        }
    }
}

/// Incremental graph construction.
///
/// Records are validated as they arrive; what happens to a malformed record
/// depends on [`GraphBuildOptions::on_malformed`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    options: GraphBuildOptions,
    adjacency: Adjacency,
    accepted: usize,
    skipped: usize,
}

impl GraphBuilder {
    pub fn new(options: GraphBuildOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Add a record to the graph.
    ///
    /// Returns an error only when the record is malformed and the policy is
    /// [`MalformedRecordPolicy::Abort`].
    pub fn insert(&mut self, record: EdgeRecord) -> Result<()> {
        if !record.weight.is_finite() || record.weight < 0.0 {
            return self.reject(Error::MalformedRecord {
                line: None,
                message: format!(
                    "weight {} for {} -> {} is not a non-negative finite number",
                    record.weight, record.source, record.destination
                ),
            });
        }

        if record.directed == Some(true) && self.options.mode == GraphMode::Undirected {
            debug!(
                source = %record.source,
                destination = %record.destination,
                "one-way record mirrored because the graph is undirected"
            );
        }

        let EdgeRecord {
            source,
            destination,
            weight,
            ..
        } = record;

        self.adjacency
            .entry(destination.clone())
            .or_default();
        self.adjacency
            .entry(source.clone())
            .or_default()
            .insert(destination.clone(), weight);

        if self.options.mode == GraphMode::Undirected {
            self.adjacency
                .entry(destination)
                .or_default()
                .insert(source, weight);
        }

        self.accepted += 1;
        Ok(())
    }

    /// Route a failure produced upstream of the builder (for example a CSV
    /// row that could not be parsed) through the malformed-record policy.
    pub fn reject(&mut self, error: Error) -> Result<()> {
        match self.options.on_malformed {
            MalformedRecordPolicy::Abort => Err(error),
            MalformedRecordPolicy::Skip => {
                warn!(%error, "skipping malformed record");
                self.skipped += 1;
                Ok(())
            }
        }
    }

    /// Insert every record from `records`.
    pub fn extend<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        for record in records {
            self.insert(record)?;
        }
        Ok(())
    }

    /// Number of records rejected so far under the skip policy.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn finish(self) -> Graph {
        let graph = Graph {
            mode: self.options.mode,
            adjacency: Arc::new(self.adjacency),
        };
        debug!(
            mode = ?graph.mode,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            accepted = self.accepted,
            skipped = self.skipped,
            "graph built"
        );
        graph
    }
}

/// Build a graph from a sequence of edge records.
pub fn build_graph<I>(records: I, options: &GraphBuildOptions) -> Result<Graph>
where
    I: IntoIterator<Item = EdgeRecord>,
{
    let mut builder = GraphBuilder::new(*options);
    builder.extend(records)?;
    Ok(builder.finish())
}
