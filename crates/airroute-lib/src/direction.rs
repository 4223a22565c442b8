//! Classification of connection data into one-way and two-way links.
//!
//! Flight-route datasets usually list both directions of a route, but not
//! always. Knowing which is the case tells the caller whether the graph should
//! be built undirected or directed.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::graph::GraphMode;

/// Overall shape of a set of connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionKind {
    /// No connections were seen.
    Empty,
    /// Every connection only exists in one direction.
    OneWayOnly,
    /// Every connection exists in both directions.
    TwoWayOnly,
    /// Some connections are one-way, some are two-way.
    Mixed,
}

impl fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            ConnectionKind::Empty => "no connections",
            ConnectionKind::OneWayOnly => "only one-way connections",
            ConnectionKind::TwoWayOnly => "only two-way connections",
            ConnectionKind::Mixed => "a mixture of one-way and two-way connections",
        };
        f.write_str(value)
    }
}

/// Counts of one-way and two-way links between distinct node pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DirectionReport {
    one_way: usize,
    two_way: usize,
}

impl DirectionReport {
    /// Tally the ordered `(source, destination)` pairs. Duplicate pairs are
    /// counted once; a pair whose reverse is also present forms one two-way
    /// link.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let owned: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(from, to)| (from.as_ref().to_string(), to.as_ref().to_string()))
            .collect();
        let seen: HashSet<(&str, &str)> = owned
            .iter()
            .map(|(from, to)| (from.as_str(), to.as_str()))
            .collect();

        let mut report = Self::default();
        for &(from, to) in &seen {
            if seen.contains(&(to, from)) {
                // Each two-way pair is visited from both ends; count it once.
                // Self-loops are their own reverse.
                if from <= to {
                    report.two_way += 1;
                }
            } else {
                report.one_way += 1;
            }
        }
        report
    }

    pub fn one_way(&self) -> usize {
        self.one_way
    }

    pub fn two_way(&self) -> usize {
        self.two_way
    }

    pub fn classify(&self) -> ConnectionKind {
        match (self.one_way, self.two_way) {
            (0, 0) => ConnectionKind::Empty,
            (_, 0) => ConnectionKind::OneWayOnly,
            (0, _) => ConnectionKind::TwoWayOnly,
            _ => ConnectionKind::Mixed,
        }
    }

    /// Graph mode that preserves the data faithfully: undirected only when no
    /// one-way links exist.
    pub fn recommended_mode(&self) -> GraphMode {
        if self.one_way == 0 {
            GraphMode::Undirected
        } else {
            GraphMode::Directed
        }
    }
}
