use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PathlineError;

/// Node identifier; doubles as the index into a distance buffer
pub type NodeId = usize;

/// Edge weight (may be negative)
pub type Weight = i64;

/// Accumulated path length
pub type Distance = i64;

/// Sentinel for "no finite distance known"
pub const INFINITY: Distance = Distance::MAX;

/// Highest node identifier a distance buffer will be sized for
pub const MAX_NODE_ID: NodeId = 1 << 20;

/// Weight of an edge that has no entry in the weight mapping
pub const UNIT_WEIGHT: Weight = 1;

/// Shortest-path algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Breadth-first search; every edge counts as one hop
    Bfs,
    /// Dijkstra; requires non-negative weights
    Dijkstra,
    /// Bellman-Ford; any sign, reports negative cycles
    BellmanFord,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dijkstra, Algorithm::BellmanFord];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::BellmanFord => "bellman-ford",
        }
    }
}

impl FromStr for Algorithm {
    type Err = PathlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bellman-ford" | "bellman_ford" | "bellmanford" => Ok(Algorithm::BellmanFord),
            other => Err(PathlineError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distance to one node in a [`ShortestPaths`] report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDistance {
    pub node: NodeId,
    /// `None` when the node is unreachable from the source
    pub distance: Option<Distance>,
}

/// Owned result of a single-source shortest-path query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    pub source: NodeId,
    pub algorithm: Algorithm,
    /// Set only by Bellman-Ford; distances near the cycle are meaningless when true
    pub negative_cycle: bool,
    /// One entry per graph node, in node insertion order
    pub distances: Vec<NodeDistance>,
}

impl ShortestPaths {
    /// Distance to `node`, `None` if unreachable or not in the graph
    pub fn distance_to(&self, node: NodeId) -> Option<Distance> {
        self.distances
            .iter()
            .find(|entry| entry.node == node)
            .and_then(|entry| entry.distance)
    }
}

/// Convert a raw buffer value into a reportable distance
pub fn finite(distance: Distance) -> Option<Distance> {
    (distance != INFINITY).then_some(distance)
}
