//! Single-source shortest paths
//!
//! Provides shortest-path algorithms over a small, immutable directed graph:
//! - BFS for unweighted graphs
//! - Dijkstra for non-negative weights
//! - Bellman-Ford for arbitrary weights, with negative-cycle detection
//! - A dispatcher that picks the cheapest valid algorithm
//! - Graph file loading for the CLI

pub mod algos;
pub mod dispatch;
pub mod file;
pub mod model;
pub mod types;

pub use dispatch::{find_shortest_distance, select_algorithm, shortest_distances};
pub use file::{load_graph, EdgeEntry, GraphFile};
pub use model::{Graph, GraphError};
pub use types::{
    Algorithm, Distance, NodeDistance, NodeId, ShortestPaths, Weight, INFINITY, MAX_NODE_ID,
    UNIT_WEIGHT,
};
