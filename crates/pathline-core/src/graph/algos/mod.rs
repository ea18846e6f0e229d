//! Graph algorithm implementations
//!
//! Contains concrete implementations of single-source shortest paths:
//! - `bfs`: Breadth-first search over unit-weight edges
//! - `dijkstra`: Priority-frontier search for non-negative weights
//! - `bellman_ford`: Edge relaxation passes with negative-cycle detection
//! - `shared`: Relaxation helpers used by the weighted algorithms
//!
//! Every algorithm writes into a caller-owned distance buffer indexed by node id.

pub mod bellman_ford;
pub mod bfs;
pub mod dijkstra;
pub mod shared;

pub use bellman_ford::bellman_ford;
pub use bfs::bfs;
pub use dijkstra::dijkstra;
pub use shared::{relax, relaxed_distance};
