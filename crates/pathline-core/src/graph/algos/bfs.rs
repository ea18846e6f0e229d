use crate::graph::types::{Distance, NodeId};
use crate::graph::Graph;
use std::collections::{HashSet, VecDeque};

/// Perform a breadth-first search from `source`, counting every edge as one hop.
///
/// Sets `distances[source]` to 0 and every newly discovered node to its
/// parent's distance plus one. A node is marked visited when it is first
/// assigned, so it is enqueued at most once. Weights are ignored and entries
/// for unreached nodes are left as the caller initialised them.
#[tracing::instrument(skip(graph, distances), fields(nodes = graph.node_count(), edges = graph.edges().len()))]
pub fn bfs(graph: &Graph, source: NodeId, distances: &mut [Distance]) {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    distances[source] = 0;
    visited.insert(source);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let next_distance = distances[current] + 1;

        for &(neighbor, _) in graph.outgoing(current) {
            if visited.insert(neighbor) {
                distances[neighbor] = next_distance;
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!(reached = visited.len(), "bfs complete");
}
