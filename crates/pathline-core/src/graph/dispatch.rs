//! Algorithm selection for shortest-path queries
//!
//! The cheapest algorithm that is still correct for the graph's weight
//! profile wins: BFS when there are no weights, Dijkstra when every weight is
//! non-negative, Bellman-Ford as soon as one weight is negative.

use super::algos;
use super::types::{finite, Algorithm, Distance, NodeDistance, NodeId, ShortestPaths};
use super::{Graph, GraphError};

/// Choose an algorithm from the graph's weight profile
pub fn select_algorithm(graph: &Graph) -> Algorithm {
    if !graph.is_weighted() {
        Algorithm::Bfs
    } else if graph.has_negative_weight() {
        Algorithm::BellmanFord
    } else {
        Algorithm::Dijkstra
    }
}

/// Run `algorithm`; returns the negative-cycle flag (always false for BFS and Dijkstra)
pub fn run(graph: &Graph, algorithm: Algorithm, source: NodeId, distances: &mut [Distance]) -> bool {
    match algorithm {
        Algorithm::Bfs => {
            algos::bfs(graph, source, distances);
            false
        }
        Algorithm::Dijkstra => {
            algos::dijkstra(graph, source, distances);
            false
        }
        Algorithm::BellmanFord => algos::bellman_ford(graph, source, distances),
    }
}

/// Select an algorithm for `graph` and run it from `source`
pub fn find_shortest_distance(graph: &Graph, source: NodeId, distances: &mut [Distance]) -> bool {
    let algorithm = select_algorithm(graph);
    tracing::debug!(%algorithm, source, "dispatching shortest-path query");
    run(graph, algorithm, source, distances)
}

/// Owned variant of [`find_shortest_distance`]: allocates the buffer and
/// reports one entry per node. `algorithm` overrides the dispatcher, except
/// that Dijkstra is refused on a graph with a negative weight.
pub fn shortest_distances(
    graph: &Graph,
    source: NodeId,
    algorithm: Option<Algorithm>,
) -> Result<ShortestPaths, GraphError> {
    let algorithm = algorithm.unwrap_or_else(|| select_algorithm(graph));
    if algorithm == Algorithm::Dijkstra && graph.has_negative_weight() {
        return Err(GraphError::NegativeWeights { algorithm });
    }

    let mut buffer = graph.distance_buffer()?;
    tracing::debug!(%algorithm, source, "running shortest-path query");
    let negative_cycle = run(graph, algorithm, source, &mut buffer);

    let distances = graph
        .nodes()
        .iter()
        .map(|&node| NodeDistance {
            node,
            distance: finite(buffer[node]),
        })
        .collect();

    Ok(ShortestPaths {
        source,
        algorithm,
        negative_cycle,
        distances,
    })
}
