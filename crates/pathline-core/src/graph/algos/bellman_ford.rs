use crate::graph::algos::shared::{relax, relaxed_distance};
use crate::graph::types::{Distance, NodeId, INFINITY};
use crate::graph::Graph;

/// Perform Bellman-Ford from `source`; returns true if a negative cycle is
/// reachable from it.
///
/// The whole buffer is reset to `INFINITY` before `distances[source]` is set
/// to 0, so reusing one buffer across sources never leaks earlier results.
/// Runs up to `|nodes| - 1` relaxation passes (stopping early once a pass
/// changes nothing), then one detection pass. Edges leaving an unreached
/// node never relax.
#[tracing::instrument(skip(graph, distances), fields(nodes = graph.node_count(), edges = graph.edges().len()))]
pub fn bellman_ford(graph: &Graph, source: NodeId, distances: &mut [Distance]) -> bool {
    distances.fill(INFINITY);
    distances[source] = 0;

    let max_passes = graph.node_count().saturating_sub(1);
    let mut passes = 0;
    while passes < max_passes {
        passes += 1;
        let mut updated = false;
        for (from, to, weight) in graph.weighted_edges() {
            updated |= relax(distances, from, to, weight);
        }
        if !updated {
            break;
        }
    }

    let negative_cycle = graph.weighted_edges().any(|(from, to, weight)| {
        relaxed_distance(distances[from], weight).is_some_and(|candidate| candidate < distances[to])
    });

    tracing::debug!(passes, negative_cycle, "bellman-ford complete");
    negative_cycle
}
