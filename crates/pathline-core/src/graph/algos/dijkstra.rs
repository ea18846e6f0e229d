use crate::graph::algos::shared::relax;
use crate::graph::types::{Distance, NodeId};
use crate::graph::Graph;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Frontier entry; wrapped in `Reverse` so the heap pops the smallest distance first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeapEntry {
    pub distance: Distance,
    pub node: NodeId,
}

/// Perform Dijkstra's search from `source`.
///
/// Entries whose recorded distance is larger than the best known distance
/// for their node are stale and are dropped instead of expanded. Only valid
/// when every weight is non-negative; the dispatcher guarantees that.
/// Entries for unreached nodes are left as the caller initialised them.
#[tracing::instrument(skip(graph, distances), fields(nodes = graph.node_count(), edges = graph.edges().len()))]
pub fn dijkstra(graph: &Graph, source: NodeId, distances: &mut [Distance]) {
    let mut heap = BinaryHeap::new();
    let mut settled = 0usize;

    distances[source] = 0;
    heap.push(Reverse(HeapEntry {
        distance: 0,
        node: source,
    }));

    while let Some(Reverse(HeapEntry { distance, node })) = heap.pop() {
        if distance > distances[node] {
            tracing::trace!(node, distance, best = distances[node], "skip stale entry");
            continue;
        }
        settled += 1;

        for &(neighbor, weight) in graph.outgoing(node) {
            if relax(distances, node, neighbor, weight) {
                heap.push(Reverse(HeapEntry {
                    distance: distances[neighbor],
                    node: neighbor,
                }));
            }
        }
    }

    tracing::debug!(settled, "dijkstra complete");
}
