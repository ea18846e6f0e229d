use crate::graph::types::{Distance, NodeId, Weight, INFINITY};

/// Distance reached by extending a path of length `from_distance` with `weight`.
///
/// Returns `None` when the path start is unreached, so an `INFINITY` entry
/// never propagates.
pub fn relaxed_distance(from_distance: Distance, weight: Weight) -> Option<Distance> {
    if from_distance == INFINITY {
        None
    } else {
        Some(from_distance.saturating_add(weight))
    }
}

/// Relax edge `from -> to`; returns true if `distances[to]` improved
pub fn relax(distances: &mut [Distance], from: NodeId, to: NodeId, weight: Weight) -> bool {
    match relaxed_distance(distances[from], weight) {
        Some(candidate) if candidate < distances[to] => {
            tracing::trace!(from, to, weight, distance = candidate, "relax");
            distances[to] = candidate;
            true
        }
        _ => false,
    }
}
