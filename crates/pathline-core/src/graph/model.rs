use std::collections::{BTreeMap, HashMap, HashSet};

use thiserror::Error;

use super::algos;
use super::dispatch;
use super::types::{
    Algorithm, Distance, NodeId, ShortestPaths, Weight, INFINITY, MAX_NODE_ID, UNIT_WEIGHT,
};

/// Structural problems found by [`Graph::validate`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("edge {from} -> {to} references node {missing}, which is not in the node set")]
    DanglingEdge {
        from: NodeId,
        to: NodeId,
        missing: NodeId,
    },

    #[error("weight given for {from} -> {to}, but no such edge exists")]
    OrphanWeight { from: NodeId, to: NodeId },

    #[error("node {node} is above the highest supported identifier {limit}")]
    NodeIdTooLarge { node: NodeId, limit: NodeId },

    #[error("{algorithm} cannot run on a graph with negative weights (use bellman-ford)")]
    NegativeWeights { algorithm: Algorithm },
}

/// Immutable directed graph with optional integer edge weights.
///
/// Node identifiers index the distance buffers passed to the algorithms.
/// The outgoing adjacency is built once at construction.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<NodeId>,
    edges: Vec<(NodeId, NodeId)>,
    weights: BTreeMap<(NodeId, NodeId), Weight>,
    adjacency: HashMap<NodeId, Vec<(NodeId, Weight)>>,
}

impl Graph {
    /// Build a graph from a node set, an edge list and a weight mapping.
    ///
    /// Repeated nodes collapse into one. Repeated edges are kept. An empty
    /// weight mapping makes the graph unweighted.
    pub fn new(
        nodes: impl IntoIterator<Item = NodeId>,
        edges: impl IntoIterator<Item = (NodeId, NodeId)>,
        weights: impl IntoIterator<Item = ((NodeId, NodeId), Weight)>,
    ) -> Self {
        let mut seen = HashSet::new();
        let nodes: Vec<NodeId> = nodes.into_iter().filter(|n| seen.insert(*n)).collect();
        let edges: Vec<(NodeId, NodeId)> = edges.into_iter().collect();
        let weights: BTreeMap<(NodeId, NodeId), Weight> = weights.into_iter().collect();

        let mut adjacency: HashMap<NodeId, Vec<(NodeId, Weight)>> = HashMap::new();
        for &(from, to) in &edges {
            let weight = weights.get(&(from, to)).copied().unwrap_or(UNIT_WEIGHT);
            adjacency.entry(from).or_default().push((to, weight));
        }

        Self {
            nodes,
            edges,
            weights,
            adjacency,
        }
    }

    /// Build a graph without weights
    pub fn unweighted(
        nodes: impl IntoIterator<Item = NodeId>,
        edges: impl IntoIterator<Item = (NodeId, NodeId)>,
    ) -> Self {
        Self::new(nodes, edges, std::iter::empty())
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    pub fn weights(&self) -> &BTreeMap<(NodeId, NodeId), Weight> {
        &self.weights
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True when any weight was supplied
    pub fn is_weighted(&self) -> bool {
        !self.weights.is_empty()
    }

    pub fn has_negative_weight(&self) -> bool {
        self.weights.values().any(|w| *w < 0)
    }

    /// Weight of edge `from -> to`, defaulting to 1 when unmapped
    pub fn weight(&self, from: NodeId, to: NodeId) -> Weight {
        self.weights.get(&(from, to)).copied().unwrap_or(UNIT_WEIGHT)
    }

    /// Outgoing `(destination, weight)` pairs of `node`
    pub fn outgoing(&self, node: NodeId) -> &[(NodeId, Weight)] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every edge with its effective weight, in edge-list order
    pub fn weighted_edges(&self) -> impl Iterator<Item = (NodeId, NodeId, Weight)> + '_ {
        self.edges
            .iter()
            .map(|&(from, to)| (from, to, self.weight(from, to)))
    }

    /// Fresh distance buffer large enough to index every node, filled with `INFINITY`.
    ///
    /// Fails when a node identifier is above [`MAX_NODE_ID`].
    pub fn distance_buffer(&self) -> Result<Vec<Distance>, GraphError> {
        self.check_node_ids()?;
        let len = self.nodes.iter().max().map_or(0, |max| max + 1);
        Ok(vec![INFINITY; len])
    }

    fn check_node_ids(&self) -> Result<(), GraphError> {
        match self.nodes.iter().copied().find(|&node| node > MAX_NODE_ID) {
            Some(node) => Err(GraphError::NodeIdTooLarge {
                node,
                limit: MAX_NODE_ID,
            }),
            None => Ok(()),
        }
    }

    /// Check node identifiers are in range and every edge and weight refers
    /// to known nodes and edges
    pub fn validate(&self) -> Result<(), GraphError> {
        self.check_node_ids()?;

        let known: HashSet<NodeId> = self.nodes.iter().copied().collect();
        for &(from, to) in &self.edges {
            for endpoint in [from, to] {
                if !known.contains(&endpoint) {
                    return Err(GraphError::DanglingEdge {
                        from,
                        to,
                        missing: endpoint,
                    });
                }
            }
        }

        let edge_set: HashSet<(NodeId, NodeId)> = self.edges.iter().copied().collect();
        for key in self.weights.keys() {
            if !edge_set.contains(key) {
                return Err(GraphError::OrphanWeight {
                    from: key.0,
                    to: key.1,
                });
            }
        }

        Ok(())
    }

    /// Unweighted layered search; see [`algos::bfs`]
    pub fn bfs(&self, source: NodeId, distances: &mut [Distance]) {
        algos::bfs(self, source, distances)
    }

    /// Non-negative weighted search; see [`algos::dijkstra`]
    pub fn dijkstra(&self, source: NodeId, distances: &mut [Distance]) {
        algos::dijkstra(self, source, distances)
    }

    /// Arbitrary-sign weighted search; returns true on a reachable negative cycle
    pub fn bellman_ford(&self, source: NodeId, distances: &mut [Distance]) -> bool {
        algos::bellman_ford(self, source, distances)
    }

    /// Pick the cheapest valid algorithm for this graph and run it
    pub fn find_shortest_distance(&self, source: NodeId, distances: &mut [Distance]) -> bool {
        dispatch::find_shortest_distance(self, source, distances)
    }

    /// Algorithm the dispatcher would pick for this graph
    pub fn select_algorithm(&self) -> Algorithm {
        dispatch::select_algorithm(self)
    }

    /// Run a specific algorithm
    pub fn run(&self, algorithm: Algorithm, source: NodeId, distances: &mut [Distance]) -> bool {
        dispatch::run(self, algorithm, source, distances)
    }

    /// Allocate a buffer, run `algorithm` (or the dispatcher) and collect a report
    pub fn shortest_distances(
        &self,
        source: NodeId,
        algorithm: Option<Algorithm>,
    ) -> Result<ShortestPaths, GraphError> {
        dispatch::shortest_distances(self, source, algorithm)
    }
}
