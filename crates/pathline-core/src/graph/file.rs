//! Graph files: the on-disk form of a [`Graph`]
//!
//! TOML by default, JSON when the path ends in `.json`:
//!
//! ```toml
//! nodes = [0, 1, 2]
//!
//! [[edges]]
//! from = 0
//! to = 1
//! weight = 10   # optional
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::types::{NodeId, Weight};
use super::Graph;
use crate::error::{PathlineError, Result};

/// One edge entry in a graph file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeEntry {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
}

/// Serde model of a graph file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphFile {
    pub nodes: Vec<NodeId>,
    #[serde(default)]
    pub edges: Vec<EdgeEntry>,
}

impl GraphFile {
    /// Parse graph file text; `json` selects the JSON reader over TOML
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }

    /// Read a graph file, choosing the format by extension
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        Self::parse(&content, json)
    }

    /// Build the in-memory graph; weights come only from entries that carry one
    pub fn into_graph(self) -> Graph {
        let weights: Vec<((NodeId, NodeId), Weight)> = self
            .edges
            .iter()
            .filter_map(|edge| edge.weight.map(|w| ((edge.from, edge.to), w)))
            .collect();
        let edges = self.edges.into_iter().map(|edge| (edge.from, edge.to));
        Graph::new(self.nodes, edges, weights)
    }
}

impl From<&Graph> for GraphFile {
    fn from(graph: &Graph) -> Self {
        let weighted = graph.is_weighted();
        GraphFile {
            nodes: graph.nodes().to_vec(),
            edges: graph
                .edges()
                .iter()
                .map(|&(from, to)| EdgeEntry {
                    from,
                    to,
                    weight: weighted.then(|| graph.weight(from, to)),
                })
                .collect(),
        }
    }
}

/// Read and validate a graph file
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_graph(path: &Path) -> Result<Graph> {
    let graph = GraphFile::read(path)
        .map_err(|e| match e {
            PathlineError::Io(_) => e,
            other => PathlineError::invalid_graph(path, other),
        })?
        .into_graph();

    graph
        .validate()
        .map_err(|e| PathlineError::invalid_graph(path, e))?;

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edges().len(),
        weighted = graph.is_weighted(),
        "loaded graph"
    );
    Ok(graph)
}
