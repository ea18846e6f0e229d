//! Configuration type definitions

use crate::graph::Algorithm;
use serde::{Deserialize, Serialize};

/// Default ceiling on line-up size; 10! orderings is already millions of nodes
pub const DEFAULT_MAX_ITEMS: usize = 10;

/// Top-level pathline configuration (`pathline.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathlineConfig {
    /// Shortest-path settings
    #[serde(default)]
    pub graph: GraphConfig,

    /// Line-up search settings
    #[serde(default)]
    pub lineup: LineupConfig,
}

/// Configuration for shortest-path queries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Force an algorithm instead of dispatching on the weight profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_algorithm: Option<Algorithm>,
}

/// Configuration for the line-up search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupConfig {
    /// Refuse inputs with more items than this
    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

impl Default for LineupConfig {
    fn default() -> Self {
        Self {
            max_items: default_max_items(),
        }
    }
}

fn default_max_items() -> usize {
    DEFAULT_MAX_ITEMS
}
