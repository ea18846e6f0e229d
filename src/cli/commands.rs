//! Main CLI commands enum

use clap::Subcommand;
use std::path::PathBuf;

use crate::cli::parse::{parse_algorithm, parse_pair};
use pathline_core::graph::{Algorithm, NodeId};
use pathline_core::lineup::Item;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute single-source shortest distances over a graph file
    Distances {
        /// Graph file (TOML, or JSON with a .json extension)
        graph: PathBuf,

        /// Source node
        #[arg(long, short)]
        source: NodeId,

        /// Force an algorithm: bfs, dijkstra, bellman-ford (default: pick from weights)
        #[arg(long, short, value_parser = parse_algorithm)]
        algorithm: Option<Algorithm>,
    },

    /// List every ordering of items with no incompatible neighbours
    Line {
        /// Item to place (repeat for each item)
        #[arg(long = "item", short = 'i', action = clap::ArgAction::Append, allow_negative_numbers = true)]
        items: Vec<Item>,

        /// Pair that may not stand side by side, as A,B (repeatable)
        #[arg(long = "incompatible", short = 'x', action = clap::ArgAction::Append, value_parser = parse_pair, allow_hyphen_values = true)]
        incompatible: Vec<(Item, Item)>,
    },
}
