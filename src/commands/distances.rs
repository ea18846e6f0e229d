//! Distances command
use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use pathline_core::error::{PathlineError, Result};
use pathline_core::graph::{load_graph, Algorithm, GraphError, NodeId, ShortestPaths};
use pathline_core::{bail_invalid, bail_usage, trace_time};

/// Execute the distances command
pub fn execute(
    cli: &Cli,
    graph_path: &Path,
    source: NodeId,
    algorithm: Option<Algorithm>,
    start: Instant,
) -> Result<()> {
    let graph = load_graph(graph_path)?;
    trace_time!(start, "load_graph");

    if !graph.nodes().contains(&source) {
        bail_invalid!(
            "source",
            format!("{} (not a node of {})", source, graph_path.display())
        );
    }

    // `algorithm` may come from --algorithm or from pathline.toml
    let report = match graph.shortest_distances(source, algorithm) {
        Ok(report) => report,
        Err(e @ GraphError::NegativeWeights { .. }) => bail_usage!(e),
        Err(e) => return Err(PathlineError::invalid_graph(graph_path, e)),
    };
    trace_time!(start, "shortest_distances", algorithm = report.algorithm.as_str());

    match cli.format {
        OutputFormat::Human => output_human(cli, &report),
        OutputFormat::Json => output_json(&report)?,
    }

    Ok(())
}

/// Output in human-readable format
fn output_human(cli: &Cli, report: &ShortestPaths) {
    if !cli.quiet {
        println!(
            "Distances from {} ({}):",
            report.source, report.algorithm
        );
    }
    for entry in &report.distances {
        match entry.distance {
            Some(distance) => println!("{}: {}", entry.node, distance),
            None => println!("{}: unreachable", entry.node),
        }
    }
    if report.negative_cycle {
        println!("negative cycle detected: distances are not reliable");
    }
}

/// Output in JSON format
fn output_json(report: &ShortestPaths) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
