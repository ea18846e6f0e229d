//! Command dispatch logic for pathline
use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use pathline_core::config::PathlineConfig;
use pathline_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = PathlineConfig::discover(cli.config.as_deref(), &cwd)?;
    tracing::debug!(elapsed = ?start.elapsed(), "load_config");

    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Distances {
            graph,
            source,
            algorithm,
        }) => {
            let algorithm = algorithm.or(config.graph.default_algorithm);
            commands::distances::execute(cli, graph, *source, algorithm, start)
        }

        Some(Commands::Line {
            items,
            incompatible,
        }) => commands::line::execute(cli, &config, items, incompatible, start),
    }
}

fn handle_no_command() -> Result<()> {
    println!("pathline - shortest paths and constrained line-ups");
    println!();
    println!("Run `pathline --help` for usage information.");
    Ok(())
}
