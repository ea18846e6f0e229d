//! Line command
use std::collections::BTreeSet;
use std::time::Instant;

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use pathline_core::config::PathlineConfig;
use pathline_core::error::Result;
use pathline_core::lineup::{put_in_line, IncompatiblePairs, Item, Line};
use pathline_core::trace_time;

#[derive(Debug, Serialize)]
struct LineupOutput<'a> {
    count: usize,
    lines: &'a BTreeSet<Line>,
}

/// Execute the line command
pub fn execute(
    cli: &Cli,
    config: &PathlineConfig,
    items: &[Item],
    incompatible: &[(Item, Item)],
    start: Instant,
) -> Result<()> {
    config.check_lineup_size(items.len())?;

    let pairs: IncompatiblePairs = incompatible.iter().copied().collect();
    let lines = put_in_line(items, &pairs);
    trace_time!(start, "put_in_line", lines = lines.len());

    match cli.format {
        OutputFormat::Human => output_human(cli, &lines),
        OutputFormat::Json => {
            let output = LineupOutput {
                count: lines.len(),
                lines: &lines,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

/// Output in human-readable format
fn output_human(cli: &Cli, lines: &BTreeSet<Line>) {
    for line in lines {
        let rendered: Vec<String> = line.iter().map(|item| item.to_string()).collect();
        println!("{}", rendered.join(" "));
    }
    if !cli.quiet {
        println!("{} line(s)", lines.len());
    }
}
