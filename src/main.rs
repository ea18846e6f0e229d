//! Pathline - shortest paths and constrained line-ups from the command line
//!
//! Loads a graph file and reports single-source shortest distances, or
//! lists every ordering of a set of items with no incompatible neighbours.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use pathline_core::error::{ExitCode as PathlineExitCode, PathlineError};
use pathline_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match parse_cli() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(PathlineExitCode::Success as u8),
        Err(e) => report_error(&cli, &e),
    }
}

/// Parse arguments; on failure print the error as JSON when `--format json`
/// was on the command line, since `Cli.format` is not available yet
fn parse_cli() -> Result<Cli, ExitCode> {
    let err = match Cli::try_parse() {
        Ok(cli) => return Ok(cli),
        Err(err) => err,
    };

    let wants_json = requests_json(env::args().skip(1));
    if !wants_json || matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        err.exit();
    }

    let error = from_clap_error(&err);
    eprintln!("{}", error.to_json());
    Err(ExitCode::from(error.exit_code() as u8))
}

fn from_clap_error(err: &clap::Error) -> PathlineError {
    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => PathlineError::UsageError(err.to_string()),
        _ => PathlineError::Other(err.to_string()),
    }
}

fn report_error(cli: &Cli, e: &PathlineError) -> ExitCode {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", e.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", e);
    }
    ExitCode::from(e.exit_code() as u8)
}

/// True when the raw arguments ask for `--format json` in either spelling
fn requests_json(args: impl IntoIterator<Item = String>) -> bool {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let value = match arg.strip_prefix("--format") {
            Some("") => args.next(),
            Some(rest) => rest.strip_prefix('=').map(str::to_string),
            None => continue,
        };
        if value.is_some_and(|v| v.eq_ignore_ascii_case("json")) {
            return true;
        }
    }
    false
}
