//! Error types and exit codes for pathline
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, oversized input)
//! - 3: Data error (unreadable or malformed graph file)
//!
//! The algorithms themselves never fail: a negative cycle is a reported
//! result, not an error. These types cover loading, configuration and CLI use.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the pathline binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed graph file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur around the algorithm core
#[derive(Error, Debug)]
pub enum PathlineError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: bfs, dijkstra, or bellman-ford)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("too many items: {count} (limit is {limit}, see lineup.max_items)")]
    TooManyItems { count: usize, limit: usize },

    // Data errors (exit code 3)
    #[error("invalid graph in {path:?}: {reason}")]
    InvalidGraph { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl PathlineError {
    /// Create an error for an invalid value or argument
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PathlineError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a graph that failed validation
    pub fn invalid_graph(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        PathlineError::InvalidGraph {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathlineError::UnknownFormat(_)
            | PathlineError::UnknownAlgorithm(_)
            | PathlineError::UsageError(_)
            | PathlineError::InvalidValue { .. }
            | PathlineError::TooManyItems { .. } => ExitCode::Usage,

            PathlineError::InvalidGraph { .. } => ExitCode::Data,

            PathlineError::Io(_)
            | PathlineError::Json(_)
            | PathlineError::Toml(_)
            | PathlineError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            PathlineError::UnknownFormat(_) => "unknown_format",
            PathlineError::UnknownAlgorithm(_) => "unknown_algorithm",
            PathlineError::UsageError(_) => "usage_error",
            PathlineError::InvalidValue { .. } => "invalid_value",
            PathlineError::TooManyItems { .. } => "too_many_items",
            PathlineError::InvalidGraph { .. } => "invalid_graph",
            PathlineError::Io(_) => "io_error",
            PathlineError::Json(_) => "json_error",
            PathlineError::Toml(_) => "toml_error",
            PathlineError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for pathline operations
pub type Result<T> = std::result::Result<T, PathlineError>;
