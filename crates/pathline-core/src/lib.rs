//! Pathline Core Library
//!
//! Single-source shortest paths over small directed graphs and a
//! constrained line-up (permutation) search, plus the error, logging and
//! configuration plumbing shared with the `pathline` CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod lineup;
pub mod logging;
