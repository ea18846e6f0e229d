//! CLI commands for pathline

pub mod dispatch;
pub mod distances;
pub mod line;
