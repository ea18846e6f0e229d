use pathline_core::format::OutputFormat;
use pathline_core::graph::Algorithm;
use pathline_core::lineup::{self, Item};

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse algorithm name from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

/// Parse an incompatible pair from `A,B`
pub fn parse_pair(s: &str) -> std::result::Result<(Item, Item), String> {
    lineup::parse_pair(s).map_err(|e| e.to_string())
}
