//! Boundary with the analysis backend: endpoint addressing and payload decoding.

pub mod api;
pub mod parse;

pub use api::{PreparedCall, analyze_call, endpoint, scrape_call};
pub use parse::{analysis_from_value, parse_analysis};
