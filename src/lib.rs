//! Library entry for sentiscope exposing the preparation core and its
//! surrounding plumbing for the binary and integration tests.
//!
//! The core lives in [`logic::prepare`]: pure, synchronous transforms that
//! turn one [`state::AnalysisResult`] into bounded datasets for a word cloud,
//! a ranked keyword list, a hashtag list and a sentiment donut.

pub mod config;
pub mod logic;
pub mod report;
pub mod sources;
pub mod state;
pub mod util;

pub use logic::prepare::{PreparedResult, prepare};
