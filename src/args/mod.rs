//! Command-line argument parsing and handling.

pub mod definition;
pub mod prepare;
pub mod request;
pub mod utils;

// Re-export commonly used items
pub use definition::{Args, run};
pub use utils::determine_log_level;
