//! Fixed constants of the preparation algorithms.
//!
//! These are part of the algorithm, not user configuration. Nothing reads
//! them from files or the environment.

/// Tokens dropped from keyword lists (compared lower-cased, exact match).
///
/// Upstream tokenization leaks URL fragments into keyword counts.
pub const STOP_WORDS: [&str; 5] = ["https", "http", "com", "www", "tco"];

/// Maximum number of keywords kept after stop-word removal.
pub const KEYWORD_LIMIT: usize = 50;

/// Upper bound of the hashtag display scale.
pub const HASHTAG_SCALE_MAX: f64 = 100.0;

/// Multiplier applied to `ln(count + 1)` for word-cloud sizing.
pub const CLOUD_LOG_FACTOR: f64 = 20.0;

/// Ceiling for word-cloud values.
pub const CLOUD_VALUE_CAP: f64 = 100.0;

/// Slice weight given to the label's own slice when no distribution is supplied.
pub const DEFAULT_MATCHING_WEIGHT: f64 = 60.0;

/// Slice weight given to each of the other two slices in that case.
pub const DEFAULT_OTHER_WEIGHT: f64 = 20.0;
