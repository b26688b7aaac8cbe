//! Decoding of analysis payloads received from the backend.

use serde_json::Value;

use crate::state::types::AnalysisResult;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Parse an analysis payload from JSON text.
///
/// Inputs:
/// - `text`: Response body of the analyze endpoint.
///
/// Output:
/// - `Ok(AnalysisResult)` on success; `Err` when the JSON is malformed or does not
///   match the payload shape.
///
/// # Errors
/// - Invalid JSON, or a body that matches neither accepted shape.
///
/// Details:
/// - Accepts a bare payload or the generic `{ "message": ..., "data": {...} }` envelope.
pub fn parse_analysis(text: &str) -> Result<AnalysisResult> {
    let v: Value = serde_json::from_str(text)?;
    analysis_from_value(v)
}

/// What: Convert an already decoded JSON value into an analysis payload.
///
/// Inputs:
/// - `v`: Bare payload or enveloped payload.
///
/// Output:
/// - `Ok(AnalysisResult)` or a descriptive error.
///
/// # Errors
/// - The value has no `sentiment` block at the top level nor under `data`, or
///   field types do not match.
pub fn analysis_from_value(v: Value) -> Result<AnalysisResult> {
    let payload = unwrap_envelope(v);
    if payload.get("sentiment").is_none() {
        return Err("analysis payload has no sentiment block".into());
    }
    let result: AnalysisResult = serde_json::from_value(payload)?;
    tracing::debug!(
        keywords = result.keywords.len(),
        hashtags = result.hashtags.len(),
        has_distribution = result.sentiment.distribution.is_some(),
        "parsed analysis payload"
    );
    Ok(result)
}

/// Return the `data` member when `v` looks like `{ message, data }` without its own sentiment.
fn unwrap_envelope(mut v: Value) -> Value {
    let enveloped = v.get("sentiment").is_none() && v.get("data").is_some_and(Value::is_object);
    if enveloped && let Some(data) = v.get_mut("data") {
        return data.take();
    }
    v
}
