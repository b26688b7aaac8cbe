//! Backend endpoint addressing.
//!
//! Only URLs and request bodies are built here; sending them is left to the
//! caller's HTTP client.

use crate::state::search::{AnalyzeRequest, SearchRequest};

/// Path of the scrape endpoint.
pub const SCRAPE_PATH: &str = "/scrape";
/// Path of the analyze endpoint.
pub const ANALYZE_PATH: &str = "/analyze";

/// What: Join the backend base URL, API version and an endpoint path.
///
/// Inputs:
/// - `base`: Backend origin, e.g. `https://api.example.org` (trailing `/` tolerated).
/// - `version`: API version segment, e.g. `v1`.
/// - `path`: Endpoint path with or without a leading `/`.
///
/// Output:
/// - `<base>/api/<version>/<path>`.
#[must_use]
pub fn endpoint(base: &str, version: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let version = version.trim_matches('/');
    if path.starts_with('/') {
        format!("{base}/api/{version}{path}")
    } else {
        format!("{base}/api/{version}/{path}")
    }
}

/// A request ready to be sent: method is always POST with a JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedCall {
    /// Full endpoint URL.
    pub url: String,
    /// JSON body.
    pub body: serde_json::Value,
}

/// What: Build the scrape call for a search.
///
/// Inputs:
/// - `base`, `version`: Backend address (see [`endpoint`]).
/// - `request`: Search to submit.
///
/// Output:
/// - URL and `{ keyword, platform, timeframe }` body.
///
/// # Errors
/// - Returns `Err` only if the request cannot be serialized.
pub fn scrape_call(
    base: &str,
    version: &str,
    request: &SearchRequest,
) -> serde_json::Result<PreparedCall> {
    Ok(PreparedCall {
        url: endpoint(base, version, SCRAPE_PATH),
        body: serde_json::to_value(request)?,
    })
}

/// What: Build the analyze call from the scrape response.
///
/// Inputs:
/// - `base`, `version`: Backend address.
/// - `posts`: Scrape response body, forwarded as-is.
///
/// Output:
/// - URL and `{ posts }` body.
///
/// # Errors
/// - Returns `Err` only if the body cannot be serialized.
pub fn analyze_call(
    base: &str,
    version: &str,
    posts: serde_json::Value,
) -> serde_json::Result<PreparedCall> {
    Ok(PreparedCall {
        url: endpoint(base, version, ANALYZE_PATH),
        body: serde_json::to_value(AnalyzeRequest { posts })?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::search::{Platform, Timeframe};

    #[test]
    fn endpoint_normalizes_slashes() {
        assert_eq!(
            endpoint("http://localhost:8000", "v1", "/scrape"),
            "http://localhost:8000/api/v1/scrape"
        );
        assert_eq!(
            endpoint("http://localhost:8000/", "v2", "analyze"),
            "http://localhost:8000/api/v2/analyze"
        );
        assert_eq!(endpoint("https://h", "/v1/", ""), "https://h/api/v1/");
    }

    #[test]
    fn calls_carry_expected_bodies() {
        let req = SearchRequest::new("ai", Platform::Twitter, Timeframe::Month)
            .expect("keyword present");
        let scrape = scrape_call("https://h", "v1", &req).expect("serialize");
        assert_eq!(scrape.url, "https://h/api/v1/scrape");
        assert_eq!(scrape.body["platform"], "TWITTER");
        assert_eq!(scrape.body["timeframe"], "30d");

        let posts = serde_json::json!([{ "text": "hello" }]);
        let analyze = analyze_call("https://h", "v1", posts.clone()).expect("serialize");
        assert_eq!(analyze.url, "https://h/api/v1/analyze");
        assert_eq!(analyze.body, serde_json::json!({ "posts": posts }));
    }
}
