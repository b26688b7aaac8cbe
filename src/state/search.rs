//! Search submission types and the scrape/analyze request flow.
//!
//! The preparation core never sees any of this. The flow here belongs to the
//! caller: it tracks which request is current and drops late completions of
//! superseded ones.

use serde::{Deserialize, Serialize};

use crate::logic::prepare::{PreparedResult, prepare};
use crate::state::types::AnalysisResult;

/// Platform to search. Only used when submitting a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Platform {
    /// Twitter / X posts.
    #[default]
    Twitter,
    /// Reddit threads and comments.
    Reddit,
    /// News articles.
    News,
}

impl Platform {
    /// What: Return the wire name sent to the backend.
    ///
    /// Inputs: none
    ///
    /// Output: `"TWITTER"`, `"REDDIT"` or `"NEWS"`.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Twitter => "TWITTER",
            Self::Reddit => "REDDIT",
            Self::News => "NEWS",
        }
    }

    /// What: Parse a platform from user input or settings.
    ///
    /// Inputs: `s` platform name (case-insensitive, `x` accepted for Twitter).
    ///
    /// Output: `Some(Platform)` on a recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "twitter" | "x" => Some(Self::Twitter),
            "reddit" => Some(Self::Reddit),
            "news" => Some(Self::News),
            _ => None,
        }
    }
}

/// Time window to search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    /// Last 24 hours.
    #[serde(rename = "24h")]
    Day,
    /// Last 7 days.
    #[default]
    #[serde(rename = "7d")]
    Week,
    /// Last 30 days.
    #[serde(rename = "30d")]
    Month,
}

impl Timeframe {
    /// Wire name sent to the backend.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Day => "24h",
            Self::Week => "7d",
            Self::Month => "30d",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Day => "Last 24 hours",
            Self::Week => "Last 7 days",
            Self::Month => "Last 30 days",
        }
    }

    /// What: Parse a timeframe from user input or settings.
    ///
    /// Inputs: `s` such as `24h`, `7d`, `30d` (also `day`, `week`, `month`).
    ///
    /// Output: `Some(Timeframe)` on a recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "24h" | "1d" | "day" => Some(Self::Day),
            "7d" | "week" => Some(Self::Week),
            "30d" | "month" => Some(Self::Month),
            _ => None,
        }
    }
}

/// Body of the scrape request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Search terms, non-blank.
    pub keyword: String,
    /// Platform to scrape.
    pub platform: Platform,
    /// Time window to scrape.
    pub timeframe: Timeframe,
}

impl SearchRequest {
    /// What: Build a search request, rejecting blank keywords.
    ///
    /// Inputs:
    /// - `keyword`: Raw search text; surrounding whitespace is trimmed.
    /// - `platform`, `timeframe`: Search scope.
    ///
    /// Output:
    /// - `Some(SearchRequest)` when the trimmed keyword is non-empty; `None` otherwise.
    #[must_use]
    pub fn new(keyword: &str, platform: Platform, timeframe: Timeframe) -> Option<Self> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return None;
        }
        Some(Self {
            keyword: keyword.to_string(),
            platform,
            timeframe,
        })
    }
}

/// Body of the analyze request: whatever the scrape step returned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Scraped posts, opaque to this crate.
    pub posts: serde_json::Value,
}

/// Where the current search stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SearchPhase {
    /// No search submitted yet.
    #[default]
    Idle,
    /// Waiting for the scrape response of request `id`.
    Scraping {
        /// Request identifier.
        id: u64,
    },
    /// Waiting for the analyze response of request `id`.
    Analyzing {
        /// Request identifier.
        id: u64,
    },
    /// Request `id` finished and was prepared for display.
    Prepared {
        /// Request identifier.
        id: u64,
        /// Display datasets.
        result: Box<PreparedResult>,
    },
    /// Request `id` failed; any partial data was dropped.
    Failed {
        /// Request identifier.
        id: u64,
        /// User-facing error text.
        message: String,
    },
}

/// Tracks one search at a time through scrape and analyze.
///
/// Identifiers increase monotonically. A completion whose id does not match
/// the in-flight request is stale and is ignored.
#[derive(Clone, Debug, Default)]
pub struct SearchFlow {
    /// Last id handed out.
    last_id: u64,
    /// Current phase.
    phase: SearchPhase,
}

impl SearchFlow {
    /// Fresh idle flow.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    /// What: Start a new search, superseding any request still in flight.
    ///
    /// Inputs:
    /// - `request`: The search being submitted (logged only).
    ///
    /// Output:
    /// - The id the caller must pass back with each completion.
    pub fn begin(&mut self, request: &SearchRequest) -> u64 {
        self.last_id += 1;
        let id = self.last_id;
        tracing::info!(
            id,
            keyword = %request.keyword,
            platform = request.platform.as_config_key(),
            timeframe = request.timeframe.as_config_key(),
            "search started"
        );
        self.phase = SearchPhase::Scraping { id };
        id
    }

    /// What: Record that the scrape step of request `id` succeeded.
    ///
    /// Inputs:
    /// - `id`: Request id returned by [`Self::begin`].
    ///
    /// Output:
    /// - `true` if the flow advanced to analyzing; `false` for a stale or out-of-order completion.
    pub fn scrape_done(&mut self, id: u64) -> bool {
        if self.phase != (SearchPhase::Scraping { id }) {
            tracing::debug!(id, "ignoring stale scrape completion");
            return false;
        }
        self.phase = SearchPhase::Analyzing { id };
        true
    }

    /// What: Record the analysis result of request `id` and prepare it.
    ///
    /// Inputs:
    /// - `id`: Request id.
    /// - `result`: Complete analysis payload.
    ///
    /// Output:
    /// - `true` if the result was accepted; `false` if it was stale and discarded.
    pub fn analyze_done(&mut self, id: u64, result: &AnalysisResult) -> bool {
        if self.phase != (SearchPhase::Analyzing { id }) {
            tracing::debug!(id, "ignoring stale analysis result");
            return false;
        }
        let prepared = prepare(result);
        tracing::info!(
            id,
            keywords = prepared.keywords.len(),
            hashtags = prepared.hashtags.len(),
            "search prepared"
        );
        self.phase = SearchPhase::Prepared {
            id,
            result: Box::new(prepared),
        };
        true
    }

    /// What: Record that request `id` failed at either step.
    ///
    /// Inputs:
    /// - `id`: Request id.
    /// - `message`: User-facing error text (see [`failure_message`]).
    ///
    /// Output:
    /// - `true` if the current request moved to failed; `false` if `id` was stale.
    pub fn fail(&mut self, id: u64, message: impl Into<String>) -> bool {
        let in_flight = matches!(
            self.phase,
            SearchPhase::Scraping { id: cur } | SearchPhase::Analyzing { id: cur } if cur == id
        );
        if !in_flight {
            tracing::debug!(id, "ignoring stale failure");
            return false;
        }
        let message = message.into();
        tracing::warn!(id, error = %message, "search failed");
        self.phase = SearchPhase::Failed { id, message };
        true
    }

    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(
            self.phase,
            SearchPhase::Scraping { .. } | SearchPhase::Analyzing { .. }
        )
    }

    /// Loading text for the current phase, if any.
    #[must_use]
    pub const fn status_text(&self) -> Option<&'static str> {
        match self.phase {
            SearchPhase::Scraping { .. } => Some("Gathering social media data..."),
            SearchPhase::Analyzing { .. } => Some("Analyzing conversations..."),
            _ => None,
        }
    }

    /// Prepared datasets, when the last search completed.
    #[must_use]
    pub fn prepared(&self) -> Option<&PreparedResult> {
        match &self.phase {
            SearchPhase::Prepared { result, .. } => Some(result.as_ref()),
            _ => None,
        }
    }
}

/// Fallback text when no better error description exists.
pub const GENERIC_ERROR: &str = "An error occurred";

/// What: Choose the user-facing text for a failed request.
///
/// Inputs:
/// - `body`: Error response body from the backend, if one was received.
/// - `transport`: Transport-level error text, if any.
///
/// Output:
/// - The body's non-empty `message`, else the transport text, else [`GENERIC_ERROR`].
#[must_use]
pub fn failure_message(body: Option<&serde_json::Value>, transport: Option<&str>) -> String {
    body.and_then(|b| b.get("message"))
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .or_else(|| transport.map(str::trim).filter(|m| !m.is_empty()))
        .unwrap_or(GENERIC_ERROR)
        .to_string()
}
