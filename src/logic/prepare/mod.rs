//! Preparation of analysis results into display-ready datasets.
//!
//! Each sub-transform is a pure function of its own slice of the input and
//! none depends on another's output, except the word cloud which is derived
//! from the already filtered keywords.

pub mod cloud;
pub mod constants;
pub mod hashtags;
pub mod keywords;
pub mod sentiment;


use serde::{Deserialize, Serialize};

use crate::state::types::{
    AnalysisResult, Keyword, ResolvedDistribution, ScaledHashtag, SentimentLabel, WordCloudEntry,
};

/// Everything the three renderings need for one analysis result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreparedResult {
    /// Keywords after stop-word removal and capping, upstream order.
    pub keywords: Vec<Keyword>,
    /// Word-cloud entries derived from `keywords`.
    pub cloud: Vec<WordCloudEntry>,
    /// Hashtags with relative display sizes, upstream order.
    pub hashtags: Vec<ScaledHashtag>,
    /// Donut chart slices.
    pub distribution: ResolvedDistribution,
    /// Overall label, passed through for headings.
    pub label: SentimentLabel,
    /// Score as a whole percentage for the donut centre.
    pub score_percent: u8,
}

impl PreparedResult {
    /// Whether there is anything to show in the keyword cloud and list.
    #[must_use]
    pub fn has_keywords(&self) -> bool {
        !self.keywords.is_empty()
    }

    /// Whether there is anything to show in the hashtag list.
    #[must_use]
    pub fn has_hashtags(&self) -> bool {
        !self.hashtags.is_empty()
    }

    /// What: Pair each keyword with its 1-based rank for list display.
    ///
    /// Inputs: none
    ///
    /// Output:
    /// - Iterator of `(rank, keyword)` in list order.
    pub fn ranked_keywords(&self) -> impl Iterator<Item = (usize, &Keyword)> {
        self.keywords.iter().enumerate().map(|(i, kw)| (i + 1, kw))
    }

    /// Pair each hashtag with its 1-based rank for list display.
    pub fn ranked_hashtags(&self) -> impl Iterator<Item = (usize, &ScaledHashtag)> {
        self.hashtags.iter().enumerate().map(|(i, h)| (i + 1, h))
    }
}

/// What: Run every sub-transform over one analysis result.
///
/// Inputs:
/// - `result`: Complete payload from the analysis backend; only read.
///
/// Output:
/// - A fresh [`PreparedResult`]; nothing is cached between calls.
///
/// Details:
/// - Total over its input: empty lists give empty outputs, a missing
///   distribution gives the label default.
#[must_use]
pub fn prepare(result: &AnalysisResult) -> PreparedResult {
    let keywords = keywords::filter(&result.keywords);
    let cloud = cloud::project(&keywords);
    let hashtags = hashtags::normalize(&result.hashtags);
    let distribution = sentiment::resolve_distribution(&result.sentiment);
    let score_percent = sentiment::score_percent(result.sentiment.score);

    tracing::debug!(
        keywords_in = result.keywords.len(),
        keywords_out = keywords.len(),
        hashtags = hashtags.len(),
        origin = ?distribution.origin,
        "prepared analysis result"
    );

    PreparedResult {
        keywords,
        cloud,
        hashtags,
        distribution,
        label: result.sentiment.label,
        score_percent,
    }
}
