//! Sentiment distribution resolution and score display.
//!
//! When the backend sends only a label, the donut still needs three slices.
//! The 60/20/20 split used then is a fixed display default. It is not an
//! estimate of the real distribution and should never be reported as one.

use super::constants::{DEFAULT_MATCHING_WEIGHT, DEFAULT_OTHER_WEIGHT};
use crate::state::types::{
    Distribution, DistributionOrigin, ResolvedDistribution, Sentiment, SentimentLabel,
};

/// What: Produce the distribution to chart for a sentiment block.
///
/// Inputs:
/// - `sentiment`: Sentiment as received from the backend.
///
/// Output:
/// - The supplied distribution untouched when present, tagged `Upstream`.
/// - Otherwise the label default, tagged `LabelDefault`.
///
/// Details:
/// - A supplied distribution is not checked against the sum-to-100 contract.
/// - `score` plays no part here and may disagree with the slices.
#[must_use]
pub fn resolve_distribution(sentiment: &Sentiment) -> ResolvedDistribution {
    sentiment.distribution.map_or_else(
        || ResolvedDistribution {
            distribution: default_for_label(sentiment.label),
            origin: DistributionOrigin::LabelDefault,
        },
        |distribution| ResolvedDistribution {
            distribution,
            origin: DistributionOrigin::Upstream,
        },
    )
}

/// What: Build the fixed 60/20/20 split favouring `label`.
///
/// Inputs:
/// - `label`: Slice that receives the larger weight.
///
/// Output:
/// - Distribution with 60 on `label` and 20 on each other slice.
#[must_use]
pub fn default_for_label(label: SentimentLabel) -> Distribution {
    let weight = |slice: SentimentLabel| {
        if slice == label {
            DEFAULT_MATCHING_WEIGHT
        } else {
            DEFAULT_OTHER_WEIGHT
        }
    };
    Distribution {
        positive: weight(SentimentLabel::Positive),
        neutral: weight(SentimentLabel::Neutral),
        negative: weight(SentimentLabel::Negative),
    }
}

/// What: Convert the continuous score into the whole percentage shown at the donut centre.
///
/// Inputs:
/// - `score`: Sentiment score, nominally in `[0, 1]`.
///
/// Output:
/// - `round(score * 100)` in `0..=100`.
///
/// Details:
/// - Out-of-range scores clamp; NaN maps to 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn score_percent(score: f64) -> u8 {
    if score.is_nan() {
        return 0;
    }
    (score.clamp(0.0, 1.0) * 100.0).round() as u8
}
