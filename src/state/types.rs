//! Core value types for analysis input and prepared output.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// What: Deserialize a frequency count from any JSON number holding a whole, non-negative value.
///
/// Inputs:
/// - `deserializer`: Positioned on the `count` value.
///
/// Output:
/// - The count, or an error for negative, fractional or non-finite numbers.
///
/// Details:
/// - Some serializers emit counts as `5.0`; those are accepted as `5`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn count_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Int(u64),
        Float(f64),
    }
    match Count::deserialize(deserializer)? {
        Count::Int(n) => Ok(n),
        Count::Float(f)
            if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 =>
        {
            Ok(f as u64)
        }
        Count::Float(f) => Err(D::Error::custom(format!(
            "count must be a non-negative integer, got {f}"
        ))),
    }
}

/// Keyword frequency as reported by the analysis backend.
///
/// Entries arrive in frequency-descending order; that order is kept as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    /// Token text as produced by upstream tokenization.
    pub word: String,
    /// Number of occurrences across the analyzed posts.
    #[serde(deserialize_with = "count_from_number")]
    pub count: u64,
}

/// Hashtag frequency as reported by the analysis backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hashtag {
    /// Tag text, usually including the leading `#`.
    pub tag: String,
    /// Number of occurrences across the analyzed posts.
    #[serde(deserialize_with = "count_from_number")]
    pub count: u64,
}

/// Overall sentiment label attached to an analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Predominantly positive conversation.
    Positive,
    /// Neither clearly positive nor negative.
    Neutral,
    /// Predominantly negative conversation.
    Negative,
}

impl SentimentLabel {
    /// All labels in display order (donut slice order).
    pub const ALL: [Self; 3] = [Self::Positive, Self::Neutral, Self::Negative];

    /// What: Return the lowercase wire name of this label.
    ///
    /// Inputs: none
    ///
    /// Output: `"positive"`, `"neutral"` or `"negative"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-way percentage split of the analyzed posts.
///
/// Values are taken as received. Upstream promises they sum to roughly 100,
/// but nothing here enforces it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    /// Share of positive posts.
    pub positive: f64,
    /// Share of neutral posts.
    pub neutral: f64,
    /// Share of negative posts.
    pub negative: f64,
}

impl Distribution {
    /// What: Read the slice value for one label.
    ///
    /// Inputs:
    /// - `label`: Which slice to read.
    ///
    /// Output:
    /// - The stored number for that slice.
    #[must_use]
    pub const fn get(&self, label: SentimentLabel) -> f64 {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }

    /// Sum of the three slices.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.positive + self.neutral + self.negative
    }

    /// What: Compute each slice's rounded share of the total, as shown in chart tooltips.
    ///
    /// Inputs: none
    ///
    /// Output:
    /// - `[positive, neutral, negative]` whole percentages of `total()`.
    ///
    /// Details:
    /// - A non-positive or non-finite total yields `[0, 0, 0]` instead of dividing by zero.
    /// - Negative slice values clamp to 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn slice_percentages(&self) -> [u8; 3] {
        let total = self.total();
        if !total.is_finite() || total <= 0.0 {
            return [0, 0, 0];
        }
        SentimentLabel::ALL.map(|label| {
            // Clamped into 0..=100 before the cast.
            (self.get(label) / total * 100.0).round().clamp(0.0, 100.0) as u8
        })
    }
}

/// Sentiment block of an analysis result.
///
/// Serialized with a `label` key. On input the label may come under `sentiment`
/// (the backend's key), `label`, or both when they agree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSentiment")]
pub struct Sentiment {
    /// Continuous score in `[0, 1]`, shown separately from the distribution.
    pub score: f64,
    /// Overall label.
    pub label: SentimentLabel,
    /// Optional three-way split; absent when the backend only provides a label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<Distribution>,
}

/// Wire form of [`Sentiment`] before the label keys are reconciled.
#[derive(Deserialize)]
struct RawSentiment {
    score: f64,
    #[serde(default)]
    sentiment: Option<SentimentLabel>,
    #[serde(default)]
    label: Option<SentimentLabel>,
    #[serde(default)]
    distribution: Option<Distribution>,
}

impl TryFrom<RawSentiment> for Sentiment {
    type Error = String;

    fn try_from(raw: RawSentiment) -> Result<Self, Self::Error> {
        let label = match (raw.sentiment, raw.label) {
            (Some(a), Some(b)) if a != b => {
                return Err(format!("conflicting sentiment labels `{a}` and `{b}`"));
            }
            (Some(l), _) | (None, Some(l)) => l,
            (None, None) => return Err("missing field `sentiment`".to_string()),
        };
        Ok(Self {
            score: raw.score,
            label,
            distribution: raw.distribution,
        })
    }
}

/// Complete analysis payload for one search.
///
/// Produced once per search by the analysis backend and only ever read here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Keyword frequencies, most frequent first.
    #[serde(default)]
    pub keywords: Vec<Keyword>,
    /// Hashtag frequencies, most frequent first.
    #[serde(default)]
    pub hashtags: Vec<Hashtag>,
    /// Sentiment summary.
    pub sentiment: Sentiment,
}

/// Hashtag with a display size relative to the most frequent tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaledHashtag {
    /// Tag text, unchanged.
    pub tag: String,
    /// Original count, unchanged.
    pub count: u64,
    /// Relative size in `0..=100`; the most frequent tag gets 100.
    #[serde(rename = "normalizedCount")]
    pub normalized_count: u8,
}

/// One word-cloud entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordCloudEntry {
    /// Word to draw.
    pub text: String,
    /// Log-compressed magnitude in `[0, 100]`; a sizing hint, not a frequency.
    pub value: f64,
}

/// Where a resolved distribution came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionOrigin {
    /// Supplied by the backend and passed through untouched.
    Upstream,
    /// Synthesized from the label alone (60/20/20). A display default, not an estimate.
    LabelDefault,
}

/// Distribution ready for the donut chart, tagged with its origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDistribution {
    /// Slice values.
    #[serde(flatten)]
    pub distribution: Distribution,
    /// Whether the values are real or the label-derived default.
    pub origin: DistributionOrigin,
}
