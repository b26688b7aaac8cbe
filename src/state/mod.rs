//! Data model for analysis input, prepared output and the search flow.

pub mod search;
pub mod types;

pub use search::{
    AnalyzeRequest, Platform, SearchFlow, SearchPhase, SearchRequest, Timeframe, failure_message,
};
pub use types::{
    AnalysisResult, Distribution, DistributionOrigin, Hashtag, Keyword, ResolvedDistribution,
    ScaledHashtag, Sentiment, SentimentLabel, WordCloudEntry,
};
