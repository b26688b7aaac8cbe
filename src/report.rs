//! Plain-text rendering of prepared results for terminal output.

use std::fmt::Write;

use crate::logic::prepare::PreparedResult;
use crate::state::types::{DistributionOrigin, SentimentLabel};
use crate::util::{pad_to_width, truncate_to_width};

/// Column budget for keyword and hashtag text.
const TERM_WIDTH: usize = 24;
/// Bar length representing `normalizedCount == 100`.
const BAR_WIDTH: usize = 20;

/// Shown when no keyword survives filtering.
pub const NO_KEYWORDS: &str = "No relevant keywords found";
/// Shown when the hashtag list is empty.
pub const NO_HASHTAGS: &str = "No hashtags to display";

/// What: Render a prepared result as a multi-section text report.
///
/// Inputs:
/// - `prepared`: Output of [`crate::logic::prepare::prepare`].
///
/// Output:
/// - Report text with sentiment, keyword and hashtag sections.
///
/// Details:
/// - Empty sections print an explicit "no data" line instead of being omitted.
/// - Label-default distributions are marked as such.
#[must_use]
pub fn render_text(prepared: &PreparedResult) -> String {
    let mut out = String::new();
    render_sentiment(&mut out, prepared);
    out.push('\n');
    render_keywords(&mut out, prepared);
    out.push('\n');
    render_hashtags(&mut out, prepared);
    out
}

/// Sentiment score, slice values and tooltip shares.
fn render_sentiment(out: &mut String, prepared: &PreparedResult) {
    let resolved = &prepared.distribution;
    let _ = writeln!(
        out,
        "Sentiment: {} (score {}%)",
        prepared.label, prepared.score_percent
    );
    let shares = resolved.distribution.slice_percentages();
    for (label, share) in SentimentLabel::ALL.iter().zip(shares) {
        let _ = writeln!(
            out,
            "  {} {:>6.1} ({share}%)",
            pad_to_width(label.as_str(), 9),
            resolved.distribution.get(*label)
        );
    }
    if resolved.origin == DistributionOrigin::LabelDefault {
        let _ = writeln!(out, "  (default split from label; no distribution supplied)");
    }
}

/// Ranked keyword list with cloud sizes.
fn render_keywords(out: &mut String, prepared: &PreparedResult) {
    let _ = writeln!(out, "Top keywords ({} terms)", prepared.keywords.len());
    if !prepared.has_keywords() {
        let _ = writeln!(out, "  {NO_KEYWORDS}");
        return;
    }
    for ((rank, kw), entry) in prepared.ranked_keywords().zip(&prepared.cloud) {
        let word = pad_to_width(&truncate_to_width(&kw.word, TERM_WIDTH), TERM_WIDTH);
        let _ = writeln!(
            out,
            "  {rank:>3}. {word} {:>8}  cloud {:>5.1}",
            kw.count, entry.value
        );
    }
}

/// Ranked hashtag list with proportional bars.
fn render_hashtags(out: &mut String, prepared: &PreparedResult) {
    let _ = writeln!(out, "Trending hashtags");
    if !prepared.has_hashtags() {
        let _ = writeln!(out, "  {NO_HASHTAGS}");
        return;
    }
    for (rank, h) in prepared.ranked_hashtags() {
        let tag = pad_to_width(&truncate_to_width(&h.tag, TERM_WIDTH), TERM_WIDTH);
        let _ = writeln!(
            out,
            "  {rank:>3}. {tag} {:>8}  {}",
            h.count,
            bar(h.normalized_count)
        );
    }
}

/// Bar of `#` proportional to a `0..=100` size; non-zero sizes get at least one cell.
fn bar(normalized: u8) -> String {
    let cells = usize::from(normalized) * BAR_WIDTH / 100;
    let cells = if normalized > 0 { cells.max(1) } else { 0 };
    "#".repeat(cells)
}
