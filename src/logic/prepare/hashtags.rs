//! Hashtag count rescaling for bar sizing.

use super::constants::HASHTAG_SCALE_MAX;
use crate::state::types::{Hashtag, ScaledHashtag};

/// What: Rescale hashtag counts to `0..=100` relative to the most frequent tag.
///
/// Inputs:
/// - `hashtags`: Hashtags in upstream order.
///
/// Output:
/// - One [`ScaledHashtag`] per input, same order, original counts kept.
///
/// Details:
/// - The maximum is floored at 1, so all-zero input scales to all zeros.
/// - No sorting and no truncation.
#[must_use]
pub fn normalize(hashtags: &[Hashtag]) -> Vec<ScaledHashtag> {
    let max_count = hashtags.iter().map(|h| h.count).max().unwrap_or(0).max(1);
    hashtags
        .iter()
        .map(|h| ScaledHashtag {
            tag: h.tag.clone(),
            count: h.count,
            normalized_count: scale(h.count, max_count),
        })
        .collect()
}

/// Round `count / max * 100` into a display size.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn scale(count: u64, max_count: u64) -> u8 {
    // count <= max_count, so the ratio is within 0..=1
    let ratio = count as f64 / max_count as f64;
    (ratio * HASHTAG_SCALE_MAX)
        .round()
        .clamp(0.0, HASHTAG_SCALE_MAX) as u8
}
