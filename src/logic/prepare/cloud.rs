//! Word-cloud sizing.

use super::constants::{CLOUD_LOG_FACTOR, CLOUD_VALUE_CAP};
use crate::state::types::{Keyword, WordCloudEntry};

/// What: Map filtered keywords to word-cloud entries with log-compressed sizes.
///
/// Inputs:
/// - `filtered`: Keywords that already went through [`super::keywords::filter`].
///
/// Output:
/// - One entry per keyword, same order, `value = min(ln(count + 1) * 20, 100)`.
///
/// Details:
/// - The `+ 1` keeps a zero count at value 0 instead of `ln(0)`.
#[must_use]
pub fn project(filtered: &[Keyword]) -> Vec<WordCloudEntry> {
    filtered
        .iter()
        .map(|kw| WordCloudEntry {
            text: kw.word.clone(),
            value: cloud_value(kw.count),
        })
        .collect()
}

/// Log-compressed size for a single count.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn cloud_value(count: u64) -> f64 {
    // ln_1p keeps u64::MAX from overflowing the +1
    ((count as f64).ln_1p() * CLOUD_LOG_FACTOR).min(CLOUD_VALUE_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_maps_to_zero() {
        let out = project(&[Keyword {
            word: "x".into(),
            count: 0,
        }]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "x");
        assert!(out[0].value.abs() < f64::EPSILON);
    }

    #[test]
    /// What: Large counts hit the cap exactly; moderate ones stay below it.
    ///
    /// Inputs:
    /// - Counts 10, 147 and 1,000,000.
    ///
    /// Output:
    /// - `ln(11) * 20`, just under 100, and exactly 100.
    fn values_compress_then_cap() {
        assert!((cloud_value(10) - 11f64.ln() * 20.0).abs() < 1e-9);
        // ln(148) * 20 = 99.94
        assert!(cloud_value(147) < 100.0);
        assert!((cloud_value(1_000_000) - 100.0).abs() < f64::EPSILON);
        assert!((cloud_value(u64::MAX) - 100.0).abs() < f64::EPSILON);
    }
}
