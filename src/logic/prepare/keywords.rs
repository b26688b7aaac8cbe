//! Keyword noise removal and list capping.

use super::constants::{KEYWORD_LIMIT, STOP_WORDS};
use crate::state::types::Keyword;

/// What: Check whether a keyword is one of the URL-fragment stop words.
///
/// Inputs:
/// - `word`: Keyword text as received.
///
/// Output:
/// - `true` when the lower-cased text exactly equals a stop word.
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    let lower = word.to_lowercase();
    STOP_WORDS.contains(&lower.as_str())
}

/// What: Drop stop words and keep at most [`KEYWORD_LIMIT`] keywords.
///
/// Inputs:
/// - `keywords`: Keywords in upstream order (most frequent first).
///
/// Output:
/// - Surviving keywords, input order preserved, never more than the limit.
///
/// Details:
/// - Does not sort. Truncation happens after filtering, so stop words never
///   consume slots.
/// - An empty result is a normal outcome; callers show a "no data" state.
#[must_use]
pub fn filter(keywords: &[Keyword]) -> Vec<Keyword> {
    keywords
        .iter()
        .filter(|kw| !is_stop_word(&kw.word))
        .take(KEYWORD_LIMIT)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(word: &str, count: u64) -> Keyword {
        Keyword {
            word: word.to_string(),
            count,
        }
    }

    #[test]
    fn stop_words_match_case_insensitively() {
        assert!(is_stop_word("HTTPS"));
        assert!(is_stop_word("Www"));
        assert!(is_stop_word("tco"));
        assert!(!is_stop_word("t.co"));
        assert!(!is_stop_word("https://"));
        assert!(!is_stop_word("comet"));
    }

    #[test]
    fn filter_removes_stop_words_and_keeps_order() {
        let input = vec![kw("rust", 9), kw("HTTPS", 8), kw("async", 7), kw("com", 6)];
        let out = filter(&input);
        assert_eq!(out, vec![kw("rust", 9), kw("async", 7)]);
        assert!(filter(&[kw("HTTPS", 5)]).is_empty());
        assert!(filter(&[]).is_empty());
    }

    #[test]
    /// What: Cap applies after filtering.
    ///
    /// Inputs:
    /// - 10 stop words followed by 60 real keywords.
    ///
    /// Output:
    /// - Exactly 50 entries, starting with the first real keyword.
    fn filter_caps_after_removal() {
        let mut input: Vec<Keyword> = (0..10).map(|_| kw("http", 100)).collect();
        input.extend((0..60).map(|i| kw(&format!("w{i}"), 60 - i)));
        let out = filter(&input);
        assert_eq!(out.len(), KEYWORD_LIMIT);
        assert_eq!(out[0].word, "w0");
        assert_eq!(out[49].word, "w49");
    }
}
