//! Configuration file parsing utilities.
//!
//! This module provides helpers for parsing configuration files with common
//! patterns like comment skipping and key-value parsing.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a `key = value` line into a normalized key and its value.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=` character.
/// - Keys are lower-cased with `.`, `-` and spaces mapped to `_`.
/// - Inline comments are stripped from the value.
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (raw_key, raw_val) = line.trim().split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(raw_val).to_string()))
}

/// What: Remove a trailing `#` or `//` comment from a value.
///
/// Inputs:
/// - `s`: Raw value text.
///
/// Output:
/// - Trimmed value without the comment.
///
/// Details:
/// - `//` directly after a URL scheme (`http://`) is not a comment.
#[must_use]
pub fn strip_inline_comment(s: &str) -> &str {
    let mut end = s.len();
    if let Some(i) = s.find(" //") {
        end = end.min(i);
    }
    if let Some(i) = s.find('#') {
        end = end.min(i);
    }
    s[..end].trim()
}

/// What: Interpret common truthy spellings.
///
/// Inputs:
/// - `s`: Raw value.
///
/// Output:
/// - `true` for `true`, `1`, `yes`, `on` (case-insensitive); `false` otherwise.
#[must_use]
pub fn parse_bool(s: &str) -> bool {
    matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blanks_are_skipped() {
        assert!(skip_comment_or_empty("   "));
        assert!(skip_comment_or_empty("# note"));
        assert!(skip_comment_or_empty("// note"));
        assert!(skip_comment_or_empty("; note"));
        assert!(!skip_comment_or_empty("api_url = x"));
    }

    #[test]
    /// What: Keys normalize and inline comments drop, URLs survive.
    ///
    /// Inputs:
    /// - Lines with dashed keys, URL values and trailing comments.
    ///
    /// Output:
    /// - Normalized key and clean value.
    fn key_value_parsing() {
        assert_eq!(
            parse_key_value("API-Url = http://localhost:8000 # local backend"),
            Some(("api_url".into(), "http://localhost:8000".into()))
        );
        assert_eq!(
            parse_key_value("output.format=text // plain"),
            Some(("output_format".into(), "text".into()))
        );
        assert_eq!(parse_key_value("no equals here"), None);
        assert_eq!(parse_key_value(" = value"), None);
    }

    #[test]
    fn bool_spellings() {
        assert!(parse_bool("Yes"));
        assert!(parse_bool(" on "));
        assert!(!parse_bool("off"));
        assert!(!parse_bool(""));
    }
}
