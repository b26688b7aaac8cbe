//! Small utility helpers for configuration parsing and text layout.

pub mod config;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Truncate a string to at most `max` terminal columns.
///
/// Inputs:
/// - `s`: Text to fit.
/// - `max`: Column budget.
///
/// Output:
/// - `s` unchanged when it fits; otherwise a prefix ending in `…` within `max` columns.
///
/// Details:
/// - Width is measured with `unicode-width`, so wide CJK glyphs and emoji count as two columns.
#[must_use]
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        // keep one column for the ellipsis
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Right-pad `s` with spaces to `width` columns (no truncation).
#[must_use]
pub fn pad_to_width(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        return s.to_string();
    }
    format!("{s}{}", " ".repeat(width - w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("rust", 10), "rust");
        assert_eq!(truncate_to_width("rustacean", 5), "rust…");
        // each CJK glyph is two columns wide
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn padding_uses_display_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("日本", 5), "日本 ");
        assert_eq!(pad_to_width("long", 2), "long");
    }
}
