//! Utility functions for slugs and log-friendly strings.
//!
//! - Slug derivation for WordPress post URLs
//! - String truncation for logging provider and CMS bodies
//! - JSON error detection for truncated model output

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum slug length in characters.
pub const SLUG_MAX_CHARS: usize = 70;

static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("static slug pattern"));
static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("static whitespace pattern"));

/// Convert a title to a URL-friendly slug.
///
/// Lowercases the text, removes everything except word characters,
/// whitespace and hyphens, turns each whitespace run into one hyphen and keeps
/// at most [`SLUG_MAX_CHARS`] characters. Applying it to its own output is a
/// no-op.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     slugify_title("Cara Membuat Website Cepat & SEO-Friendly!"),
///     "cara-membuat-website-cepat-seo-friendly"
/// );
/// ```
pub fn slugify_title(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RUNS.replace_all(&stripped, "-");
    hyphenated.chars().take(SLUG_MAX_CHARS).collect()
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to `max` bytes (on a character boundary) with an
/// ellipsis and byte count indicator appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Detect if a serde_json error indicates truncated/incomplete JSON.
///
/// A completion cut off by the token limit fails with an EOF error.
pub fn looks_truncated(e: &serde_json::Error) -> bool {
    use serde_json::error::Category;
    matches!(e.classify(), Category::Eof)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_title_reference_case() {
        assert_eq!(
            slugify_title("Cara Membuat Website Cepat & SEO-Friendly!"),
            "cara-membuat-website-cepat-seo-friendly"
        );
    }

    #[test]
    fn test_slugify_title() {
        assert_eq!(slugify_title("Hello World"), "hello-world");
        assert_eq!(slugify_title("Test-Article!"), "test-article");
        assert_eq!(slugify_title("Multiple   Spaces"), "multiple-spaces");
        assert_eq!(slugify_title("Tabs\tand\nnewlines"), "tabs-and-newlines");
        assert_eq!(slugify_title("Special@#$Characters"), "specialcharacters");
        assert_eq!(slugify_title("snake_case stays"), "snake_case-stays");
        assert_eq!(slugify_title("10 Tips SEO 2025"), "10-tips-seo-2025");
    }

    #[test]
    fn test_slugify_title_truncates_to_limit() {
        let title = "kata ".repeat(40);
        let slug = slugify_title(&title);
        assert_eq!(slug.chars().count(), SLUG_MAX_CHARS);
        assert!(slug.starts_with("kata-kata-"));
    }

    #[test]
    fn test_slugify_title_is_idempotent_and_clean() {
        let titles = [
            "Cara Membuat Website Cepat & SEO-Friendly!",
            "  Panduan Lengkap: Hosting vs. Domain (2025)  ",
            "Ünïcödé Tïtlé — with “quotes”",
            &"Judul yang sangat panjang sekali ".repeat(5),
            "",
        ];
        for title in titles {
            let once = slugify_title(title);
            assert_eq!(slugify_title(&once), once, "not idempotent for {title:?}");
            assert!(once.chars().count() <= SLUG_MAX_CHARS);
            assert!(
                once.chars()
                    .all(|c| c == '-' || c == '_' || (c.is_alphanumeric() && !c.is_uppercase())),
                "unexpected character in {once:?}"
            );
        }
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        let s = "Hello, world!";
        assert_eq!(truncate_for_log(s, 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundary() {
        let s = "é".repeat(10);
        let result = truncate_for_log(&s, 5);
        assert!(result.starts_with("éé…"));
    }

    #[test]
    fn test_looks_truncated() {
        let json_eof = r#"{"field": "value"#;
        let err = serde_json::from_str::<serde_json::Value>(json_eof).unwrap_err();
        assert!(looks_truncated(&err));

        let json_bad = r#"{"field": nope}"#;
        let err = serde_json::from_str::<serde_json::Value>(json_bad).unwrap_err();
        assert!(!looks_truncated(&err));
    }
}
