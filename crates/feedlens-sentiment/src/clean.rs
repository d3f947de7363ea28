//! Post text normalization for word counting and word-cloud input.

use std::sync::LazyLock;

use regex::Regex;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\S+").expect("valid regex"));
static MENTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\w+").expect("valid regex"));
static HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\w+").expect("valid regex"));
static NON_ALNUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9\s]").expect("valid regex"));

/// Strips URLs, `@mentions`, `#hashtags` and every character outside
/// `[A-Za-z0-9]` and whitespace, then collapses whitespace runs to single
/// spaces and trims the ends.
///
/// URL-like words that only form once punctuation is gone (`ht-tp://` →
/// `http`) are removed by a second URL pass, so `clean_text` is idempotent.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let text = URL_RE.replace_all(text, "");
    let text = MENTION_RE.replace_all(&text, "");
    let text = HASHTAG_RE.replace_all(&text, "");
    let text = NON_ALNUM_RE.replace_all(&text, "");
    let text = URL_RE.replace_all(&text, "");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
