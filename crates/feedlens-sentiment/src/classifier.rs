//! Compound-score thresholds and per-post labelling.

use crate::scorer::SentimentAnalyzer;
use crate::types::SentimentLabel;

/// Compound scores at or above this are [`SentimentLabel::Positive`].
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound scores at or below this are [`SentimentLabel::Negative`].
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

#[must_use]
pub fn label_for_score(score: f64) -> SentimentLabel {
    if score >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Labels raw post text. Scoring runs on the uncleaned text so emphasis
/// (capitals, `!`) still counts.
#[must_use]
pub fn classify(analyzer: &SentimentAnalyzer, text: &str) -> SentimentLabel {
    label_for_score(analyzer.compound(text))
}
