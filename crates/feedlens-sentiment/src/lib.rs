//! Text analytics for scraped posts.
//!
//! Scores each post with a rule-based lexicon analyzer, buckets the compound
//! score into Positive / Neutral / Negative, cleans post text for word
//! clouds, and ranks the words that dominate negative posts.

pub mod classifier;
pub mod clean;
pub mod error;
pub mod frequency;
pub mod lexicon;
pub mod pipeline;
pub mod scorer;
pub mod stopwords;
pub mod types;

pub use classifier::{classify, label_for_score, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use clean::clean_text;
pub use error::SentimentError;
pub use frequency::{top_negative_words, word_frequencies};
pub use lexicon::Lexicon;
pub use pipeline::{
    run_analysis, AnalysisPipeline, AnalysisResources, AnalysisSummary, DEFAULT_TOP_K,
};
pub use scorer::SentimentAnalyzer;
pub use stopwords::StopwordSet;
pub use types::{PolarityScores, SentimentCounts, SentimentLabel, WordCount};
