//! Post collection → sentiment summary.

use std::path::Path;

use feedlens_core::{Post, PostCollection};
use serde::Serialize;

use crate::classifier::classify;
use crate::clean::clean_text;
use crate::error::SentimentError;
use crate::frequency::rank_negative_words;
use crate::lexicon::Lexicon;
use crate::scorer::SentimentAnalyzer;
use crate::stopwords::StopwordSet;
use crate::types::{SentimentCounts, SentimentLabel, WordCount};

/// Number of negative words reported when not configured.
pub const DEFAULT_TOP_K: usize = 10;

/// Everything the report layer renders.
///
/// `labels`, `cleaned_corpus` and `posts` are index-aligned.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub sentiment_counts: SentimentCounts,
    pub labels: Vec<SentimentLabel>,
    pub cleaned_corpus: Vec<String>,
    pub top_negative_words: Vec<WordCount>,
    pub posts: Vec<Post>,
}

impl AnalysisSummary {
    /// Percentage of posts per label, in Positive, Neutral, Negative order.
    /// All zeros for an empty summary.
    #[must_use]
    pub fn percentages(&self) -> [(SentimentLabel, f64); 3] {
        [
            SentimentLabel::Positive,
            SentimentLabel::Neutral,
            SentimentLabel::Negative,
        ]
        .map(|label| (label, self.sentiment_counts.share(label) * 100.0))
    }

    /// Cleaned posts joined into one word-cloud input string.
    #[must_use]
    pub fn cloud_text(&self) -> String {
        self.cleaned_corpus
            .iter()
            .filter(|text| !text.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Lexicon and stopwords, loaded once at startup and shared by every run.
#[derive(Debug, Clone, Default)]
pub struct AnalysisResources {
    pub analyzer: SentimentAnalyzer,
    pub stopwords: StopwordSet,
}

impl AnalysisResources {
    /// Loads replacement word lists where paths are given, falling back to the
    /// built-in lexicon and the English stopword list.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError`] if a given file is unreadable or malformed.
    pub fn load(
        lexicon_path: Option<&Path>,
        stopwords_path: Option<&Path>,
    ) -> Result<Self, SentimentError> {
        let lexicon = match lexicon_path {
            Some(path) => Lexicon::from_path(path)?,
            None => Lexicon::builtin(),
        };
        let stopwords = match stopwords_path {
            Some(path) => StopwordSet::from_path(path)?,
            None => StopwordSet::english(),
        };
        Ok(Self {
            analyzer: SentimentAnalyzer::new(lexicon),
            stopwords,
        })
    }
}

/// Classifies, cleans and ranks a post collection.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisPipeline<'a> {
    analyzer: &'a SentimentAnalyzer,
    stopwords: &'a StopwordSet,
    top_k: usize,
}

impl<'a> AnalysisPipeline<'a> {
    #[must_use]
    pub fn new(analyzer: &'a SentimentAnalyzer, stopwords: &'a StopwordSet, top_k: usize) -> Self {
        Self {
            analyzer,
            stopwords,
            top_k,
        }
    }

    #[must_use]
    pub fn from_resources(resources: &'a AnalysisResources, top_k: usize) -> Self {
        Self::new(&resources.analyzer, &resources.stopwords, top_k)
    }

    /// Runs the analysis. An empty collection yields an empty summary with
    /// zero counts.
    #[must_use]
    pub fn run(&self, posts: &PostCollection) -> AnalysisSummary {
        let posts: Vec<Post> = posts.iter().cloned().collect();

        let labels: Vec<SentimentLabel> = posts
            .iter()
            .map(|post| classify(self.analyzer, post.text()))
            .collect();
        let mut sentiment_counts = SentimentCounts::default();
        for &label in &labels {
            sentiment_counts.record(label);
        }

        let cleaned_corpus: Vec<String> = posts.iter().map(|post| clean_text(post.text())).collect();
        let top_negative_words = rank_negative_words(&posts, &labels, self.stopwords, self.top_k);

        tracing::info!(
            posts = posts.len(),
            positive = sentiment_counts.positive,
            neutral = sentiment_counts.neutral,
            negative = sentiment_counts.negative,
            "analysis complete"
        );

        AnalysisSummary {
            sentiment_counts,
            labels,
            cleaned_corpus,
            top_negative_words,
            posts,
        }
    }
}

/// One-shot form of [`AnalysisPipeline::run`].
#[must_use]
pub fn run_analysis(
    posts: &PostCollection,
    analyzer: &SentimentAnalyzer,
    stopwords: &StopwordSet,
    top_k: usize,
) -> AnalysisSummary {
    AnalysisPipeline::new(analyzer, stopwords, top_k).run(posts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_of(texts: &[&str]) -> AnalysisSummary {
        let posts = PostCollection::from_texts(texts.iter().copied(), 50);
        let resources = AnalysisResources::default();
        AnalysisPipeline::from_resources(&resources, DEFAULT_TOP_K).run(&posts)
    }

    #[test]
    fn empty_collection_yields_zero_counts() {
        let summary = summary_of(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.sentiment_counts, SentimentCounts::default());
        assert!(summary.labels.is_empty());
        assert!(summary.top_negative_words.is_empty());
        assert_eq!(summary.cloud_text(), "");
        for (_, pct) in summary.percentages() {
            assert_eq!(pct, 0.0);
        }
    }

    #[test]
    fn vectors_are_index_aligned() {
        let summary = summary_of(&["good times", "@x bad day http://y.z", "noon"]);
        assert_eq!(summary.labels.len(), 3);
        assert_eq!(summary.cleaned_corpus, ["good times", "bad day", "noon"]);
        assert_eq!(summary.posts[1].text(), "@x bad day http://y.z");
        assert_eq!(summary.labels[1], SentimentLabel::Negative);
    }

    #[test]
    fn percentages_sum_to_hundred() {
        let summary = summary_of(&["good", "bad", "noon", "great"]);
        let total: f64 = summary.percentages().iter().map(|(_, p)| p).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert_eq!(summary.percentages()[0], (SentimentLabel::Positive, 50.0));
    }

    #[test]
    fn cloud_text_skips_posts_that_clean_to_nothing() {
        let summary = summary_of(&["hello world", "#tag @user", "again"]);
        assert_eq!(summary.cloud_text(), "hello world again");
    }

    #[test]
    fn top_k_limits_negative_words() {
        let posts = PostCollection::from_texts(["awful dreadful grim weather"], 10);
        let resources = AnalysisResources::default();
        let summary = run_analysis(&posts, &resources.analyzer, &resources.stopwords, 1);
        assert_eq!(summary.top_negative_words.len(), 1);
        assert_eq!(summary.top_negative_words[0].word, "awful");
    }

    #[test]
    fn load_without_paths_uses_builtins() {
        let resources = AnalysisResources::load(None, None).unwrap();
        assert!(!resources.analyzer.lexicon().is_empty());
        assert!(resources.stopwords.contains("the"));
    }

    #[test]
    fn load_propagates_missing_file() {
        let err = AnalysisResources::load(Some(Path::new("/nonexistent/lexicon.txt")), None)
            .unwrap_err();
        assert!(matches!(err, SentimentError::Io { .. }));
    }

    #[test]
    fn summary_serializes_for_json_output() {
        let summary = summary_of(&["I love this! great day"]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["sentiment_counts"]["positive"], 1);
        assert_eq!(json["labels"][0], "Positive");
        assert_eq!(json["posts"][0], "I love this! great day");
    }
}
