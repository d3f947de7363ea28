//! Word-frequency ranking over cleaned post text.

use std::collections::HashMap;

use crate::classifier::classify;
use crate::clean::clean_text;
use crate::scorer::SentimentAnalyzer;
use crate::stopwords::StopwordSet;
use crate::types::{SentimentLabel, WordCount};

/// Counts lowercase words in insertion order so ties rank by first sighting.
#[derive(Debug, Default)]
struct FrequencyTable {
    index: HashMap<String, usize>,
    counts: Vec<WordCount>,
}

impl FrequencyTable {
    fn add_text(&mut self, text: &str, stopwords: &StopwordSet) {
        for word in text.split_whitespace() {
            let word = word.to_lowercase();
            if stopwords.contains(&word) {
                continue;
            }
            if let Some(&slot) = self.index.get(&word) {
                self.counts[slot].count += 1;
            } else {
                self.index.insert(word.clone(), self.counts.len());
                self.counts.push(WordCount { word, count: 1 });
            }
        }
    }

    fn ranked(mut self) -> Vec<WordCount> {
        // Stable sort keeps first-seen order among equal counts.
        self.counts.sort_by(|a, b| b.count.cmp(&a.count));
        self.counts
    }
}

/// Ranks the non-stopword words of already-cleaned `texts`, most frequent
/// first.
#[must_use]
pub fn word_frequencies<T: AsRef<str>>(texts: &[T], stopwords: &StopwordSet) -> Vec<WordCount> {
    let mut table = FrequencyTable::default();
    for text in texts {
        table.add_text(text.as_ref(), stopwords);
    }
    table.ranked()
}

/// The `k` most frequent words across posts classified Negative.
///
/// Posts are classified on their raw text and counted on their cleaned text.
#[must_use]
pub fn top_negative_words<T: AsRef<str>>(
    posts: &[T],
    analyzer: &SentimentAnalyzer,
    stopwords: &StopwordSet,
    k: usize,
) -> Vec<WordCount> {
    let labels: Vec<SentimentLabel> = posts.iter().map(|p| classify(analyzer, p.as_ref())).collect();
    rank_negative_words(posts, &labels, stopwords, k)
}

/// Same as [`top_negative_words`] with labels already computed.
pub(crate) fn rank_negative_words<T: AsRef<str>>(
    posts: &[T],
    labels: &[SentimentLabel],
    stopwords: &StopwordSet,
    k: usize,
) -> Vec<WordCount> {
    let mut table = FrequencyTable::default();
    for (post, label) in posts.iter().zip(labels) {
        if *label == SentimentLabel::Negative {
            table.add_text(&clean_text(post.as_ref()), stopwords);
        }
    }
    let mut ranked = table.ranked();
    ranked.truncate(k);
    ranked
}
