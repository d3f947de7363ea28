//! Terminal and JSON rendering of an analysis run.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use feedlens_core::SourceHandle;
use feedlens_scraper::{CollectionReport, StopReason};
use feedlens_sentiment::{word_frequencies, AnalysisSummary, StopwordSet};
use serde::Serialize;

const BAR_WIDTH: usize = 30;
const CLOUD_TERMS: usize = 20;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    handle: &'a str,
    url: &'a str,
    stop_reason: StopReason,
    scrolls: u32,
    render_timed_out: bool,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
    #[serde(flatten)]
    summary: &'a AnalysisSummary,
}

/// Serializes the run metadata and summary as one pretty-printed object.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub(crate) fn json_report(
    handle: &SourceHandle,
    collection: &CollectionReport,
    summary: &AnalysisSummary,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        handle: handle.as_str(),
        url: &collection.url,
        stop_reason: collection.stop_reason,
        scrolls: collection.scrolls,
        render_timed_out: collection.render_timed_out,
        started_at: collection.started_at,
        finished_at: collection.finished_at,
        summary,
    })
}

fn bar(count: usize, max: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (count * BAR_WIDTH).div_ceil(max)
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Writes the human-readable report: distribution chart, cloud terms,
/// negative-word table and the enumerated posts.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn write_report(
    out: &mut impl Write,
    handle: &SourceHandle,
    collection: &CollectionReport,
    summary: &AnalysisSummary,
    stopwords: &StopwordSet,
) -> io::Result<()> {
    let elapsed = collection.finished_at - collection.started_at;
    writeln!(out, "# Sentiment report for @{handle}")?;
    writeln!(out)?;
    writeln!(out, "Source:   {}", collection.url)?;
    writeln!(
        out,
        "Posts:    {} in {} scrolls ({}), {:.1}s",
        summary.posts.len(),
        collection.scrolls,
        collection.stop_reason,
        elapsed.num_milliseconds() as f64 / 1000.0
    )?;
    writeln!(out)?;

    writeln!(out, "## Sentiment distribution")?;
    let max = summary
        .percentages()
        .iter()
        .map(|(label, _)| summary.sentiment_counts.get(*label))
        .max()
        .unwrap_or(0);
    for (label, pct) in summary.percentages() {
        let count = summary.sentiment_counts.get(label);
        writeln!(
            out,
            "{:<10}{} {count:>4} ({pct:.1}%)",
            label.to_string(),
            bar(count, max)
        )?;
    }
    writeln!(out)?;

    writeln!(out, "## Word cloud terms")?;
    let cloud = word_frequencies(&summary.cleaned_corpus, stopwords);
    if cloud.is_empty() {
        writeln!(out, "(no terms)")?;
    } else {
        let terms: Vec<String> = cloud
            .iter()
            .take(CLOUD_TERMS)
            .map(|w| format!("{} ({})", w.word, w.count))
            .collect();
        writeln!(out, "{}", terms.join(", "))?;
    }
    writeln!(out)?;

    writeln!(out, "## Top negative words")?;
    if summary.top_negative_words.is_empty() {
        writeln!(out, "(no negative posts)")?;
    } else {
        writeln!(out, "{:<20}COUNT", "WORD")?;
        for word in &summary.top_negative_words {
            writeln!(out, "{:<20}{}", word.word, word.count)?;
        }
    }
    writeln!(out)?;

    writeln!(out, "## Posts")?;
    for (index, (post, label)) in summary.posts.iter().zip(&summary.labels).enumerate() {
        writeln!(out, "{:>3}. [{label}] {post}", index + 1)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use feedlens_core::PostCollection;
    use feedlens_sentiment::{run_analysis, AnalysisResources};

    fn fixture(texts: &[&str]) -> (SourceHandle, CollectionReport, AnalysisSummary, StopwordSet) {
        let handle = SourceHandle::parse("@nasa").unwrap();
        let posts = PostCollection::from_texts(texts.iter().copied(), 50);
        let resources = AnalysisResources::default();
        let summary = run_analysis(&posts, &resources.analyzer, &resources.stopwords, 10);
        let now = Utc::now();
        let collection = CollectionReport {
            url: "https://twitter.com/nasa".to_string(),
            posts,
            stop_reason: StopReason::Stalled,
            scrolls: 2,
            render_timed_out: false,
            started_at: now,
            finished_at: now,
        };
        (handle, collection, summary, resources.stopwords)
    }

    fn render(texts: &[&str]) -> String {
        let (handle, collection, summary, stopwords) = fixture(texts);
        let mut out = Vec::new();
        write_report(&mut out, &handle, &collection, &summary, &stopwords).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn bar_scales_to_largest_count() {
        assert_eq!(bar(2, 2).chars().filter(|c| *c == '█').count(), BAR_WIDTH);
        assert_eq!(bar(1, 2).chars().filter(|c| *c == '█').count(), BAR_WIDTH / 2);
        assert_eq!(bar(0, 2).chars().filter(|c| *c == '░').count(), BAR_WIDTH);
        assert_eq!(bar(0, 0).chars().count(), BAR_WIDTH);
    }

    #[test]
    fn report_contains_every_section() {
        let text = render(&[
            "I love this! great day",
            "it is fine",
            "this is bad and terrible, bad!",
        ]);
        assert!(text.contains("# Sentiment report for @nasa"));
        assert!(text.contains("Positive"));
        assert!(text.contains("(33.3%)"));
        assert!(text.contains("bad (2)"));
        assert!(text.contains("bad                 2"));
        assert!(text.contains("  3. [Negative] this is bad and terrible, bad!"));
    }

    #[test]
    fn report_without_negative_posts_says_so() {
        let text = render(&["what a wonderful day"]);
        assert!(text.contains("(no negative posts)"));
    }

    #[test]
    fn json_report_flattens_summary() {
        let (handle, collection, summary, _) = fixture(&["I love this! great day"]);
        let json: serde_json::Value =
            serde_json::from_str(&json_report(&handle, &collection, &summary).unwrap()).unwrap();
        assert_eq!(json["handle"], "nasa");
        assert_eq!(json["stop_reason"], "stalled");
        assert_eq!(json["sentiment_counts"]["positive"], 1);
        assert_eq!(json["posts"][0], "I love this! great day");
    }
}
