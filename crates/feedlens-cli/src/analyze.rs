//! `analyze` and `score` command handlers.

use std::process::ExitCode;

use anyhow::Context;
use feedlens_core::{AppConfig, CoreError, SourceHandle};
use feedlens_scraper::{
    CollectorConfig, PostExtractor, ScraperError, ScrollCollector, WebDriverOptions,
    WebDriverRenderer,
};
use feedlens_sentiment::{classify, clean_text, AnalysisPipeline, AnalysisResources};

use crate::report;

/// How an `analyze` run ended, as seen by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunStatus {
    /// Report printed, including the "no posts" case.
    Completed,
    /// Handle rejected; no browser session was opened.
    InvalidInput,
    /// Browser session or collection failed.
    CollectionFailed,
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Completed => ExitCode::SUCCESS,
            RunStatus::InvalidInput => ExitCode::from(2),
            RunStatus::CollectionFailed => ExitCode::FAILURE,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct AnalyzeArgs {
    pub handle: String,
    pub max_scrolls: Option<u32>,
    pub max_posts: Option<usize>,
    pub top_k: Option<usize>,
    pub json: bool,
}

/// Collector settings from config, with command-line overrides applied.
pub(crate) fn collector_config(config: &AppConfig, args: &AnalyzeArgs) -> CollectorConfig {
    let mut collector = CollectorConfig::from_app_config(config);
    if let Some(max_scrolls) = args.max_scrolls {
        collector.max_scrolls = max_scrolls;
    }
    if let Some(max_posts) = args.max_posts {
        collector.max_posts = max_posts;
    }
    collector
}

fn load_resources(config: &AppConfig) -> anyhow::Result<AnalysisResources> {
    AnalysisResources::load(config.lexicon_path.as_deref(), config.stopwords_path.as_deref())
        .context("failed to load sentiment word lists")
}

/// Collect posts for one handle, analyze them and print the report.
///
/// Input and collection failures are reported on stderr and mapped to a
/// [`RunStatus`]; only setup failures (word lists, selectors) return `Err`.
///
/// # Errors
///
/// Returns an error if the word lists or post selectors cannot be loaded,
/// or if the JSON report cannot be serialized.
pub(crate) async fn run_analyze(config: &AppConfig, args: &AnalyzeArgs) -> anyhow::Result<RunStatus> {
    let handle = match SourceHandle::parse(&args.handle) {
        Ok(handle) => handle,
        Err(CoreError::EmptyInput) => {
            eprintln!("Please enter a valid username.");
            return Ok(RunStatus::InvalidInput);
        }
        Err(e) => {
            eprintln!("{e}");
            return Ok(RunStatus::InvalidInput);
        }
    };

    let resources = load_resources(config)?;
    let extractor = PostExtractor::new(&config.post_selector, &config.text_selector)
        .context("invalid post selectors")?;
    let collector = ScrollCollector::new(collector_config(config, args), extractor);
    let top_k = args.top_k.unwrap_or(config.top_k);

    let renderer =
        match WebDriverRenderer::start(&config.webdriver_url, &WebDriverOptions::from_app_config(config))
            .await
        {
            Ok(renderer) => renderer,
            Err(e) => {
                tracing::error!(endpoint = %config.webdriver_url, error = %e, "failed to start browser session");
                eprintln!(
                    "Could not start a browser session at {}: {e}",
                    config.webdriver_url
                );
                return Ok(RunStatus::CollectionFailed);
            }
        };

    let collection = match collector.collect_and_release(renderer, &handle).await {
        Ok(collection) => collection,
        Err(ScraperError::Navigation { url, reason }) => {
            eprintln!("Could not reach {url}: {reason}");
            return Ok(RunStatus::CollectionFailed);
        }
        Err(e) => {
            tracing::error!(handle = %handle, error = %e, "collection failed");
            eprintln!("Collection failed for @{handle}: {e}");
            return Ok(RunStatus::CollectionFailed);
        }
    };

    if collection.render_timed_out {
        eprintln!(
            "warning: no posts rendered within {}s of loading {}; results may be incomplete",
            config.load_timeout_secs, collection.url
        );
    }

    let summary = AnalysisPipeline::from_resources(&resources, top_k).run(&collection.posts);

    if args.json {
        let json = report::json_report(&handle, &collection, &summary)?;
        println!("{json}");
        return Ok(RunStatus::Completed);
    }

    if summary.is_empty() {
        println!("No posts found or unable to fetch data.");
        return Ok(RunStatus::Completed);
    }

    let stdout = std::io::stdout();
    report::write_report(
        &mut stdout.lock(),
        &handle,
        &collection,
        &summary,
        &resources.stopwords,
    )
    .context("failed to write report")?;
    Ok(RunStatus::Completed)
}

/// Print the scores, label and cleaned form of one text.
///
/// # Errors
///
/// Returns an error if the configured word lists cannot be loaded.
pub(crate) fn run_score(config: &AppConfig, text: &str) -> anyhow::Result<()> {
    let resources = load_resources(config)?;
    let scores = resources.analyzer.polarity_scores(text);
    let label = classify(&resources.analyzer, text);

    println!("label:    {label}");
    println!("compound: {:.4}", scores.compound);
    println!(
        "pos/neu/neg: {:.3} / {:.3} / {:.3}",
        scores.pos, scores.neu, scores.neg
    );
    println!("cleaned:  {}", clean_text(text));
    Ok(())
}
