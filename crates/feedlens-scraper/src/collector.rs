//! Scroll-and-collect loop over a [`PageRenderer`].
//!
//! The loop stops at the first of:
//! - the collection reaching `max_posts`,
//! - `stall_limit` consecutive iterations adding no unseen post,
//! - `max_scrolls` iterations.
//!
//! The stall rule treats "nothing new this iteration" as "end of content".
//! On a slow network a scroll can come back before the next batch renders,
//! which ends collection early. Raising `stall_limit` or `settle_delay`
//! trades run time for fewer early stops.

use std::time::Duration;

use chrono::{DateTime, Utc};
use feedlens_core::{AppConfig, PostCollection, SourceHandle, MAX_LOAD_TIMEOUT_SECS};
use serde::Serialize;

use crate::error::ScraperError;
use crate::extract::PostExtractor;
use crate::renderer::{LoadStatus, PageRenderer};

/// Lower bound for the initial-wait poll interval.
const MIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Upper bound for the initial wait, whatever `load_timeout` says.
const MAX_LOAD_TIMEOUT: Duration = Duration::from_secs(MAX_LOAD_TIMEOUT_SECS);

#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub profile_url_template: String,
    pub max_scrolls: u32,
    pub max_posts: usize,
    /// Pause after each scroll before reading the page.
    pub settle_delay: Duration,
    /// How long to wait for the first post to render after navigation.
    pub load_timeout: Duration,
    pub poll_interval: Duration,
    pub stall_limit: u32,
}

impl CollectorConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            profile_url_template: config.profile_url_template.clone(),
            max_scrolls: config.max_scrolls,
            max_posts: config.max_posts,
            settle_delay: Duration::from_millis(config.settle_delay_ms),
            load_timeout: Duration::from_secs(config.load_timeout_secs),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            stall_limit: config.stall_limit,
        }
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            profile_url_template: "https://twitter.com/{handle}".to_string(),
            max_scrolls: 5,
            max_posts: 50,
            settle_delay: Duration::from_secs(3),
            load_timeout: Duration::from_secs(10),
            poll_interval: Duration::from_millis(500),
            stall_limit: 1,
        }
    }
}

/// Why the scroll loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    MaxPosts,
    Stalled,
    MaxScrolls,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::MaxPosts => write!(f, "post limit reached"),
            StopReason::Stalled => write!(f, "no new posts after scrolling"),
            StopReason::MaxScrolls => write!(f, "scroll limit reached"),
        }
    }
}

/// Outcome of one collection run.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionReport {
    pub url: String,
    pub posts: PostCollection,
    pub stop_reason: StopReason,
    /// Scroll iterations performed.
    pub scrolls: u32,
    /// No post rendered within the load timeout. Collection still ran.
    pub render_timed_out: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

pub struct ScrollCollector {
    config: CollectorConfig,
    extractor: PostExtractor,
}

impl ScrollCollector {
    #[must_use]
    pub fn new(config: CollectorConfig, extractor: PostExtractor) -> Self {
        Self { config, extractor }
    }

    #[must_use]
    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// Runs [`Self::collect`] and then releases `renderer`, whatever the outcome.
    ///
    /// A failure to release is logged; it never replaces the collection result.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::collect`].
    pub async fn collect_and_release<R: PageRenderer>(
        &self,
        mut renderer: R,
        handle: &SourceHandle,
    ) -> Result<CollectionReport, ScraperError> {
        let result = self.collect(&mut renderer, handle).await;
        if let Err(e) = renderer.close().await {
            tracing::warn!(handle = %handle, error = %e, "failed to release renderer session");
        } else {
            tracing::debug!(handle = %handle, "renderer session released");
        }
        result
    }

    /// Loads the profile for `handle` and scrolls until a stop condition holds.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Navigation`] if the profile cannot be reached.
    /// - Any renderer error raised while scrolling or reading the page.
    pub async fn collect<R: PageRenderer>(
        &self,
        renderer: &mut R,
        handle: &SourceHandle,
    ) -> Result<CollectionReport, ScraperError> {
        let started_at = Utc::now();
        let url = handle.target_url(&self.config.profile_url_template);

        tracing::info!(handle = %handle, url = %url, "loading profile");
        if renderer.load(&url).await? == LoadStatus::TimedOut {
            tracing::warn!(url = %url, "page load timed out; reading what has rendered");
        }

        let render_timed_out = !self.wait_for_posts(renderer).await?;
        if render_timed_out {
            tracing::warn!(
                url = %url,
                timeout_ms = u64::try_from(self.config.load_timeout.as_millis()).unwrap_or(u64::MAX),
                "no posts rendered within the load timeout; continuing"
            );
        }

        let mut posts = PostCollection::new(self.config.max_posts);
        let mut scrolls = 0u32;
        let mut stalled = 0u32;

        let stop_reason = loop {
            if scrolls >= self.config.max_scrolls {
                break StopReason::MaxScrolls;
            }
            scrolls += 1;

            renderer.scroll_to_end().await?;
            tokio::time::sleep(self.config.settle_delay).await;
            let html = renderer.current_content().await?;

            let mut added = 0usize;
            for text in self.extractor.extract(&html) {
                if posts.is_full() {
                    break;
                }
                if posts.insert(text) {
                    added += 1;
                }
            }
            tracing::debug!(scroll = scrolls, added, total = posts.len(), "scroll iteration");

            if posts.is_full() {
                break StopReason::MaxPosts;
            }
            if added == 0 {
                stalled += 1;
                if stalled >= self.config.stall_limit {
                    break StopReason::Stalled;
                }
            } else {
                stalled = 0;
            }
        };

        tracing::info!(
            handle = %handle,
            posts = posts.len(),
            scrolls,
            stop_reason = %stop_reason,
            "collection finished"
        );

        Ok(CollectionReport {
            url,
            posts,
            stop_reason,
            scrolls,
            render_timed_out,
            started_at,
            finished_at: Utc::now(),
        })
    }

    /// Polls the page until at least one post extracts or the load timeout elapses.
    ///
    /// Returns `false` on timeout.
    async fn wait_for_posts<R: PageRenderer>(&self, renderer: &mut R) -> Result<bool, ScraperError> {
        let start = tokio::time::Instant::now();
        let deadline = start
            .checked_add(self.config.load_timeout.min(MAX_LOAD_TIMEOUT))
            .unwrap_or(start);
        let interval = self.config.poll_interval.max(MIN_POLL_INTERVAL);

        loop {
            let html = renderer.current_content().await?;
            if !self.extractor.extract(&html).is_empty() {
                return Ok(true);
            }
            let now = tokio::time::Instant::now();
            if now >= deadline {
                return Ok(false);
            }
            tokio::time::sleep(interval.min(deadline - now)).await;
        }
    }
}
