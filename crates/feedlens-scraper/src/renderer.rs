//! The page-renderer seam the scroll collector drives.
//!
//! A renderer owns one browser-like session. [`PageRenderer::close`]
//! consumes it, so a session cannot be used after it has been released.

use std::future::Future;

use crate::error::ScraperError;

/// Result of the initial navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The renderer reported the page as loaded.
    Loaded,
    /// The page-load timeout elapsed; whatever rendered so far is readable.
    TimedOut,
}

pub trait PageRenderer {
    /// Navigates to `url`.
    ///
    /// A load timeout is reported as [`LoadStatus::TimedOut`]; an unreachable
    /// target is [`ScraperError::Navigation`].
    fn load(&mut self, url: &str) -> impl Future<Output = Result<LoadStatus, ScraperError>> + Send;

    /// Scrolls the viewport to the end of the document.
    fn scroll_to_end(&mut self) -> impl Future<Output = Result<(), ScraperError>> + Send;

    /// Returns the full rendered markup as of the call.
    fn current_content(&mut self) -> impl Future<Output = Result<String, ScraperError>> + Send;

    /// Releases the underlying session.
    fn close(self) -> impl Future<Output = Result<(), ScraperError>> + Send
    where
        Self: Sized;
}
