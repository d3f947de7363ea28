//! Profile scraping for feedlens.
//!
//! Drives a [`PageRenderer`] through scroll/read cycles and collects
//! deduplicated post texts. [`WebDriverRenderer`] talks to a real browser
//! through a W3C WebDriver endpoint; tests substitute an in-memory renderer.

pub mod collector;
pub mod error;
pub mod extract;
pub mod renderer;
pub mod webdriver;

mod retry;

pub use collector::{CollectionReport, CollectorConfig, ScrollCollector, StopReason};
pub use error::ScraperError;
pub use extract::PostExtractor;
pub use renderer::{LoadStatus, PageRenderer};
pub use webdriver::{WebDriverOptions, WebDriverRenderer};
