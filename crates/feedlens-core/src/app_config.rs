use std::path::PathBuf;

/// Browser the WebDriver endpoint is expected to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Browser {
    Chrome,
    Firefox,
}

impl std::fmt::Display for Browser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Browser::Chrome => write!(f, "chrome"),
            Browser::Firefox => write!(f, "firefox"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub webdriver_url: String,
    pub browser: Browser,
    pub headless: bool,
    pub request_timeout_secs: u64,
    /// Target location template; `{handle}` is replaced with the encoded handle.
    pub profile_url_template: String,
    pub post_selector: String,
    pub text_selector: String,
    pub max_scrolls: u32,
    pub max_posts: usize,
    pub settle_delay_ms: u64,
    pub load_timeout_secs: u64,
    pub poll_interval_ms: u64,
    /// Consecutive scroll iterations without new posts before collection stops.
    pub stall_limit: u32,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
    pub top_k: usize,
    pub stopwords_path: Option<PathBuf>,
    pub lexicon_path: Option<PathBuf>,
}
