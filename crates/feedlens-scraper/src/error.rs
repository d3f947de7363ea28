use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error("WebDriver {command} failed ({error}): {message}")]
    WebDriver {
        command: String,
        error: String,
        message: String,
    },

    #[error("unexpected HTTP status {status} from WebDriver {command}")]
    UnexpectedStatus { status: u16, command: String },

    #[error("invalid WebDriver response for {command}: {reason}")]
    InvalidResponse { command: String, reason: String },

    #[error("renderer session error: {0}")]
    Session(String),

    #[error("invalid CSS selector \"{selector}\": {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("invalid WebDriver endpoint \"{url}\": {reason}")]
    InvalidEndpoint { url: String, reason: String },
}
