use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("lexicon parse error at {path}:{line}: {reason}")]
    LexiconParse {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}
