//! Shared types and configuration for feedlens.
//!
//! Holds the post model used by the scraper and the analysis pipeline,
//! source-handle validation, and the env-driven [`AppConfig`].

pub mod app_config;
pub mod config;
pub mod posts;

use thiserror::Error;

pub use app_config::{AppConfig, Browser};
pub use config::{load_app_config, load_app_config_from_env, MAX_LOAD_TIMEOUT_SECS};
pub use posts::{Post, PostCollection, SourceHandle};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("no source handle supplied")]
    EmptyInput,

    #[error("invalid source handle \"{handle}\": {reason}")]
    InvalidHandle { handle: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
