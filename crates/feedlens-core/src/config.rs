use std::path::PathBuf;
use std::str::FromStr;

use crate::app_config::{AppConfig, Browser};
use crate::ConfigError;

/// Longest accepted wait for the first post after navigation.
pub const MAX_LOAD_TIMEOUT_SECS: u64 = 3600;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a pure
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_num = |var: &str, default: &str| -> Result<u64, ConfigError> {
        parse_value::<u64>(var, &or_default(var, default))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        parse_value::<u32>(var, &or_default(var, default))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        parse_value::<usize>(var, &or_default(var, default))
    };

    let optional_path = |var: &str| -> Option<PathBuf> {
        lookup(var)
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from)
    };

    let log_level = or_default("FEEDLENS_LOG_LEVEL", "info");
    let webdriver_url = or_default("FEEDLENS_WEBDRIVER_URL", "http://localhost:9515");
    let browser = parse_browser(&or_default("FEEDLENS_BROWSER", "chrome"))?;
    let headless = parse_bool("FEEDLENS_HEADLESS", &or_default("FEEDLENS_HEADLESS", "true"))?;
    let request_timeout_secs = parse_num("FEEDLENS_REQUEST_TIMEOUT_SECS", "30")?;

    let profile_url_template = or_default(
        "FEEDLENS_PROFILE_URL_TEMPLATE",
        "https://twitter.com/{handle}",
    );
    if !profile_url_template.contains("{handle}") {
        return Err(ConfigError::InvalidEnvVar {
            var: "FEEDLENS_PROFILE_URL_TEMPLATE".to_string(),
            reason: "template must contain {handle}".to_string(),
        });
    }

    let post_selector = or_default("FEEDLENS_POST_SELECTOR", r#"article[role="article"]"#);
    let text_selector = or_default("FEEDLENS_TEXT_SELECTOR", "div[lang]");

    let max_scrolls = parse_u32("FEEDLENS_MAX_SCROLLS", "5")?;
    let max_posts = parse_usize("FEEDLENS_MAX_POSTS", "50")?;
    if max_posts == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "FEEDLENS_MAX_POSTS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let settle_delay_ms = parse_num("FEEDLENS_SETTLE_DELAY_MS", "3000")?;
    let load_timeout_secs = parse_num("FEEDLENS_LOAD_TIMEOUT_SECS", "10")?;
    if load_timeout_secs > MAX_LOAD_TIMEOUT_SECS {
        return Err(ConfigError::InvalidEnvVar {
            var: "FEEDLENS_LOAD_TIMEOUT_SECS".to_string(),
            reason: format!("must be at most {MAX_LOAD_TIMEOUT_SECS}"),
        });
    }
    let poll_interval_ms = parse_num("FEEDLENS_POLL_INTERVAL_MS", "500")?;

    let stall_limit = parse_u32("FEEDLENS_STALL_LIMIT", "1")?;
    if stall_limit == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "FEEDLENS_STALL_LIMIT".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let max_retries = parse_u32("FEEDLENS_MAX_RETRIES", "2")?;
    let retry_backoff_base_ms = parse_num("FEEDLENS_RETRY_BACKOFF_BASE_MS", "500")?;
    let top_k = parse_usize("FEEDLENS_TOP_K", "10")?;
    if top_k == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "FEEDLENS_TOP_K".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        log_level,
        webdriver_url,
        browser,
        headless,
        request_timeout_secs,
        profile_url_template,
        post_selector,
        text_selector,
        max_scrolls,
        max_posts,
        settle_delay_ms,
        load_timeout_secs,
        poll_interval_ms,
        stall_limit,
        max_retries,
        retry_backoff_base_ms,
        top_k,
        stopwords_path: optional_path("FEEDLENS_STOPWORDS_PATH"),
        lexicon_path: optional_path("FEEDLENS_LEXICON_PATH"),
    })
}

fn parse_value<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

fn parse_browser(s: &str) -> Result<Browser, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "chrome" | "chromium" => Ok(Browser::Chrome),
        "firefox" => Ok(Browser::Firefox),
        other => Err(ConfigError::InvalidEnvVar {
            var: "FEEDLENS_BROWSER".to_string(),
            reason: format!("unknown browser '{other}' (expected chrome or firefox)"),
        }),
    }
}

fn parse_bool(var: &str, s: &str) -> Result<bool, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
