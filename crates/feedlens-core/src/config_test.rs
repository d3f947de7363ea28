use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_uses_defaults_when_env_is_empty() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.webdriver_url, "http://localhost:9515");
    assert_eq!(cfg.browser, Browser::Chrome);
    assert!(cfg.headless);
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.profile_url_template, "https://twitter.com/{handle}");
    assert_eq!(cfg.post_selector, r#"article[role="article"]"#);
    assert_eq!(cfg.text_selector, "div[lang]");
    assert_eq!(cfg.max_scrolls, 5);
    assert_eq!(cfg.max_posts, 50);
    assert_eq!(cfg.settle_delay_ms, 3000);
    assert_eq!(cfg.load_timeout_secs, 10);
    assert_eq!(cfg.poll_interval_ms, 500);
    assert_eq!(cfg.stall_limit, 1);
    assert_eq!(cfg.max_retries, 2);
    assert_eq!(cfg.retry_backoff_base_ms, 500);
    assert_eq!(cfg.top_k, 10);
    assert!(cfg.stopwords_path.is_none());
    assert!(cfg.lexicon_path.is_none());
}

#[test]
fn scroll_settings_override() {
    let mut map = HashMap::new();
    map.insert("FEEDLENS_MAX_SCROLLS", "12");
    map.insert("FEEDLENS_MAX_POSTS", "200");
    map.insert("FEEDLENS_SETTLE_DELAY_MS", "750");
    map.insert("FEEDLENS_STALL_LIMIT", "3");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.max_scrolls, 12);
    assert_eq!(cfg.max_posts, 200);
    assert_eq!(cfg.settle_delay_ms, 750);
    assert_eq!(cfg.stall_limit, 3);
}

#[test]
fn max_scrolls_invalid() {
    let mut map = HashMap::new();
    map.insert("FEEDLENS_MAX_SCROLLS", "lots");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FEEDLENS_MAX_SCROLLS"),
        "expected InvalidEnvVar(FEEDLENS_MAX_SCROLLS), got: {result:?}"
    );
}

#[test]
fn max_posts_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("FEEDLENS_MAX_POSTS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FEEDLENS_MAX_POSTS"),
        "expected InvalidEnvVar(FEEDLENS_MAX_POSTS), got: {result:?}"
    );
}

#[test]
fn stall_limit_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("FEEDLENS_STALL_LIMIT", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FEEDLENS_STALL_LIMIT"),
        "expected InvalidEnvVar(FEEDLENS_STALL_LIMIT), got: {result:?}"
    );
}

#[test]
fn top_k_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("FEEDLENS_TOP_K", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FEEDLENS_TOP_K"),
        "expected InvalidEnvVar(FEEDLENS_TOP_K), got: {result:?}"
    );
}

#[test]
fn load_timeout_above_ceiling_is_rejected() {
    let mut map = HashMap::new();
    map.insert("FEEDLENS_LOAD_TIMEOUT_SECS", "18446744073709551615");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FEEDLENS_LOAD_TIMEOUT_SECS"),
        "expected InvalidEnvVar(FEEDLENS_LOAD_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn load_timeout_at_ceiling_is_accepted() {
    let ceiling = MAX_LOAD_TIMEOUT_SECS.to_string();
    let mut map = HashMap::new();
    map.insert("FEEDLENS_LOAD_TIMEOUT_SECS", ceiling.as_str());
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.load_timeout_secs, MAX_LOAD_TIMEOUT_SECS);
}

#[test]
fn profile_template_without_placeholder_is_rejected() {
    let mut map = HashMap::new();
    map.insert("FEEDLENS_PROFILE_URL_TEMPLATE", "https://x.com/someone");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FEEDLENS_PROFILE_URL_TEMPLATE"),
        "expected InvalidEnvVar(FEEDLENS_PROFILE_URL_TEMPLATE), got: {result:?}"
    );
}

#[test]
fn browser_firefox() {
    let mut map = HashMap::new();
    map.insert("FEEDLENS_BROWSER", "Firefox");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.browser, Browser::Firefox);
    assert_eq!(cfg.browser.to_string(), "firefox");
}

#[test]
fn browser_unknown_fails() {
    let mut map = HashMap::new();
    map.insert("FEEDLENS_BROWSER", "netscape");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FEEDLENS_BROWSER"),
        "expected InvalidEnvVar(FEEDLENS_BROWSER), got: {result:?}"
    );
}

#[test]
fn headless_accepts_common_spellings() {
    for (raw, expected) in [("false", false), ("0", false), ("no", false), ("YES", true)] {
        let mut map = HashMap::new();
        map.insert("FEEDLENS_HEADLESS", raw);
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.headless, expected, "FEEDLENS_HEADLESS={raw}");
    }
}

#[test]
fn headless_invalid() {
    let mut map = HashMap::new();
    map.insert("FEEDLENS_HEADLESS", "maybe");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FEEDLENS_HEADLESS"),
        "expected InvalidEnvVar(FEEDLENS_HEADLESS), got: {result:?}"
    );
}

#[test]
fn resource_paths_are_read_when_set() {
    let mut map = HashMap::new();
    map.insert("FEEDLENS_STOPWORDS_PATH", "/etc/feedlens/stopwords.txt");
    map.insert("FEEDLENS_LEXICON_PATH", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.stopwords_path,
        Some(PathBuf::from("/etc/feedlens/stopwords.txt"))
    );
    assert!(cfg.lexicon_path.is_none(), "blank path should be ignored");
}
