//! Integration tests for `WebDriverRenderer` using wiremock HTTP mocks.

use std::time::Duration;

use feedlens_core::{Browser, SourceHandle};
use feedlens_scraper::{
    CollectorConfig, LoadStatus, PageRenderer, PostExtractor, ScraperError, ScrollCollector,
    StopReason, WebDriverOptions, WebDriverRenderer,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SESSION: &str = "3f1c9e";

fn options() -> WebDriverOptions {
    WebDriverOptions {
        browser: Browser::Chrome,
        headless: true,
        request_timeout: Duration::from_secs(5),
        page_load_timeout: Duration::from_secs(1),
        max_retries: 0,
        backoff_base: Duration::ZERO,
    }
}

fn null_value() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "value": null }))
}

fn wire_error(status: u16, error: &str, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "value": { "error": error, "message": message, "stacktrace": "" }
    }))
}

async fn mount_session(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/session"))
        .and(body_partial_json(json!({
            "capabilities": { "alwaysMatch": { "browserName": "chrome" } }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": { "sessionId": SESSION, "capabilities": { "browserName": "chrome" } }
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/session/{SESSION}/timeouts")))
        .and(body_partial_json(json!({ "pageLoad": 1000 })))
        .respond_with(null_value())
        .mount(server)
        .await;
}

async fn mount_delete(server: &MockServer) {
    Mock::given(method("DELETE"))
        .and(path(format!("/session/{SESSION}")))
        .respond_with(null_value())
        .expect(1)
        .mount(server)
        .await;
}

fn timeline(texts: &[&str]) -> String {
    let articles: String = texts
        .iter()
        .map(|t| format!(r#"<article role="article"><div lang="en">{t}</div></article>"#))
        .collect();
    format!("<html><body>{articles}</body></html>")
}

#[tokio::test]
async fn start_creates_session_and_configures_timeouts() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    mount_delete(&server).await;

    let renderer = WebDriverRenderer::start(&server.uri(), &options())
        .await
        .expect("session should start");
    assert_eq!(renderer.session_id(), SESSION);
    renderer.close().await.expect("session should close");
}

#[tokio::test]
async fn start_surfaces_session_not_created() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/session"))
        .respond_with(wire_error(
            500,
            "session not created",
            "This version of ChromeDriver only supports Chrome version 120",
        ))
        .mount(&server)
        .await;

    let err = WebDriverRenderer::start(&server.uri(), &options())
        .await
        .err()
        .expect("start should fail");
    assert!(matches!(
        err,
        ScraperError::WebDriver { ref error, .. } if error == "session not created"
    ));
}

#[tokio::test]
async fn failed_timeout_setup_deletes_the_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": { "sessionId": SESSION, "capabilities": {} }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("/session/{SESSION}/timeouts")))
        .respond_with(wire_error(400, "invalid argument", "pageLoad must be an integer"))
        .mount(&server)
        .await;
    mount_delete(&server).await;

    let err = WebDriverRenderer::start(&server.uri(), &options())
        .await
        .err()
        .expect("start should fail");
    assert!(matches!(err, ScraperError::WebDriver { .. }));
}

#[tokio::test]
async fn navigation_error_maps_to_navigation_failure() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    Mock::given(method("POST"))
        .and(path(format!("/session/{SESSION}/url")))
        .respond_with(wire_error(500, "unknown error", "net::ERR_NAME_NOT_RESOLVED"))
        .mount(&server)
        .await;

    let mut renderer = WebDriverRenderer::start(&server.uri(), &options())
        .await
        .unwrap();
    let err = renderer.load("https://twitter.com/nasa").await.unwrap_err();
    assert!(matches!(
        err,
        ScraperError::Navigation { ref url, ref reason }
            if url == "https://twitter.com/nasa" && reason.contains("ERR_NAME_NOT_RESOLVED")
    ));
}

#[tokio::test]
async fn navigation_timeout_is_reported_not_raised() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    Mock::given(method("POST"))
        .and(path(format!("/session/{SESSION}/url")))
        .respond_with(wire_error(500, "timeout", "Timed out receiving message from renderer"))
        .mount(&server)
        .await;

    let mut renderer = WebDriverRenderer::start(&server.uri(), &options())
        .await
        .unwrap();
    let status = renderer.load("https://twitter.com/nasa").await.unwrap();
    assert_eq!(status, LoadStatus::TimedOut);
}

#[tokio::test]
async fn current_content_returns_page_source() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    Mock::given(method("GET"))
        .and(path(format!("/session/{SESSION}/source")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "value": "<html><body>hi</body></html>" })),
        )
        .mount(&server)
        .await;

    let mut renderer = WebDriverRenderer::start(&server.uri(), &options())
        .await
        .unwrap();
    let source = renderer.current_content().await.unwrap();
    assert_eq!(source, "<html><body>hi</body></html>");
}

#[tokio::test]
async fn current_content_retries_a_timed_out_request() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    Mock::given(method("GET"))
        .and(path(format!("/session/{SESSION}/source")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "value": "slow" }))
                .set_delay(Duration::from_secs(2)),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/session/{SESSION}/source")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": "fast" })))
        .mount(&server)
        .await;

    let mut opts = options();
    opts.request_timeout = Duration::from_millis(300);
    opts.max_retries = 1;
    let mut renderer = WebDriverRenderer::start(&server.uri(), &opts).await.unwrap();
    let source = renderer.current_content().await.unwrap();
    assert_eq!(source, "fast");
}

#[tokio::test]
async fn collects_posts_through_webdriver_and_releases_session() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    mount_delete(&server).await;

    Mock::given(method("POST"))
        .and(path(format!("/session/{SESSION}/url")))
        .and(body_partial_json(json!({ "url": "https://twitter.com/nasa" })))
        .respond_with(null_value())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("/session/{SESSION}/execute/sync")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": 4200 })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/session/{SESSION}/source")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": timeline(&["We are go for launch", "Splashdown confirmed"])
        })))
        .mount(&server)
        .await;

    let renderer = WebDriverRenderer::start(&server.uri(), &options())
        .await
        .unwrap();
    let collector = ScrollCollector::new(
        CollectorConfig {
            settle_delay: Duration::ZERO,
            load_timeout: Duration::ZERO,
            poll_interval: Duration::ZERO,
            ..CollectorConfig::default()
        },
        PostExtractor::default(),
    );
    let handle = SourceHandle::parse("@nasa").unwrap();
    let report = collector
        .collect_and_release(renderer, &handle)
        .await
        .unwrap();

    let texts: Vec<&str> = report.posts.iter().map(|p| p.text()).collect();
    assert_eq!(texts, ["We are go for launch", "Splashdown confirmed"]);
    assert_eq!(report.stop_reason, StopReason::Stalled);
    assert_eq!(report.scrolls, 2);
}
