//! [`PageRenderer`] backed by a W3C WebDriver endpoint (chromedriver, geckodriver).

mod protocol;

use std::time::Duration;

use feedlens_core::{AppConfig, Browser};
use reqwest::{Client, Method, Url};
use serde_json::{json, Value};

use crate::error::ScraperError;
use crate::renderer::{LoadStatus, PageRenderer};
use crate::retry::retry_with_backoff;

use protocol::{decode_envelope, new_session_body, session_id_from, SCROLL_TO_END_SCRIPT, TIMEOUT_ERROR};

#[derive(Debug, Clone)]
pub struct WebDriverOptions {
    pub browser: Browser,
    pub headless: bool,
    /// Timeout for each HTTP command sent to the driver.
    pub request_timeout: Duration,
    /// Page-load timeout configured on the session.
    pub page_load_timeout: Duration,
    pub max_retries: u32,
    pub backoff_base: Duration,
}

impl WebDriverOptions {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            browser: config.browser,
            headless: config.headless,
            request_timeout: Duration::from_secs(config.request_timeout_secs),
            page_load_timeout: Duration::from_secs(config.load_timeout_secs),
            max_retries: config.max_retries,
            backoff_base: Duration::from_millis(config.retry_backoff_base_ms),
        }
    }
}

/// One live WebDriver session.
///
/// Created by [`WebDriverRenderer::start`]; released by [`PageRenderer::close`].
pub struct WebDriverRenderer {
    client: Client,
    session_url: Url,
    session_id: String,
    max_retries: u32,
    backoff_base: Duration,
}

impl WebDriverRenderer {
    /// Opens a new browser session on the driver at `endpoint`.
    ///
    /// If configuring the session fails after it was created, the session is
    /// deleted before the error is returned.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidEndpoint`] if `endpoint` is not a URL.
    /// - [`ScraperError::Session`] if the driver returns no session id.
    /// - [`ScraperError::Http`] / [`ScraperError::WebDriver`] if the driver refuses.
    pub async fn start(endpoint: &str, options: &WebDriverOptions) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(options.request_timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let base = parse_endpoint(endpoint)?;
        let new_session_url = base
            .join("session")
            .map_err(|e| ScraperError::InvalidEndpoint {
                url: endpoint.to_owned(),
                reason: e.to_string(),
            })?;

        let envelope = send(
            &client,
            Method::POST,
            new_session_url,
            Some(&new_session_body(options.browser, options.headless)),
            "new session",
        )
        .await?;
        let session_id = session_id_from(&envelope)
            .ok_or_else(|| ScraperError::Session("driver response carried no sessionId".into()))?;

        let session_url = base
            .join(&format!("session/{session_id}/"))
            .map_err(|e| ScraperError::Session(format!("unusable session id {session_id}: {e}")))?;

        let renderer = Self {
            client,
            session_url,
            session_id,
            max_retries: options.max_retries,
            backoff_base: options.backoff_base,
        };
        tracing::info!(
            session = %renderer.session_id,
            browser = %options.browser,
            headless = options.headless,
            "WebDriver session started"
        );

        let page_load_ms = u64::try_from(options.page_load_timeout.as_millis()).unwrap_or(u64::MAX);
        if let Err(e) = renderer
            .command(Method::POST, "timeouts", Some(&json!({ "pageLoad": page_load_ms })), "set timeouts")
            .await
        {
            if let Err(close_err) = renderer.delete_session().await {
                tracing::warn!(error = %close_err, "failed to delete half-configured session");
            }
            return Err(e);
        }

        Ok(renderer)
    }

    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    async fn command(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        name: &str,
    ) -> Result<Value, ScraperError> {
        let url = self
            .session_url
            .join(path)
            .map_err(|e| ScraperError::Session(format!("bad command path {path}: {e}")))?;
        send(&self.client, method, url, body, name).await
    }

    async fn delete_session(&self) -> Result<(), ScraperError> {
        let url = self.session_url.as_str().trim_end_matches('/').to_owned();
        let url = Url::parse(&url).map_err(|e| ScraperError::Session(e.to_string()))?;
        send(&self.client, Method::DELETE, url, None, "delete session").await?;
        tracing::info!(session = %self.session_id, "WebDriver session deleted");
        Ok(())
    }
}

impl PageRenderer for WebDriverRenderer {
    async fn load(&mut self, url: &str) -> Result<LoadStatus, ScraperError> {
        match self
            .command(Method::POST, "url", Some(&json!({ "url": url })), "navigate")
            .await
        {
            Ok(_) => Ok(LoadStatus::Loaded),
            Err(ScraperError::WebDriver { ref error, .. }) if error == TIMEOUT_ERROR => {
                Ok(LoadStatus::TimedOut)
            }
            Err(e) => Err(ScraperError::Navigation {
                url: url.to_owned(),
                reason: e.to_string(),
            }),
        }
    }

    async fn scroll_to_end(&mut self) -> Result<(), ScraperError> {
        let body = json!({ "script": SCROLL_TO_END_SCRIPT, "args": [] });
        let this = &*self;
        retry_with_backoff(this.max_retries, this.backoff_base, || {
            this.command(Method::POST, "execute/sync", Some(&body), "scroll")
        })
        .await?;
        Ok(())
    }

    async fn current_content(&mut self) -> Result<String, ScraperError> {
        let this = &*self;
        let envelope = retry_with_backoff(this.max_retries, this.backoff_base, || {
            this.command(Method::GET, "source", None, "page source")
        })
        .await?;
        match envelope.get("value") {
            Some(Value::String(source)) => Ok(source.clone()),
            _ => Err(ScraperError::InvalidResponse {
                command: "page source".to_owned(),
                reason: "value is not a string".to_owned(),
            }),
        }
    }

    async fn close(self) -> Result<(), ScraperError> {
        self.delete_session().await
    }
}

/// Parses the driver endpoint, forcing a trailing slash so `join` appends.
fn parse_endpoint(endpoint: &str) -> Result<Url, ScraperError> {
    let normalised = format!("{}/", endpoint.trim().trim_end_matches('/'));
    let url = Url::parse(&normalised).map_err(|e| ScraperError::InvalidEndpoint {
        url: endpoint.to_owned(),
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ScraperError::InvalidEndpoint {
            url: endpoint.to_owned(),
            reason: format!("unsupported scheme {}", url.scheme()),
        });
    }
    Ok(url)
}

async fn send(
    client: &Client,
    method: Method,
    url: Url,
    body: Option<&Value>,
    name: &str,
) -> Result<Value, ScraperError> {
    let mut request = client.request(method, url);
    if let Some(body) = body {
        request = request.json(body);
    }
    let response = request.send().await?;
    let status = response.status().as_u16();
    let text = response.text().await?;
    decode_envelope(name, status, &text)
}
