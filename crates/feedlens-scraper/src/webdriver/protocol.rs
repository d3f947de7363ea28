//! W3C WebDriver wire format: request bodies and response envelopes.
//!
//! Every response carries a JSON object with a `value` member. Errors are
//! reported as `{"value": {"error": "<code>", "message": "..."}}` with a
//! 4xx/5xx status.

use feedlens_core::Browser;
use serde_json::{json, Value};

use crate::error::ScraperError;

/// WebDriver error code for an elapsed page-load or script timeout.
pub(super) const TIMEOUT_ERROR: &str = "timeout";

pub(super) const SCROLL_TO_END_SCRIPT: &str =
    "window.scrollTo(0, document.body.scrollHeight); return document.body.scrollHeight;";

/// Builds the `POST /session` body for `browser`.
pub(super) fn new_session_body(browser: Browser, headless: bool) -> Value {
    let capabilities = match browser {
        Browser::Chrome => {
            let mut args = vec!["--disable-gpu", "--window-size=1280,2000"];
            if headless {
                args.insert(0, "--headless=new");
            }
            json!({
                "browserName": "chrome",
                "goog:chromeOptions": { "args": args },
            })
        }
        Browser::Firefox => {
            let args: Vec<&str> = if headless { vec!["-headless"] } else { Vec::new() };
            json!({
                "browserName": "firefox",
                "moz:firefoxOptions": { "args": args },
            })
        }
    };
    json!({ "capabilities": { "alwaysMatch": capabilities } })
}

/// Extracts the session id from a new-session response.
///
/// Accepts the W3C shape (`value.sessionId`) and the legacy top-level
/// `sessionId` some older drivers still send.
pub(super) fn session_id_from(envelope: &Value) -> Option<String> {
    envelope
        .get("value")
        .and_then(|v| v.get("sessionId"))
        .or_else(|| envelope.get("sessionId"))
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
}

/// Decodes a raw response into its JSON envelope.
///
/// Error envelopes become [`ScraperError::WebDriver`]; a non-2xx status
/// without an error envelope becomes [`ScraperError::UnexpectedStatus`].
pub(super) fn decode_envelope(
    command: &str,
    status: u16,
    body: &str,
) -> Result<Value, ScraperError> {
    let success = (200..300).contains(&status);

    let envelope: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) if !success => {
            return Err(ScraperError::UnexpectedStatus {
                status,
                command: command.to_owned(),
            })
        }
        Err(e) => {
            return Err(ScraperError::InvalidResponse {
                command: command.to_owned(),
                reason: format!("body is not JSON: {e}"),
            })
        }
    };

    if let Some(error) = envelope
        .get("value")
        .and_then(|v| v.get("error"))
        .and_then(Value::as_str)
    {
        let message = envelope
            .get("value")
            .and_then(|v| v.get("message"))
            .and_then(Value::as_str)
            .unwrap_or_default();
        return Err(ScraperError::WebDriver {
            command: command.to_owned(),
            error: error.to_owned(),
            message: message.to_owned(),
        });
    }

    if !success {
        return Err(ScraperError::UnexpectedStatus {
            status,
            command: command.to_owned(),
        });
    }

    Ok(envelope)
}
