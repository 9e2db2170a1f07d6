//! Webhook client for icebreaker generation.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` through
//! [`BrowserTransport`].
//! Server-side (SSR): no transport exists; submissions only happen in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps to a [`SubmitError`] whose `Display` text is the exact
//! message shown in the form's error banner. Nothing here panics or retries.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::config::ApiConfig;
use super::types::{IcebreakerRequest, IcebreakerResult};

/// Shown when a transport failure carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate icebreaker. Please try again.";

/// Shown when a success body is valid JSON but not an object.
pub const NOT_AN_OBJECT_MESSAGE: &str = "Unexpected response: expected a JSON object";

/// Raw HTTP response handed back by a [`WebhookTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl WebhookResponse {
    /// True for statuses in the 2xx range.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON POST. Implemented by the browser fetch transport and by
/// test doubles.
#[allow(async_fn_in_trait)]
pub trait WebhookTransport {
    /// POST `body` to `url` with `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Returns the transport's error message when no response was received
    /// or the body could not be read.
    async fn post_json(&self, url: &str, body: String) -> Result<WebhookResponse, String>;
}

/// Failure of a submission after validation passed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// No base URL was configured; the request is never sent.
    #[error("API URL is not configured")]
    NotConfigured,

    /// The webhook answered with a non-2xx status.
    #[error("Request failed: {status_text}")]
    Request { status: u16, status_text: String },

    /// Network failure or an unreadable response body.
    #[error("{}", transport_message(.0))]
    Transport(String),
}

impl SubmitError {
    /// Stable short code for logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotConfigured => "E_NOT_CONFIGURED",
            Self::Request { .. } => "E_REQUEST",
            Self::Transport(_) => "E_TRANSPORT",
        }
    }
}

fn transport_message(message: &str) -> &str {
    if message.trim().is_empty() { GENERIC_FAILURE_MESSAGE } else { message }
}

/// Webhook client bound to one configuration and transport.
#[derive(Clone, Debug)]
pub struct IcebreakerApi<T> {
    config: ApiConfig,
    transport: T,
}

impl<T> IcebreakerApi<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: WebhookTransport> IcebreakerApi<T> {
    /// Generate an icebreaker via `POST {base}/webhook/icebreaker`.
    ///
    /// Issues at most one request and never retries.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::NotConfigured`] without touching the network
    /// when no base URL is set, [`SubmitError::Request`] for non-2xx
    /// statuses, and [`SubmitError::Transport`] for network or JSON failures.
    pub async fn generate(&self, request: &IcebreakerRequest) -> Result<IcebreakerResult, SubmitError> {
        let url = self.config.webhook_url().ok_or(SubmitError::NotConfigured)?;
        let body = serde_json::to_string(request).map_err(|e| SubmitError::Transport(e.to_string()))?;

        let response = self
            .transport
            .post_json(&url, body)
            .await
            .map_err(SubmitError::Transport)?;
        if !response.ok() {
            return Err(SubmitError::Request { status: response.status, status_text: response.status_text });
        }

        parse_result_body(&response.body)
    }
}

/// Decode a success body. Only a JSON object is accepted; serde would
/// otherwise read a positional array into the struct.
fn parse_result_body(body: &str) -> Result<IcebreakerResult, SubmitError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| SubmitError::Transport(e.to_string()))?;
    if !value.is_object() {
        return Err(SubmitError::Transport(NOT_AN_OBJECT_MESSAGE.to_owned()));
    }
    serde_json::from_value(value).map_err(|e| SubmitError::Transport(e.to_string()))
}

/// Browser `fetch` transport backed by `gloo-net`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(feature = "hydrate")]
impl WebhookTransport for BrowserTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<WebhookResponse, String> {
        let resp = gloo_net::http::Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = resp.status();
        let status_text = resp.status_text();
        // Error bodies are never shown, so only successful responses are read.
        let body = if resp.ok() {
            resp.text().await.map_err(|e| e.to_string())?
        } else {
            String::new()
        };
        Ok(WebhookResponse { status, status_text, body })
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
