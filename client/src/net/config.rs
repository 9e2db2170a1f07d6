//! Webhook API configuration.
//!
//! DESIGN
//! ======
//! The base URL is resolved once by the server (from its environment) and
//! injected into the form controller as an explicit value. The server
//! publishes it to the browser through a `<meta>` tag in the HTML shell so
//! the hydrated app sees the same configuration the SSR pass used.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Path appended to the base URL for icebreaker generation.
pub const WEBHOOK_PATH: &str = "/webhook/icebreaker";

/// `name` of the `<meta>` tag carrying the base URL into the browser.
pub const API_URL_META_NAME: &str = "icebreaker-api-url";

/// Resolved webhook API configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Option<String>,
}

impl ApiConfig {
    /// Build a config from a raw base URL value.
    ///
    /// Blank values count as unset; surrounding whitespace and trailing
    /// slashes are trimmed.
    pub fn new(base_url: Option<&str>) -> Self {
        Self { base_url: base_url.and_then(normalize_base_url) }
    }

    /// Config with no base URL. Submissions fail with a configuration error.
    pub fn unconfigured() -> Self {
        Self::default()
    }

    /// The normalized base URL, if configured.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    /// Full webhook URL (`{base}/webhook/icebreaker`), if configured.
    pub fn webhook_url(&self) -> Option<String> {
        self.base_url
            .as_deref()
            .map(|base| format!("{base}{WEBHOOK_PATH}"))
    }

    /// Read the base URL the server published into the page head.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        let selector = format!("meta[name=\"{API_URL_META_NAME}\"]");
        let content = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.query_selector(&selector).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"));
        Self::new(content.as_deref())
    }
}

fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
