//! Server configuration parsed from environment variables.

use icebreaker_client::net::config::ApiConfig;

/// Base URL of the webhook API that generates icebreakers.
pub const API_URL_ENV: &str = "ICEBREAKER_API_URL";
/// Optional listen port override.
pub const PORT_ENV: &str = "PORT";

/// Errors produced while reading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The port override is not a valid `u16`.
    #[error("invalid {var}: {value:?} is not a port number")]
    InvalidPort { var: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Webhook API configuration handed to the client app.
    pub api: ApiConfig,
    /// Listen port; `None` keeps the Leptos `site_addr`.
    pub port: Option<u16>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `ICEBREAKER_API_URL`: webhook API base URL; blank counts as unset
    /// - `PORT`: listen port override
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(API_URL_ENV, PORT_ENV)
    }

    fn from_vars(api_url_var: &str, port_var: &str) -> Result<Self, ConfigError> {
        let api = ApiConfig::new(std::env::var(api_url_var).ok().as_deref());
        let port = parse_port(port_var, std::env::var(port_var).ok().as_deref())?;
        Ok(Self { api, port })
    }
}

fn parse_port(var: &str, raw: Option<&str>) -> Result<Option<u16>, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    raw.parse::<u16>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidPort { var: var.to_owned(), value: raw.to_owned() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
