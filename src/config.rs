//! Suite configuration.
//!
//! [`ReqresConfig`] replaces module-level globals: the base URL and API key
//! are handed to [`ReqresClient::new`](crate::client::ReqresClient::new) and
//! flow from there into every request.

use crate::error::{ContractError, ContractResult};
use crate::logging::log_debug;
use reqwest::header::HeaderValue;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public host of the reqres mock API.
pub const DEFAULT_BASE_URL: &str = "https://reqres.in";

/// Free-tier key accepted by reqres.in.
pub const DEFAULT_API_KEY: &str = "reqres-free-v1";

/// Name of the header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Configuration for talking to the reqres service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReqresConfig {
    /// Scheme and host, without a trailing path (e.g. `https://reqres.in`)
    pub base_url: String,
    /// Value sent in the `x-api-key` header
    pub api_key: String,
    /// Per-request timeout; `None` keeps the HTTP client's default
    pub request_timeout: Option<Duration>,
}

impl Default for ReqresConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            request_timeout: None,
        }
    }
}

impl ReqresConfig {
    /// Configuration pointing at `base_url` with the default API key.
    ///
    /// Mostly useful for aiming the suite at a local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ConfigurationError`] if:
    /// - the base URL does not parse or is not `http`/`https`
    /// - the API key is empty or not a valid header value
    /// - the request timeout is zero
    pub fn validate(&self) -> ContractResult<()> {
        let url = reqwest::Url::parse(&self.base_url).map_err(|e| {
            ContractError::configuration_error(format!(
                "Invalid base URL '{}': {e}",
                self.base_url
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ContractError::configuration_error(format!(
                "Base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.api_key.trim().is_empty() {
            return Err(ContractError::configuration_error("API key is required"));
        }

        HeaderValue::from_str(&self.api_key).map_err(|e| {
            ContractError::configuration_error(format!("Invalid API key format: {e}"))
        })?;

        if self.request_timeout == Some(Duration::ZERO) {
            return Err(ContractError::configuration_error(
                "Request timeout must be greater than zero",
            ));
        }

        Ok(())
    }

    /// Base URL with any trailing slash removed, ready for path joining.
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Load configuration from environment variables
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `REQRES_BASE_URL` | `https://reqres.in` |
    /// | `REQRES_API_KEY` | `reqres-free-v1` |
    /// | `REQRES_TIMEOUT_SECS` | unset (client default) |
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ConfigurationError`] if `REQRES_TIMEOUT_SECS`
    /// is not an integer or the resulting configuration fails [`validate`](Self::validate).
    pub fn from_env() -> ContractResult<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("REQRES_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(api_key) = std::env::var("REQRES_API_KEY") {
            config.api_key = api_key;
        }
        if let Ok(raw) = std::env::var("REQRES_TIMEOUT_SECS") {
            let seconds = raw.trim().parse::<u64>().map_err(|e| {
                ContractError::configuration_error(format!(
                    "REQRES_TIMEOUT_SECS must be a whole number of seconds, got '{raw}': {e}"
                ))
            })?;
            config.request_timeout = Some(Duration::from_secs(seconds));
        }

        config.validate()?;

        log_debug!(
            base_url = %config.base_url,
            has_timeout = config.request_timeout.is_some(),
            "Contract configuration loaded from environment"
        );

        Ok(config)
    }
}
