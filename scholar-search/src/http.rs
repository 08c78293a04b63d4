//! Shared HTTP client for provider requests.

use crate::config::ProviderConfig;
use crate::error::ProviderError;

/// User-Agent sent when the configuration does not override it.
pub const DEFAULT_USER_AGENT: &str = concat!("scholar-search/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] for provider calls.
///
/// No request timeout is set; the platform default applies.
///
/// # Errors
///
/// Returns [`ProviderError::Http`] if the client cannot be constructed.
pub fn build_client(config: &ProviderConfig) -> Result<reqwest::Client, ProviderError> {
    let ua = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    reqwest::Client::builder()
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| ProviderError::Http(format!("failed to build HTTP client: {e}")))
}
