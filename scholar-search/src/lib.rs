//! # scholar-search
//!
//! Client for the third-party search provider used by Chatra Shayak.
//!
//! ## Design
//!
//! - One request per query, no retries, no caching
//! - Fixed parameters (depth, domain allow-list, result count) live in
//!   [`ProviderConfig`]
//! - The bearer credential comes from an injected [`CredentialSource`]
//! - Provider result objects are returned as raw JSON so callers can relay
//!   them unmodified; [`SearchResult`] is the typed view
//!
//! ## Security
//!
//! - The credential never appears in errors or `Debug` output
//! - Queries are logged only at debug level

pub mod config;
pub mod credential;
pub mod error;
pub mod http;
pub mod provider;
pub mod providers;
pub mod types;

use std::sync::Arc;

pub use config::ProviderConfig;
pub use credential::{CredentialSource, EnvCredential, StaticCredential};
pub use error::{ProviderError, Result};
pub use provider::SearchProvider;
pub use providers::TavilyProvider;
pub use types::{ProviderRequest, ProviderResponse, SearchDepth, SearchResult};

/// Search for scholarships with a one-off provider.
///
/// Convenience wrapper that builds a [`TavilyProvider`] from `config` and
/// `credential` and runs a single query.
///
/// # Errors
///
/// Returns [`ProviderError::Config`] for invalid configuration, otherwise
/// whatever [`SearchProvider::search`] returns.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> scholar_search::Result<()> {
/// use std::sync::Arc;
/// let config = scholar_search::ProviderConfig::default();
/// let credential = Arc::new(scholar_search::EnvCredential::default());
/// let reply = scholar_search::search("scholarships for SC students", config, credential).await?;
/// for result in reply.typed_results() {
///     println!("{}: {}", result.title, result.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(
    query: &str,
    config: ProviderConfig,
    credential: Arc<dyn CredentialSource>,
) -> Result<ProviderResponse> {
    let provider = TavilyProvider::new(config, credential)?;
    provider.search(query).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_validates_config_zero_max_results() {
        let config = ProviderConfig {
            max_results: 0,
            ..Default::default()
        };
        let result = search("test", config, Arc::new(StaticCredential::missing())).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("max_results"));
    }

    #[tokio::test]
    async fn search_validates_config_blank_endpoint() {
        let config = ProviderConfig::default().with_endpoint("");
        let result = search("test", config, Arc::new(StaticCredential::missing())).await;
        assert!(result.unwrap_err().to_string().contains("endpoint"));
    }
}
