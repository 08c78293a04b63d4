//! Tavily search API provider.
//!
//! One bearer-authenticated `POST` per query carrying the fixed
//! [`ProviderConfig`] parameters.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::ProviderConfig;
use crate::credential::CredentialSource;
use crate::error::ProviderError;
use crate::http::build_client;
use crate::provider::SearchProvider;
use crate::types::{ProviderRequest, ProviderResponse};

/// Tavily search API client.
pub struct TavilyProvider {
    client: reqwest::Client,
    config: ProviderConfig,
    credential: Arc<dyn CredentialSource>,
}

impl TavilyProvider {
    /// Create a provider from validated configuration and a credential source.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Config`] if the configuration is invalid, or
    /// [`ProviderError::Http`] if the HTTP client cannot be built.
    pub fn new(
        config: ProviderConfig,
        credential: Arc<dyn CredentialSource>,
    ) -> Result<Self, ProviderError> {
        config.validate()?;
        let client = build_client(&config)?;
        Ok(Self {
            client,
            config,
            credential,
        })
    }

    /// The configuration this provider sends with every request.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Build the request body for `query`.
    pub fn build_request(&self, query: &str) -> ProviderRequest {
        ProviderRequest {
            query: query.to_owned(),
            search_depth: self.config.search_depth,
            include_domains: self.config.include_domains.clone(),
            max_results: self.config.max_results,
            include_answer: self.config.include_answer,
            include_raw_content: self.config.include_raw_content,
        }
    }
}

/// Decode a provider error body. A body that is not JSON is a parse error,
/// so nothing from it is relayed.
fn error_details(status: u16, body: &str) -> Result<serde_json::Value, ProviderError> {
    serde_json::from_str(body).map_err(|e| {
        ProviderError::Parse(format!("provider error body (status {status}) is not JSON: {e}"))
    })
}

#[async_trait]
impl SearchProvider for TavilyProvider {
    async fn search(&self, query: &str) -> Result<ProviderResponse, ProviderError> {
        tracing::debug!(provider = self.name(), %query, "sending provider search");

        // An absent key is not rejected here; the provider's refusal is relayed.
        let api_key = self.credential.api_key().unwrap_or_default();
        let body = self.build_request(query);

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Http(format!("provider request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Http(format!("failed to read provider body: {e}")))?;

        if !status.is_success() {
            tracing::warn!(
                provider = self.name(),
                status = status.as_u16(),
                "provider returned error status"
            );
            let status = status.as_u16();
            return Err(ProviderError::Status {
                status,
                details: error_details(status, &text)?,
            });
        }

        let parsed: ProviderResponse = serde_json::from_str(&text)
            .map_err(|e| ProviderError::Parse(format!("invalid provider response: {e}")))?;
        tracing::debug!(
            provider = self.name(),
            count = parsed.results.len(),
            "provider returned results"
        );
        Ok(parsed)
    }

    fn name(&self) -> &'static str {
        "tavily"
    }
}
