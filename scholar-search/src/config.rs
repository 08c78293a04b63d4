//! Provider configuration with the scholarship defaults.
//!
//! [`ProviderConfig`] fixes every parameter attached to an outbound search:
//! endpoint, depth, the result-domain allow-list, and result count.

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::types::SearchDepth;

/// Default provider search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.tavily.com/search";

/// Domains results are restricted to by default.
pub const DEFAULT_DOMAINS: &[&str] = &[
    "scholarships.gov.in",
    "buddy4study.com",
    "vidyasaarathi.co.in",
    "scholarships.net",
    "nsp.gov.in",
];

/// Configuration for calls to the search provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Full URL of the provider's search endpoint.
    pub endpoint: String,
    /// Search depth requested from the provider.
    pub search_depth: SearchDepth,
    /// Result-domain allow-list.
    pub include_domains: Vec<String>,
    /// Maximum results requested.
    pub max_results: usize,
    /// Request a synthesized answer.
    pub include_answer: bool,
    /// Request raw page content.
    pub include_raw_content: bool,
    /// Custom User-Agent. `None` uses the crate name and version.
    pub user_agent: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            search_depth: SearchDepth::Advanced,
            include_domains: DEFAULT_DOMAINS.iter().map(|d| (*d).to_owned()).collect(),
            max_results: 10,
            include_answer: true,
            include_raw_content: false,
            user_agent: None,
        }
    }
}

impl ProviderConfig {
    /// Set a custom endpoint, typically a mock server in tests.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Validates this configuration.
    ///
    /// Checks:
    /// - `endpoint` must not be empty
    /// - `max_results` must be greater than 0
    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.endpoint.trim().is_empty() {
            return Err(ProviderError::Config("endpoint must not be empty".into()));
        }
        if self.max_results == 0 {
            return Err(ProviderError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_scholarship_parameters() {
        let config = ProviderConfig::default();
        assert_eq!(config.endpoint, "https://api.tavily.com/search");
        assert_eq!(config.search_depth, SearchDepth::Advanced);
        assert_eq!(config.max_results, 10);
        assert!(config.include_answer);
        assert!(!config.include_raw_content);
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn default_domains_are_the_five_portals() {
        let config = ProviderConfig::default();
        assert_eq!(
            config.include_domains,
            vec![
                "scholarships.gov.in",
                "buddy4study.com",
                "vidyasaarathi.co.in",
                "scholarships.net",
                "nsp.gov.in",
            ]
        );
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(ProviderConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_max_results_rejected() {
        let config = ProviderConfig {
            max_results: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_results"));
    }

    #[test]
    fn blank_endpoint_rejected() {
        let config = ProviderConfig::default().with_endpoint("  ");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("endpoint"));
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let config: ProviderConfig = serde_json::from_str(r#"{"max_results": 5}"#).expect("decode");
        assert_eq!(config.max_results, 5);
        assert_eq!(config.include_domains.len(), 5);
    }
}
