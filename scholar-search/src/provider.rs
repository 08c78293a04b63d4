//! Trait definition for search provider backends.

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::types::ProviderResponse;

/// A search provider reachable with a single request per query.
///
/// Implementations attach their fixed parameters and credential, send one
/// request, and return the provider's reply. They never retry.
///
/// Object safe so callers can hold an `Arc<dyn SearchProvider>`.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run `query` against the provider.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::Status`] when the provider answers non-2xx
    /// - [`ProviderError::Http`] when the request cannot be completed
    /// - [`ProviderError::Parse`] when a success body is not valid JSON
    async fn search(&self, query: &str) -> Result<ProviderResponse, ProviderError>;

    /// Short provider name for logs.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct MockProvider {
        reply: Option<ProviderResponse>,
    }

    #[async_trait]
    impl SearchProvider for MockProvider {
        async fn search(&self, _query: &str) -> Result<ProviderResponse, ProviderError> {
            self.reply
                .clone()
                .ok_or_else(|| ProviderError::Http("mock provider failure".into()))
        }

        fn name(&self) -> &'static str {
            "mock"
        }
    }

    #[test]
    fn provider_is_object_safe() {
        let provider: Arc<dyn SearchProvider> = Arc::new(MockProvider { reply: None });
        assert_eq!(provider.name(), "mock");
    }

    #[tokio::test]
    async fn mock_provider_returns_reply() {
        let provider = MockProvider {
            reply: Some(ProviderResponse {
                results: vec![serde_json::json!({"title": "A"})],
                answer: None,
            }),
        };
        let reply = provider.search("q").await.expect("should succeed");
        assert_eq!(reply.results.len(), 1);
    }

    #[tokio::test]
    async fn mock_provider_propagates_errors() {
        let provider = MockProvider { reply: None };
        let err = provider.search("q").await.unwrap_err();
        assert!(err.to_string().contains("mock provider failure"));
    }
}
