//! Search proxy: validates the incoming query, calls the provider, and
//! shapes the JSON reply.
//!
//! Kept independent of axum so the page orchestrator can call it in-process.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use scholar_search::{ProviderError, SearchProvider};
use serde_json::{Value, json};
use std::sync::Arc;

/// Error message for a missing or empty query.
pub const QUERY_REQUIRED: &str = "Query is required";

/// Error message for a relayed provider failure.
pub const FETCH_FAILED: &str = "Failed to fetch scholarships";

/// Error message for any other failure.
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Status and JSON body produced by the proxy.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyResponse {
    pub status: u16,
    pub body: Value,
}

impl ProxyResponse {
    fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    fn internal_error() -> Self {
        Self::new(500, json!({ "error": INTERNAL_ERROR }))
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl IntoResponse for ProxyResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.body)).into_response()
    }
}

/// Outcome of reading the `query` member of a request body.
enum QueryField {
    Present(String),
    Missing,
    Malformed,
}

/// Extract the query from a JSON request body.
///
/// Absent, `null`, empty-string, `false`, and `0` queries count as missing.
/// Other non-string values are forwarded in their JSON text form. A body
/// that is not JSON, or is JSON `null`, is malformed.
fn read_query(body: &[u8]) -> QueryField {
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(error = %e, "search request body is not JSON");
            return QueryField::Malformed;
        }
    };

    let query = match value {
        Value::Null => {
            tracing::error!("search request body is null");
            return QueryField::Malformed;
        }
        Value::Object(mut map) => map.remove("query"),
        _ => None,
    };

    match query {
        None | Some(Value::Null) | Some(Value::Bool(false)) => QueryField::Missing,
        Some(Value::String(s)) if s.is_empty() => QueryField::Missing,
        Some(Value::String(s)) => QueryField::Present(s),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => QueryField::Missing,
        Some(other) => QueryField::Present(other.to_string()),
    }
}

/// Stateless proxy in front of a [`SearchProvider`].
#[derive(Clone)]
pub struct SearchProxy {
    provider: Arc<dyn SearchProvider>,
}

impl std::fmt::Debug for SearchProxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchProxy")
            .field("provider", &self.provider.name())
            .finish()
    }
}

impl SearchProxy {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }

    /// Handle a raw `/api/search` request body.
    ///
    /// Never fails: every outcome is a status and JSON body.
    pub async fn handle(&self, body: &[u8]) -> ProxyResponse {
        let query = match read_query(body) {
            QueryField::Present(query) => query,
            QueryField::Missing => {
                tracing::info!("rejecting search without a query");
                return ProxyResponse::new(400, json!({ "error": QUERY_REQUIRED }));
            }
            QueryField::Malformed => return ProxyResponse::internal_error(),
        };

        self.search(&query).await
    }

    /// Run `query` against the provider and shape the reply.
    pub async fn search(&self, query: &str) -> ProxyResponse {
        tracing::debug!(query, provider = self.provider.name(), "proxying search");

        match self.provider.search(query).await {
            Ok(response) => {
                tracing::info!(results = response.results.len(), "search succeeded");
                ProxyResponse::new(200, json!({ "results": response.results }))
            }
            Err(ProviderError::Status { status, details }) => {
                tracing::warn!(status, "provider rejected search");
                ProxyResponse::new(status, json!({ "error": FETCH_FAILED, "details": details }))
            }
            Err(e) => {
                tracing::error!(error = %e, "search failed");
                ProxyResponse::internal_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use scholar_search::ProviderResponse;
    use std::sync::Mutex;

    /// Records queries and answers with a canned outcome.
    struct CannedProvider {
        queries: Mutex<Vec<String>>,
        outcome: fn() -> scholar_search::Result<ProviderResponse>,
    }

    impl CannedProvider {
        fn new(outcome: fn() -> scholar_search::Result<ProviderResponse>) -> Arc<Self> {
            Arc::new(Self {
                queries: Mutex::new(Vec::new()),
                outcome,
            })
        }

        fn queries(&self) -> Vec<String> {
            self.queries.lock().expect("lock").clone()
        }
    }

    #[async_trait]
    impl SearchProvider for CannedProvider {
        async fn search(&self, query: &str) -> scholar_search::Result<ProviderResponse> {
            self.queries.lock().expect("lock").push(query.to_owned());
            (self.outcome)()
        }

        fn name(&self) -> &'static str {
            "canned"
        }
    }

    fn two_results() -> scholar_search::Result<ProviderResponse> {
        Ok(ProviderResponse {
            results: vec![
                json!({"title": "A", "url": "https://a.example", "content": "a", "score": 0.9, "extra": 1}),
                json!({"title": "B", "url": "https://b.example", "content": "b"}),
            ],
            answer: None,
        })
    }

    fn unavailable() -> scholar_search::Result<ProviderResponse> {
        Err(ProviderError::Status {
            status: 503,
            details: json!({"detail": "overloaded"}),
        })
    }

    fn network_down() -> scholar_search::Result<ProviderResponse> {
        Err(ProviderError::Http("connection refused".into()))
    }

    #[tokio::test]
    async fn empty_or_missing_query_is_400_without_provider_call() {
        let provider = CannedProvider::new(two_results);
        let proxy = SearchProxy::new(provider.clone());

        for body in [
            r#"{"query":""}"#,
            r#"{}"#,
            r#"{"query":null}"#,
            r#"[]"#,
        ] {
            let reply = proxy.handle(body.as_bytes()).await;
            assert_eq!(reply.status, 400, "body {body}");
            assert_eq!(reply.body, json!({"error": "Query is required"}));
        }
        assert!(provider.queries().is_empty());
    }

    #[tokio::test]
    async fn whitespace_query_is_forwarded() {
        let provider = CannedProvider::new(two_results);
        let proxy = SearchProxy::new(provider.clone());
        let reply = proxy.handle(br#"{"query":"  "}"#).await;
        assert_eq!(reply.status, 200);
        assert_eq!(provider.queries(), vec!["  ".to_owned()]);
    }

    #[tokio::test]
    async fn results_relayed_unmodified_in_order() {
        let provider = CannedProvider::new(two_results);
        let proxy = SearchProxy::new(provider.clone());
        let reply = proxy.handle(br#"{"query":"SC scholarships"}"#).await;
        assert_eq!(reply.status, 200);
        let expected = two_results().expect("canned").results;
        assert_eq!(reply.body, json!({ "results": expected }));
        assert_eq!(provider.queries(), vec!["SC scholarships".to_owned()]);
    }

    #[tokio::test]
    async fn provider_status_relayed_with_details() {
        let proxy = SearchProxy::new(CannedProvider::new(unavailable));
        let reply = proxy.handle(br#"{"query":"q"}"#).await;
        assert_eq!(reply.status, 503);
        assert_eq!(reply.body["error"], "Failed to fetch scholarships");
        assert_eq!(reply.body["details"], json!({"detail": "overloaded"}));
        assert!(!reply.is_success());
    }

    #[tokio::test]
    async fn transport_failure_is_500_without_details() {
        let proxy = SearchProxy::new(CannedProvider::new(network_down));
        let reply = proxy.handle(br#"{"query":"q"}"#).await;
        assert_eq!(reply.status, 500);
        assert_eq!(reply.body, json!({"error": "Internal server error"}));
    }

    #[tokio::test]
    async fn malformed_body_is_500_without_provider_call() {
        let provider = CannedProvider::new(two_results);
        let proxy = SearchProxy::new(provider.clone());
        for body in ["not json", "null", ""] {
            let reply = proxy.handle(body.as_bytes()).await;
            assert_eq!(reply.status, 500, "body {body:?}");
        }
        assert!(provider.queries().is_empty());
    }

    #[tokio::test]
    async fn non_string_query_is_forwarded_as_text() {
        let provider = CannedProvider::new(two_results);
        let proxy = SearchProxy::new(provider.clone());
        proxy.handle(br#"{"query":42}"#).await;
        let reply = proxy.handle(br#"{"query":0}"#).await;
        assert_eq!(reply.status, 400);
        assert_eq!(provider.queries(), vec!["42".to_owned()]);
    }

    #[test]
    fn into_response_keeps_status() {
        let reply = ProxyResponse::new(429, json!({"error": "x"}));
        assert_eq!(reply.into_response().status(), StatusCode::TOO_MANY_REQUESTS);
    }
}
