//! Where the page sends its search query.
//!
//! Both backends read a reply the way the page always has: whatever JSON
//! comes back, its `results` member (or an empty list) becomes the result
//! set. Only a failure to get a JSON reply at all counts as an error.

use async_trait::async_trait;
use scholar_search::SearchResult;
use serde_json::{Value, json};

use crate::error::{AppError, Result};
use crate::proxy::SearchProxy;

/// Sends a query to the search proxy and returns the decoded results.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Run `query`.
    ///
    /// # Errors
    ///
    /// [`AppError::Search`] when no JSON reply could be obtained.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>>;
}

/// Results carried by a proxy reply body.
///
/// Missing or `null` `results` is an empty set; any other non-array value is
/// an error.
pub fn results_from_body(body: &Value) -> Result<Vec<SearchResult>> {
    match body.get("results") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(values)) => Ok(SearchResult::from_values(values)),
        Some(other) => Err(AppError::Search(format!(
            "unexpected results value: {other}"
        ))),
    }
}

/// Calls a [`SearchProxy`] in the same process.
#[derive(Debug, Clone)]
pub struct ProxyBackend {
    proxy: SearchProxy,
}

impl ProxyBackend {
    pub fn new(proxy: SearchProxy) -> Self {
        Self { proxy }
    }
}

#[async_trait]
impl SearchBackend for ProxyBackend {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let body = serde_json::to_vec(&json!({ "query": query }))
            .map_err(|e| AppError::Search(e.to_string()))?;
        let reply = self.proxy.handle(&body).await;
        if !reply.is_success() {
            tracing::warn!(status = reply.status, "search proxy returned an error");
        }
        results_from_body(&reply.body)
    }
}

/// Calls a running server's `/api/search` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBackend {
    /// Backend for the server at `base_url`, e.g. `http://127.0.0.1:3000`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Search`] if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Search(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint: format!("{}/api/search", base_url.trim_end_matches('/')),
        })
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SearchBackend for HttpBackend {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "query": query }))
            .send()
            .await
            .map_err(|e| AppError::Search(format!("request to {} failed: {e}", self.endpoint)))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "search server returned an error");
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::Search(format!("invalid search reply: {e}")))?;
        results_from_body(&body)
    }
}
