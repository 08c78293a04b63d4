//! Wire types for the search provider API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// A single result returned by the search provider.
///
/// Fields the provider adds beyond these (published dates, raw content)
/// are ignored on decode. Known fields decode leniently: `null` or a
/// mistyped value becomes an empty string, or no score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Title of the result page.
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    /// URL of the result page.
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: String,
    /// Text snippet summarising the page.
    #[serde(default, deserialize_with = "lenient_text")]
    pub content: String,
    /// Provider relevance score in `0.0..=1.0`, when supplied.
    #[serde(
        default,
        deserialize_with = "lenient_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub score: Option<f64>,
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        _ => None,
    })
}

impl SearchResult {
    /// Decode a provider result array, one entry per element in order.
    ///
    /// An element that is not an object becomes an empty result.
    pub fn from_values(values: &[Value]) -> Vec<Self> {
        values
            .iter()
            .map(|value| {
                serde_json::from_value(value.clone()).unwrap_or_else(|e| {
                    tracing::debug!(error = %e, "search result is not an object");
                    Self::default()
                })
            })
            .collect()
    }
}

/// How much effort the provider spends on a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    /// Fast, shallow search.
    Basic,
    /// Slower search with better recall.
    #[default]
    Advanced,
}

impl SearchDepth {
    /// Returns the wire name of this depth.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for SearchDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON body sent to the provider's search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderRequest {
    /// Natural-language query.
    pub query: String,
    /// Search depth.
    pub search_depth: SearchDepth,
    /// Only results from these domains are returned.
    pub include_domains: Vec<String>,
    /// Upper bound on results returned.
    pub max_results: usize,
    /// Ask the provider for a synthesized answer alongside the results.
    pub include_answer: bool,
    /// Ask the provider for the full page text of each result.
    pub include_raw_content: bool,
}

/// Successful provider reply.
///
/// `results` is kept as raw JSON so callers can relay it unmodified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderResponse {
    /// Result objects in provider ranking order.
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
    /// Synthesized answer, when requested and supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl ProviderResponse {
    /// Typed view of [`ProviderResponse::results`].
    pub fn typed_results(&self) -> Vec<SearchResult> {
        SearchResult::from_values(&self.results)
    }
}
