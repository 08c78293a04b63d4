//! Error types for the scholar-search crate.
//!
//! Messages never include the provider credential.

/// Errors that can occur while calling the search provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider answered with a non-success status code.
    ///
    /// `details` is the provider's JSON error body.
    #[error("provider returned status {status}")]
    Status {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Provider error body.
        details: serde_json::Value,
    },

    /// The HTTP request could not be sent or the response could not be read.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The provider's body, success or error, was not valid JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid provider configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for scholar-search results.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_status() {
        let err = ProviderError::Status {
            status: 503,
            details: serde_json::json!({"detail": "overloaded"}),
        };
        assert_eq!(err.to_string(), "provider returned status 503");
    }

    #[test]
    fn display_http() {
        let err = ProviderError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_parse() {
        let err = ProviderError::Parse("expected value at line 1".into());
        assert_eq!(err.to_string(), "parse error: expected value at line 1");
    }

    #[test]
    fn display_config() {
        let err = ProviderError::Config("max_results must be greater than 0".into());
        assert_eq!(
            err.to_string(),
            "config error: max_results must be greater than 0"
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProviderError>();
    }
}
