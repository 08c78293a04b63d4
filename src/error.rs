//! Error types for the scholarship finder.

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The scholarship search could not be completed.
    #[error("search error: {0}")]
    Search(String),

    /// The HTTP server could not be started.
    #[error("server error: {0}")]
    Server(String),
}

impl From<scholar_search::ProviderError> for AppError {
    fn from(err: scholar_search::ProviderError) -> Self {
        match err {
            scholar_search::ProviderError::Config(msg) => Self::Config(msg),
            other => Self::Search(other.to_string()),
        }
    }
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AppError>;
