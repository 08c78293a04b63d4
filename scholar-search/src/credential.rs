//! Credential sources for the provider's bearer token.
//!
//! The proxy never reads process state directly; it asks an injected
//! [`CredentialSource`] at request time.

/// Environment variable holding the provider API key by default.
pub const DEFAULT_API_KEY_ENV: &str = "TAVILY_API_KEY";

/// Supplies the bearer credential for provider requests.
pub trait CredentialSource: Send + Sync {
    /// Return the credential, or `None` when it is not configured.
    fn api_key(&self) -> Option<String>;
}

/// Reads the credential from an environment variable on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    /// Create a source reading `var`.
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Name of the variable this source reads.
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvCredential {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY_ENV)
    }
}

impl CredentialSource for EnvCredential {
    fn api_key(&self) -> Option<String> {
        std::env::var(&self.var)
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
    }
}

/// A fixed credential, for tests and embedding.
#[derive(Clone, PartialEq, Eq)]
pub struct StaticCredential(Option<String>);

impl StaticCredential {
    /// A source that always returns `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self(Some(key.into()))
    }

    /// A source with no credential configured.
    pub fn missing() -> Self {
        Self(None)
    }
}

impl std::fmt::Debug for StaticCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown = if self.0.is_some() { "<redacted>" } else { "<none>" };
        f.debug_tuple("StaticCredential").field(&shown).finish()
    }
}

impl CredentialSource for StaticCredential {
    fn api_key(&self) -> Option<String> {
        self.0.clone()
    }
}
