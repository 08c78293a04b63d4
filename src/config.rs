//! Configuration types for the scholarship finder.
//!
//! Loaded from TOML. The provider API key is never stored here; only the
//! name of the environment variable it is read from.

use scholar_search::ProviderConfig;
use scholar_search::credential::DEFAULT_API_KEY_ENV;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Search provider settings.
    pub provider: ProviderSection,
    /// Page behaviour settings.
    pub ui: UiConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind (0 picks a free port).
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        }
    }
}

/// Search provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSection {
    /// Environment variable holding the provider API key.
    pub api_key_env: String,
    /// Fixed search parameters.
    #[serde(flatten)]
    pub search: ProviderConfig,
}

impl Default for ProviderSection {
    fn default() -> Self {
        Self {
            api_key_env: DEFAULT_API_KEY_ENV.to_owned(),
            search: ProviderConfig::default(),
        }
    }
}

/// Page orchestration behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show a message on the form when a search fails.
    ///
    /// Off by default: a failed search silently returns to the form.
    pub surface_search_errors: bool,
    /// Return the wizard to its first step when going back from results.
    pub reset_wizard_on_back: bool,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::error::AppError::Config(e.to_string()))
    }

    /// Load from `path`, or from the default path when it exists, or use defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn load(path: Option<&std::path::Path>) -> crate::error::Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        let default_path = Self::default_config_path();
        if default_path.is_file() {
            tracing::info!(path = %default_path.display(), "loading config");
            Self::from_file(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &std::path::Path) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::AppError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Write the default configuration to `path` for editing.
    ///
    /// An existing file is left alone unless `overwrite` is set.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::AppError::Config`] if the file exists and
    /// `overwrite` is false, or an I/O error if it cannot be written.
    pub fn write_default(path: &std::path::Path, overwrite: bool) -> crate::error::Result<()> {
        if path.exists() && !overwrite {
            return Err(crate::error::AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }
        Self::default().save_to_file(path)?;
        tracing::info!(path = %path.display(), "wrote default config");
        Ok(())
    }

    /// Returns the default config file path: `~/.config/chatra-shayak/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config)
                .join("chatra-shayak")
                .join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("chatra-shayak")
                .join("config.toml")
        } else {
            PathBuf::from("/tmp/chatra-shayak-config/config.toml")
        }
    }

    /// Validates every section.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::AppError::Config`] naming the first invalid field.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.provider.api_key_env.trim().is_empty() {
            return Err(crate::error::AppError::Config(
                "provider.api_key_env must not be empty".to_owned(),
            ));
        }
        self.provider.search.validate()?;
        Ok(())
    }
}
