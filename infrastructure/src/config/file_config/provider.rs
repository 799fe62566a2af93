//! Provider configuration from TOML (`[provider]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};

/// Hosted model (Gemini) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Model identifier (default: "gemini-1.5-flash").
    pub model: String,
    /// Base URL of the generative language API.
    pub base_url: String,
    /// Environment variable holding the API key (default: "GOOGLE_API").
    pub api_key_env: String,
    /// Direct API key (prefer the environment variable).
    pub api_key: Option<String>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key_env: "GOOGLE_API".to_string(),
            api_key: None,
        }
    }
}

impl FileProviderConfig {
    /// Resolve the credential from the process environment.
    ///
    /// A non-empty `api_key` wins over the environment variable. Empty values
    /// count as missing.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Resolve the credential, failing when none is configured.
    pub fn require_api_key(&self) -> Result<String, ConfigValidationError> {
        self.resolve_api_key()
            .ok_or_else(|| ConfigValidationError::MissingApiKey(self.api_key_env.clone()))
    }

    /// Resolve the credential using a custom environment lookup.
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Option<String>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        if let Some(key) = self.api_key.as_deref()
            && !key.trim().is_empty()
        {
            return Some(key.trim().to_string());
        }
        lookup(&self.api_key_env)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
