//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod behavior;
mod logging;
mod provider;
mod server;

pub use behavior::FileBehaviorConfig;
pub use logging::FileLoggingConfig;
pub use provider::FileProviderConfig;
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use thiserror::Error;

/// Configuration problems that stop startup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("provider.model cannot be empty")]
    EmptyModelName,

    #[error("provider.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("server.bind is not a socket address: {0}")]
    InvalidBindAddress(String),

    #[error("server.max_upload_bytes cannot be 0")]
    ZeroUploadLimit,

    #[error("API key not found. Please set the {0} environment variable.")]
    MissingApiKey(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Hosted model settings
    pub provider: FileProviderConfig,
    /// Web shell settings
    pub server: FileServerConfig,
    /// Use case behavior
    pub behavior: FileBehaviorConfig,
    /// Extraction log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.provider.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if self.provider.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }

        if self.server.bind.parse::<SocketAddr>().is_err() {
            return Err(ConfigValidationError::InvalidBindAddress(
                self.server.bind.clone(),
            ));
        }

        if self.server.max_upload_bytes == 0 {
            return Err(ConfigValidationError::ZeroUploadLimit);
        }

        Ok(())
    }
}
