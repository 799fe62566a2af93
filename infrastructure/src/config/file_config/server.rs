//! Web shell configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

/// Raw server configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Socket address the web shell listens on
    pub bind: String,
    /// Request body limit for the upload route
    pub max_upload_bytes: usize,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8501".to_string(),
            max_upload_bytes: 20 * 1024 * 1024,
        }
    }
}
