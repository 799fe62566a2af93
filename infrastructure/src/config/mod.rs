//! Configuration file loading for mom-generator
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MOM_*` environment variables (nested keys split on `__`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./mom.toml` or `./.mom.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/mom-generator/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileBehaviorConfig, FileConfig, FileLoggingConfig, FileProviderConfig,
    FileServerConfig,
};
pub use loader::ConfigLoader;
