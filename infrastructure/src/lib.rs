//! Infrastructure layer for mom-generator
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod imaging;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBehaviorConfig, FileConfig, FileLoggingConfig,
    FileProviderConfig, FileServerConfig,
};
pub use gemini::{
    client::{GeminiClient, GeminiSettings},
    error::{GeminiError, Result},
};
pub use imaging::ImageCrateDecoder;
pub use logging::JsonlExtractionLogger;
