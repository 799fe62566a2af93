//! Application layer for mom-generator
//!
//! This crate contains the upload use case, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    extraction_client::{ExtractionClient, ExtractionError},
    extraction_logger::{ExtractionEvent, ExtractionLogger, NoExtractionLogger},
    image_decoder::{DecodeError, ImageDecoder},
    progress::{ExtractionProgress, NoProgress},
};
pub use use_cases::process_upload::{
    ProcessUploadError, ProcessUploadInput, ProcessUploadUseCase,
};
