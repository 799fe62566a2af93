//! Domain layer for mom-generator
//!
//! This crate contains the value objects that describe one extraction
//! interaction. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Uploaded Image
//!
//! The raw bytes a user handed over, tagged with the [`ImageFormat`] derived
//! from the file extension. Only jpg/jpeg/png are accepted.
//!
//! ## Model Response
//!
//! Opaque text returned by the hosted model. It is expected to contain a
//! markdown table but is never parsed or validated here.
//!
//! ## Upload Outcome
//!
//! The single terminal state of an interaction: a placeholder when nothing
//! was uploaded, a success carrying preview and response, or a failure
//! carrying the error description.

pub mod config;
pub mod core;
pub mod extraction;
pub mod prompt;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{
    error::DomainError,
    image::{DecodedImage, ImageFormat, UploadedImage},
    response::ModelResponse,
};
pub use extraction::{outcome::UploadOutcome, phase::ExtractionPhase};
pub use prompt::{InstructionPrompt, MOM_TABLE_HEADER};
