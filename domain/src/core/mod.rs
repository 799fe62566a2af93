//! Core domain concepts shared across all subdomains.
//!
//! - [`image::UploadedImage`]: user-supplied bytes with a validated format
//! - [`image::DecodedImage`]: a successfully decoded bitmap ready for preview
//! - [`response::ModelResponse`]: the verbatim text returned by the model
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod image;
pub mod response;
