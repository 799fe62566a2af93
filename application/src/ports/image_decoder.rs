//! Image decoder port

use mom_domain::{DecodedImage, UploadedImage};
use thiserror::Error;

/// The uploaded bytes could not be turned into a bitmap
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to decode {filename}: {reason}")]
pub struct DecodeError {
    pub filename: String,
    pub reason: String,
}

impl DecodeError {
    pub fn new(filename: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            reason: reason.into(),
        }
    }
}

/// Decodes uploaded bytes into a previewable bitmap
pub trait ImageDecoder: Send + Sync {
    fn decode(&self, image: &UploadedImage) -> Result<DecodedImage, DecodeError>;
}
