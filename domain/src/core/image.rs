//! Uploaded and decoded image value objects

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Image formats accepted by the upload control (Value Object)
///
/// `jpg` and `jpeg` both map to [`ImageFormat::Jpeg`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// Extensions listed in the upload control's `accept` attribute
    pub const ACCEPTED_EXTENSIONS: [&'static str; 3] = ["jpg", "jpeg", "png"];

    /// Resolve a format from a bare extension (case-insensitive, no dot)
    pub fn from_extension(ext: &str) -> Result<Self, DomainError> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "png" => Ok(ImageFormat::Png),
            other => Err(DomainError::UnsupportedImageType(other.to_string())),
        }
    }

    /// Resolve a format from a file name or path
    pub fn from_filename(filename: &str) -> Result<Self, DomainError> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| DomainError::MissingExtension(filename.to_string()))?;
        Self::from_extension(ext)
    }

    /// MIME type sent to the model and used in preview data URIs
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ImageFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s.trim_start_matches('.'))
    }
}

/// An image handed over by the user for one interaction (Value Object)
///
/// Holds the undecoded bytes; decoding is an infrastructure concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    filename: String,
    format: ImageFormat,
    bytes: Vec<u8>,
}

impl UploadedImage {
    /// Create an uploaded image, validating the declared extension
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Result<Self, DomainError> {
        let filename = filename.into();
        let format = ImageFormat::from_filename(&filename)?;
        Ok(Self {
            filename,
            format,
            bytes,
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// A bitmap that decoded successfully (Value Object)
///
/// Carries the encoded bytes alongside the decoded dimensions: the bytes are
/// what the preview displays and what is transmitted to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedImage {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl DecodedImage {
    pub fn new(format: ImageFormat, width: u32, height: u32, bytes: Vec<u8>) -> Self {
        Self {
            format,
            width,
            height,
            bytes,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}
