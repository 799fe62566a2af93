//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unsupported image type: {0} (expected jpg, jpeg or png)")]
    UnsupportedImageType(String),

    #[error("Uploaded file has no extension: {0}")]
    MissingExtension(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_type_display() {
        let error = DomainError::UnsupportedImageType("gif".to_string());
        assert_eq!(
            error.to_string(),
            "Unsupported image type: gif (expected jpg, jpeg or png)"
        );
    }

    #[test]
    fn test_missing_extension_display() {
        let error = DomainError::MissingExtension("notes".to_string());
        assert_eq!(error.to_string(), "Uploaded file has no extension: notes");
    }
}
