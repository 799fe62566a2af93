//! Error types for the Gemini adapter

use mom_application::ExtractionError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when talking to the Gemini endpoint
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("Gemini API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Prompt blocked: {0}")]
    Blocked(String),

    #[error("No text in response")]
    EmptyResponse,
}

impl From<GeminiError> for ExtractionError {
    fn from(e: GeminiError) -> Self {
        match e {
            GeminiError::Http(e) if e.is_timeout() => ExtractionError::Connection(format!(
                "request timed out: {e}"
            )),
            GeminiError::Http(e) => ExtractionError::Connection(e.to_string()),
            GeminiError::ClientBuild(msg) => ExtractionError::Connection(msg),
            GeminiError::ParseError { error, .. } => ExtractionError::MalformedResponse(error),
            GeminiError::Api { status, message } => ExtractionError::Api { status, message },
            GeminiError::Blocked(reason) => ExtractionError::Blocked(reason),
            GeminiError::EmptyResponse => ExtractionError::EmptyResponse,
        }
    }
}
