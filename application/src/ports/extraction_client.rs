//! Extraction Client port
//!
//! Defines the interface for the single outbound call to a hosted
//! multimodal model.

use async_trait::async_trait;
use mom_domain::{DecodedImage, InstructionPrompt, ModelResponse};
use thiserror::Error;

/// Errors that can occur while calling the hosted model
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Request blocked by the model: {0}")]
    Blocked(String),

    #[error("Model returned no text")]
    EmptyResponse,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),
}

/// Client for the hosted multimodal model
///
/// Implementations (adapters) live in the infrastructure layer. One call to
/// [`extract`](ExtractionClient::extract) is one request; there is no retry.
#[async_trait]
pub trait ExtractionClient: Send + Sync {
    /// Send the image and the instruction, return the model's text verbatim
    async fn extract(
        &self,
        image: &DecodedImage,
        prompt: &InstructionPrompt,
    ) -> Result<ModelResponse, ExtractionError>;

    /// Identifier of the model behind this client (for logs)
    fn model_name(&self) -> &str;
}
