//! Gemini Extraction Client implementation

use crate::gemini::error::{GeminiError, Result};
use crate::gemini::protocol::{ApiErrorBody, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use mom_application::{ExtractionClient, ExtractionError};
use mom_domain::{DecodedImage, InstructionPrompt, ModelResponse};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default public endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default multimodal model
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Connection settings for [`GeminiClient`]
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl GeminiSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Extraction client backed by the Gemini `generateContent` endpoint
pub struct GeminiClient {
    http: reqwest::Client,
    settings: GeminiSettings,
}

impl GeminiClient {
    /// Create a client. Only the connect phase is bounded; the request
    /// itself waits as long as the model takes.
    pub fn new(settings: GeminiSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(15))
            .tcp_nodelay(true)
            .build()
            .map_err(|e| GeminiError::ClientBuild(e.to_string()))?;

        info!(
            model = %settings.model,
            base_url = %settings.base_url,
            "GeminiClient initialized"
        );

        Ok(Self { http, settings })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }

    /// Issue one `generateContent` call and return the response text
    pub async fn generate(&self, image: &DecodedImage, instruction: &str) -> Result<String> {
        let request =
            GenerateContentRequest::image_with_instruction(image.mime_type(), &image.bytes, instruction);

        debug!(
            endpoint = %self.endpoint(),
            mime = image.mime_type(),
            image_bytes = image.bytes.len(),
            "Sending generateContent request"
        );

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.settings.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ApiErrorBody>(&raw) {
                Ok(body) if !body.error.message.is_empty() => body.error.message,
                _ => raw,
            };
            warn!(status = status.as_u16(), "Gemini API returned an error");
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&raw).map_err(|e| GeminiError::ParseError {
                error: e.to_string(),
                raw: raw.clone(),
            })?;

        if let Some(text) = parsed.text() {
            return Ok(text);
        }
        if let Some(reason) = parsed.block_reason() {
            return Err(GeminiError::Blocked(reason.to_string()));
        }
        Err(GeminiError::EmptyResponse)
    }
}

#[async_trait]
impl ExtractionClient for GeminiClient {
    async fn extract(
        &self,
        image: &DecodedImage,
        prompt: &InstructionPrompt,
    ) -> std::result::Result<ModelResponse, ExtractionError> {
        let text = self.generate(image, prompt.text()).await?;
        Ok(ModelResponse::new(text))
    }

    fn model_name(&self) -> &str {
        &self.settings.model
    }
}
