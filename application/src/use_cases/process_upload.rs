//! Process Upload use case
//!
//! Handles one upload event end to end: decode the image, call the
//! extraction client with the fixed instruction, and turn whatever happened
//! into a single [`UploadOutcome`].
//!
//! Every failure is caught here. Callers always receive an outcome, never an
//! error.

use crate::config::BehaviorConfig;
use crate::ports::extraction_client::{ExtractionClient, ExtractionError};
use crate::ports::extraction_logger::{ExtractionEvent, ExtractionLogger, NoExtractionLogger};
use crate::ports::image_decoder::{DecodeError, ImageDecoder};
use crate::ports::progress::{ExtractionProgress, NoProgress};
use mom_domain::{
    DecodedImage, DomainError, ExtractionPhase, InstructionPrompt, ModelResponse, UploadOutcome,
    UploadedImage,
};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while processing an upload.
///
/// These never leave [`ProcessUploadUseCase::execute`]; their `Display` text
/// becomes the failure message.
#[derive(Error, Debug)]
pub enum ProcessUploadError {
    #[error(transparent)]
    InvalidUpload(#[from] DomainError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// A file as it arrived from the upload control
#[derive(Debug, Clone)]
pub struct ProcessUploadInput {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ProcessUploadInput {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }
}

/// Use case for processing a single upload event
pub struct ProcessUploadUseCase {
    client: Arc<dyn ExtractionClient>,
    decoder: Arc<dyn ImageDecoder>,
    logger: Arc<dyn ExtractionLogger>,
    prompt: InstructionPrompt,
    behavior: BehaviorConfig,
}

impl ProcessUploadUseCase {
    pub fn new(client: Arc<dyn ExtractionClient>, decoder: Arc<dyn ImageDecoder>) -> Self {
        Self {
            client,
            decoder,
            logger: Arc::new(NoExtractionLogger),
            prompt: InstructionPrompt::minutes_of_meeting(),
            behavior: BehaviorConfig::default(),
        }
    }

    /// Create with an extraction logger.
    pub fn with_logger(mut self, logger: Arc<dyn ExtractionLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    /// Execute with default (no-op) progress
    pub async fn execute(&self, upload: Option<ProcessUploadInput>) -> UploadOutcome {
        self.execute_with_progress(upload, &NoProgress).await
    }

    /// Execute with progress callbacks
    ///
    /// `None` means nothing was uploaded: the placeholder is returned and the
    /// extraction client is never invoked.
    pub async fn execute_with_progress(
        &self,
        upload: Option<ProcessUploadInput>,
        progress: &dyn ExtractionProgress,
    ) -> UploadOutcome {
        let Some(upload) = upload else {
            debug!("No file uploaded, showing placeholder");
            return UploadOutcome::Placeholder;
        };

        let started = Instant::now();
        info!(
            filename = %upload.filename,
            bytes = upload.bytes.len(),
            "Processing upload"
        );
        self.logger.log(ExtractionEvent::new(
            "upload_received",
            serde_json::json!({
                "filename": upload.filename,
                "bytes": upload.bytes.len(),
            }),
        ));

        let mut phase = ExtractionPhase::Idle;
        advance(&mut phase, ExtractionPhase::Decoding, progress);
        let decoded = match self.decode(upload).await {
            Ok(decoded) => decoded,
            Err(e) => return self.fail(None, e, started, &mut phase, progress),
        };

        advance(&mut phase, ExtractionPhase::Requesting, progress);
        match self.request(&decoded).await {
            Ok(response) => {
                let elapsed_ms = started.elapsed().as_millis() as u64;
                info!(
                    model = self.client.model_name(),
                    chars = response.text().len(),
                    elapsed_ms,
                    "Extraction completed"
                );
                self.logger.log(ExtractionEvent::new(
                    "extraction_succeeded",
                    serde_json::json!({
                        "model": self.client.model_name(),
                        "width": decoded.width,
                        "height": decoded.height,
                        "elapsed_ms": elapsed_ms,
                        "text": response.text(),
                    }),
                ));
                advance(&mut phase, ExtractionPhase::Done, progress);
                UploadOutcome::Succeeded {
                    preview: decoded,
                    response,
                }
            }
            Err(e) => self.fail(Some(decoded), e, started, &mut phase, progress),
        }
    }

    /// Decoding is CPU-bound, so it runs on the blocking pool.
    async fn decode(&self, upload: ProcessUploadInput) -> Result<DecodedImage, ProcessUploadError> {
        let image = UploadedImage::new(upload.filename, upload.bytes)?;
        let filename = image.filename().to_string();
        let decoder = Arc::clone(&self.decoder);
        let decoded = tokio::task::spawn_blocking(move || decoder.decode(&image))
            .await
            .map_err(|e| DecodeError::new(filename, format!("decoder task failed: {}", e)))??;
        debug!(
            format = %decoded.format,
            width = decoded.width,
            height = decoded.height,
            "Image decoded"
        );
        Ok(decoded)
    }

    async fn request(&self, image: &DecodedImage) -> Result<ModelResponse, ProcessUploadError> {
        let call = self.client.extract(image, &self.prompt);
        let response = match self.behavior.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| ExtractionError::Timeout(limit.as_secs()))??,
            None => call.await?,
        };
        Ok(response)
    }

    fn fail(
        &self,
        preview: Option<DecodedImage>,
        error: ProcessUploadError,
        started: Instant,
        phase: &mut ExtractionPhase,
        progress: &dyn ExtractionProgress,
    ) -> UploadOutcome {
        let message = error.to_string();
        warn!(error = %message, "Extraction failed");
        self.logger.log(ExtractionEvent::new(
            "extraction_failed",
            serde_json::json!({
                "model": self.client.model_name(),
                "decoded": preview.is_some(),
                "elapsed_ms": started.elapsed().as_millis() as u64,
                "error": message,
            }),
        ));
        advance(phase, ExtractionPhase::Failed, progress);
        UploadOutcome::failed(preview, message)
    }
}

/// Move to `next` and tell the progress port
fn advance(phase: &mut ExtractionPhase, next: ExtractionPhase, progress: &dyn ExtractionProgress) {
    debug_assert!(
        phase.can_transition_to(next),
        "illegal phase step {} -> {}",
        phase,
        next
    );
    debug!(from = %phase, to = %next, "Phase change");
    *phase = next;
    progress.on_phase(next);
}
