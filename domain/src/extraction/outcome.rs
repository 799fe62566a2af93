//! Terminal display state of an upload interaction

use crate::core::image::DecodedImage;
use crate::core::response::ModelResponse;
use crate::extraction::phase::ExtractionPhase;
use serde::Serialize;

/// What the shell shows once an interaction has finished
///
/// Exactly one variant is produced per upload event, so a result and an
/// error can never be displayed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UploadOutcome {
    /// No file was uploaded; the extraction client was not invoked.
    Placeholder,
    /// The model answered; `response` is displayed verbatim.
    Succeeded {
        preview: DecodedImage,
        response: ModelResponse,
    },
    /// Decoding or the external call failed.
    ///
    /// `preview` is present only when decoding got far enough to produce
    /// a bitmap.
    Failed {
        preview: Option<DecodedImage>,
        message: String,
    },
}

impl UploadOutcome {
    pub fn failed(preview: Option<DecodedImage>, message: impl Into<String>) -> Self {
        UploadOutcome::Failed {
            preview,
            message: message.into(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, UploadOutcome::Placeholder)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Succeeded { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, UploadOutcome::Failed { .. })
    }

    /// The decoded image to preview, if any
    pub fn preview(&self) -> Option<&DecodedImage> {
        match self {
            UploadOutcome::Placeholder => None,
            UploadOutcome::Succeeded { preview, .. } => Some(preview),
            UploadOutcome::Failed { preview, .. } => preview.as_ref(),
        }
    }

    pub fn response(&self) -> Option<&ModelResponse> {
        match self {
            UploadOutcome::Succeeded { response, .. } => Some(response),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            UploadOutcome::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// The phase this outcome leaves the interaction in
    pub fn phase(&self) -> ExtractionPhase {
        match self {
            UploadOutcome::Placeholder => ExtractionPhase::Idle,
            UploadOutcome::Succeeded { .. } => ExtractionPhase::Done,
            UploadOutcome::Failed { .. } => ExtractionPhase::Failed,
        }
    }
}
