//! Request handlers for the web shell

use crate::web::page::render_page;
use axum::extract::multipart::{Multipart, MultipartError};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use mom_application::{ProcessUploadInput, ProcessUploadUseCase};
use mom_domain::UploadOutcome;
use std::sync::Arc;
use tracing::{debug, warn};

/// Form field carrying the uploaded file
pub const UPLOAD_FIELD: &str = "file";

/// State shared by all requests
#[derive(Clone)]
pub struct WebShellState {
    pub use_case: Arc<ProcessUploadUseCase>,
}

impl WebShellState {
    pub fn new(use_case: ProcessUploadUseCase) -> Self {
        Self {
            use_case: Arc::new(use_case),
        }
    }
}

/// GET / - the empty form with the placeholder message
pub async fn index() -> Html<String> {
    Html(render_page(&UploadOutcome::Placeholder))
}

/// POST / - run one extraction and render its outcome
pub async fn upload(
    State(state): State<WebShellState>,
    multipart: Multipart,
) -> (StatusCode, Html<String>) {
    match read_upload(multipart).await {
        Ok(input) => {
            let outcome = state.use_case.execute(input).await;
            debug!(phase = %outcome.phase(), "Upload handled");
            (StatusCode::OK, Html(render_page(&outcome)))
        }
        Err(e) => {
            warn!(error = %e, "Failed to read upload");
            let outcome = UploadOutcome::failed(None, e.body_text());
            (e.status(), Html(render_page(&outcome)))
        }
    }
}

/// GET /health
pub async fn health() -> &'static str {
    "OK"
}

/// Pull the `file` part out of the form
///
/// A missing part, an empty file name or an empty body all count as "no
/// upload".
pub async fn read_upload(
    mut multipart: Multipart,
) -> Result<Option<ProcessUploadInput>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        if filename.is_empty() || bytes.is_empty() {
            debug!("Upload field present but empty");
            return Ok(None);
        }
        return Ok(Some(ProcessUploadInput::new(filename, bytes.to_vec())));
    }
    Ok(None)
}
