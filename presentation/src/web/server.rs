//! HTTP server for the web shell

use crate::web::handlers::{WebShellState, health, index, upload};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Build the shell's routes
pub fn router(state: WebShellState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(index).post(upload))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

/// Serve until Ctrl-C
pub async fn serve(
    listener: TcpListener,
    state: WebShellState,
    max_upload_bytes: usize,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, max_upload_bytes, "Web shell listening");
    }

    axum::serve(listener, router(state, max_upload_bytes))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down web shell");
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mom_application::{
        DecodeError, ExtractionClient, ExtractionError, ImageDecoder, ProcessUploadUseCase,
    };
    use mom_domain::{DecodedImage, InstructionPrompt, ModelResponse, UploadedImage};
    use reqwest::multipart::{Form, Part};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubDecoder;

    impl ImageDecoder for StubDecoder {
        fn decode(&self, image: &UploadedImage) -> Result<DecodedImage, DecodeError> {
            if image.bytes().starts_with(b"\x89PNG") {
                Ok(DecodedImage::new(
                    image.format(),
                    100,
                    100,
                    image.bytes().to_vec(),
                ))
            } else {
                Err(DecodeError::new(image.filename(), "cannot identify image file"))
            }
        }
    }

    struct StubClient {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ExtractionClient for StubClient {
        async fn extract(
            &self,
            _image: &DecodedImage,
            _prompt: &InstructionPrompt,
        ) -> Result<ModelResponse, ExtractionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ModelResponse::new(
                "| Particulars (To-Dos) | Deadline |\n|---|---|\n| Order chairs | TBD |\n",
            ))
        }

        fn model_name(&self) -> &str {
            "stub"
        }
    }

    async fn spawn_shell(limit: usize) -> (String, Arc<StubClient>) {
        let client = Arc::new(StubClient {
            calls: AtomicUsize::new(0),
        });
        let use_case = ProcessUploadUseCase::new(client.clone(), Arc::new(StubDecoder));
        let app = router(WebShellState::new(use_case), limit);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}", addr), client)
    }

    fn file_form(name: &str, bytes: &[u8]) -> Form {
        Form::new().part("file", Part::bytes(bytes.to_vec()).file_name(name.to_string()))
    }

    #[tokio::test]
    async fn test_index_and_health() {
        let (base, _) = spawn_shell(1024).await;

        let page = reqwest::get(&base).await.unwrap().text().await.unwrap();
        assert!(page.contains("Please upload an image to proceed."));

        let health = reqwest::get(format!("{}/health", base))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(health, "OK");
    }

    #[tokio::test]
    async fn test_upload_renders_result() {
        let (base, client) = spawn_shell(1024 * 1024).await;

        let response = reqwest::Client::new()
            .post(&base)
            .multipart(file_form("notes.png", b"\x89PNG rest"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        let page = response.text().await.unwrap();

        assert!(page.contains("Uploaded Image"));
        assert!(page.contains("Extraction Completed"));
        assert!(page.contains("<td>Order chairs</td>"));
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_undecodable_upload_shows_error_without_call() {
        let (base, client) = spawn_shell(1024 * 1024).await;

        let page = reqwest::Client::new()
            .post(&base)
            .multipart(file_form("notes.jpg", b"plain text"))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();

        assert!(page.contains("Something went wrong: Failed to decode notes.jpg"));
        assert!(!page.contains("Extraction Completed"));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_submission_shows_placeholder() {
        let (base, client) = spawn_shell(1024).await;

        let page = reqwest::Client::new()
            .post(&base)
            .multipart(Form::new().text("other", "value"))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();

        assert!(page.contains("Please upload an image to proceed."));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }
}
