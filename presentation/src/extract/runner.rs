//! Runs the upload use case against a file on disk

use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::{SimpleProgress, SpinnerProgress};
use mom_application::{NoProgress, ProcessUploadInput, ProcessUploadUseCase};
use mom_domain::{OutputFormat, UploadOutcome};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::debug;

/// `mom-generator extract <PATH>`
pub struct ExtractCommand {
    use_case: ProcessUploadUseCase,
    output: OutputFormat,
    quiet: bool,
}

impl ExtractCommand {
    pub fn new(use_case: ProcessUploadUseCase) -> Self {
        Self {
            use_case,
            output: OutputFormat::default(),
            quiet: false,
        }
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Extract from `path`
    ///
    /// A file that cannot be read becomes a failed outcome like any other
    /// error.
    pub async fn outcome(&self, path: &Path) -> UploadOutcome {
        let input = match read_input(path).await {
            Ok(input) => input,
            Err(message) => return UploadOutcome::failed(None, message),
        };

        if self.quiet || self.output == OutputFormat::Json {
            self.use_case.execute_with_progress(Some(input), &NoProgress).await
        } else if std::io::stderr().is_terminal() {
            let spinner = SpinnerProgress::new();
            self.use_case
                .execute_with_progress(Some(input), &spinner)
                .await
        } else {
            self.use_case
                .execute_with_progress(Some(input), &SimpleProgress)
                .await
        }
    }

    /// Extract, print the outcome and report whether it succeeded
    pub async fn run(&self, path: PathBuf) -> bool {
        let outcome = self.outcome(&path).await;
        debug!(path = %path.display(), phase = %outcome.phase(), "Extraction finished");
        println!("{}", ConsoleFormatter::format(&outcome, self.output));
        outcome.is_success()
    }
}

async fn read_input(path: &Path) -> Result<ProcessUploadInput, String> {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "Read image file");

    Ok(ProcessUploadInput::new(filename, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mom_application::{DecodeError, ExtractionClient, ExtractionError, ImageDecoder};
    use mom_domain::{DecodedImage, InstructionPrompt, ModelResponse, UploadedImage};
    use std::sync::{Arc, Mutex};

    struct PassthroughDecoder;

    impl ImageDecoder for PassthroughDecoder {
        fn decode(&self, image: &UploadedImage) -> Result<DecodedImage, DecodeError> {
            Ok(DecodedImage::new(image.format(), 1, 1, image.bytes().to_vec()))
        }
    }

    struct EchoClient {
        seen: Mutex<Vec<Vec<u8>>>,
    }

    #[async_trait]
    impl ExtractionClient for EchoClient {
        async fn extract(
            &self,
            image: &DecodedImage,
            _prompt: &InstructionPrompt,
        ) -> Result<ModelResponse, ExtractionError> {
            self.seen.lock().unwrap().push(image.bytes.clone());
            Ok(ModelResponse::new("| Particulars (To-Dos) |"))
        }

        fn model_name(&self) -> &str {
            "echo"
        }
    }

    fn command() -> (ExtractCommand, Arc<EchoClient>) {
        let client = Arc::new(EchoClient {
            seen: Mutex::new(Vec::new()),
        });
        let use_case = ProcessUploadUseCase::new(client.clone(), Arc::new(PassthroughDecoder));
        (ExtractCommand::new(use_case).with_quiet(true), client)
    }

    #[tokio::test]
    async fn test_reads_file_and_extracts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("minutes.jpeg");
        std::fs::write(&path, b"jpeg bytes").unwrap();

        let (command, client) = command();
        let outcome = command.outcome(&path).await;

        assert!(outcome.is_success());
        assert_eq!(client.seen.lock().unwrap()[0], b"jpeg bytes".to_vec());
    }

    #[tokio::test]
    async fn test_missing_file_is_failure_without_call() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.png");

        let (command, client) = command();
        let outcome = command.outcome(&path).await;

        assert!(outcome.error_message().unwrap().starts_with("Failed to read"));
        assert!(client.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_run_reports_failure_for_unsupported_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("minutes.gif");
        std::fs::write(&path, b"GIF89a").unwrap();

        let (command, _) = command();
        assert!(!command.with_output(OutputFormat::Json).run(path).await);
    }
}
