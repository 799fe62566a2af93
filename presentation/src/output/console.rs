//! Console output formatter for extraction outcomes

use colored::Colorize;
use mom_domain::{OutputFormat, UploadOutcome};

pub const PLACEHOLDER_MESSAGE: &str = "Please upload an image to proceed.";
pub const SUCCESS_MESSAGE: &str = "Extraction Completed";

/// Banner text shown for a failed interaction
pub fn failure_message(description: &str) -> String {
    format!("Something went wrong: {}", description)
}

/// Formats extraction outcomes for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format an outcome in the requested format
    pub fn format(outcome: &UploadOutcome, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => Self::format_text(outcome),
            OutputFormat::Json => Self::format_json(outcome),
        }
    }

    /// Banner followed by the model response verbatim
    pub fn format_text(outcome: &UploadOutcome) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Minutes of Meeting (MoM) Generator"));
        output.push('\n');

        if let Some(preview) = outcome.preview() {
            output.push_str(&format!(
                "{} {}x{} {}\n\n",
                "Uploaded Image:".cyan().bold(),
                preview.width,
                preview.height,
                preview.format
            ));
        }

        match outcome {
            UploadOutcome::Placeholder => {
                output.push_str(&format!("{}\n", PLACEHOLDER_MESSAGE.blue()));
            }
            UploadOutcome::Succeeded { response, .. } => {
                output.push_str(&format!("{}\n\n", SUCCESS_MESSAGE.green().bold()));
                output.push_str(response.text());
                if !response.text().ends_with('\n') {
                    output.push('\n');
                }
            }
            UploadOutcome::Failed { message, .. } => {
                output.push_str(&format!("{}\n", failure_message(message).red().bold()));
            }
        }

        output
    }

    /// The outcome as pretty-printed JSON
    pub fn format_json(outcome: &UploadOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|e| {
            serde_json::json!({ "status": "failed", "message": e.to_string() }).to_string()
        })
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{}\n{}\n", line.cyan(), title.cyan().bold(), line.cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mom_domain::{DecodedImage, ImageFormat, ModelResponse};

    fn preview() -> DecodedImage {
        DecodedImage::new(ImageFormat::Png, 100, 100, vec![1, 2, 3])
    }

    #[test]
    fn test_success_shows_banner_and_verbatim_text() {
        colored::control::set_override(false);
        let outcome = UploadOutcome::Succeeded {
            preview: preview(),
            response: ModelResponse::new("| Particulars (To-Dos) |\n|---|\n| Ship it |"),
        };

        let text = ConsoleFormatter::format(&outcome, OutputFormat::Text);
        assert!(text.contains("Extraction Completed"));
        assert!(text.contains("| Ship it |"));
        assert!(text.contains("100x100 png"));
        assert!(!text.contains("Something went wrong"));
    }

    #[test]
    fn test_failure_shows_error_only() {
        colored::control::set_override(false);
        let outcome = UploadOutcome::failed(None, "Connection failed: refused");

        let text = ConsoleFormatter::format_text(&outcome);
        assert!(text.contains("Something went wrong: Connection failed: refused"));
        assert!(!text.contains("Extraction Completed"));
        assert!(!text.contains("Uploaded Image"));
    }

    #[test]
    fn test_placeholder_message() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format_text(&UploadOutcome::Placeholder);
        assert!(text.contains(PLACEHOLDER_MESSAGE));
    }

    #[test]
    fn test_json_output_omits_image_bytes() {
        let outcome = UploadOutcome::Succeeded {
            preview: preview(),
            response: ModelResponse::new("table"),
        };

        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&outcome)).unwrap();
        assert_eq!(json["status"], "succeeded");
        assert_eq!(json["response"], "table");
        assert_eq!(json["preview"]["width"], 100);
        assert!(json["preview"].get("bytes").is_none());
    }
}
