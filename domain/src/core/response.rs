//! Model response value object

use serde::{Deserialize, Serialize};

/// Text returned by the hosted model (Value Object)
///
/// Expected to contain a markdown table, but the content is trusted verbatim
/// and never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelResponse {
    text: String,
}

impl ModelResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Get the response text
    pub fn text(&self) -> &str {
        &self.text
    }

}

impl std::fmt::Display for ModelResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
