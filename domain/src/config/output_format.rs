//! Output format value object

use serde::{Deserialize, Serialize};

/// How the console shell prints an upload outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored banner followed by the verbatim model response (default)
    #[default]
    Text,
    /// The outcome serialized as JSON
    Json,
}
