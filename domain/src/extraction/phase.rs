//! Transient phase of a single upload interaction

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an interaction currently is
///
/// ```text
/// Idle → Decoding → Requesting → Done
///           │            │
///           └────────────┴─────→ Failed
/// ```
///
/// There are no transitions out of `Done` or `Failed`; a new upload starts a
/// fresh interaction at `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionPhase {
    #[default]
    Idle,
    Decoding,
    Requesting,
    Done,
    Failed,
}

impl ExtractionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionPhase::Idle => "idle",
            ExtractionPhase::Decoding => "decoding",
            ExtractionPhase::Requesting => "requesting",
            ExtractionPhase::Done => "done",
            ExtractionPhase::Failed => "failed",
        }
    }

    /// Whether the interaction has ended
    pub fn is_terminal(&self) -> bool {
        matches!(self, ExtractionPhase::Done | ExtractionPhase::Failed)
    }

    /// Whether moving to `next` is a legal step
    pub fn can_transition_to(&self, next: ExtractionPhase) -> bool {
        use ExtractionPhase::*;
        matches!(
            (self, next),
            (Idle, Decoding)
                | (Decoding, Requesting)
                | (Decoding, Failed)
                | (Requesting, Done)
                | (Requesting, Failed)
        )
    }
}

impl fmt::Display for ExtractionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(ExtractionPhase::default(), ExtractionPhase::Idle);
    }

    #[test]
    fn test_happy_path_transitions() {
        assert!(ExtractionPhase::Idle.can_transition_to(ExtractionPhase::Decoding));
        assert!(ExtractionPhase::Decoding.can_transition_to(ExtractionPhase::Requesting));
        assert!(ExtractionPhase::Requesting.can_transition_to(ExtractionPhase::Done));
    }

    #[test]
    fn test_failure_transitions() {
        assert!(ExtractionPhase::Decoding.can_transition_to(ExtractionPhase::Failed));
        assert!(ExtractionPhase::Requesting.can_transition_to(ExtractionPhase::Failed));
        assert!(!ExtractionPhase::Idle.can_transition_to(ExtractionPhase::Failed));
    }

    #[test]
    fn test_terminal_phases_do_not_transition() {
        for next in [
            ExtractionPhase::Idle,
            ExtractionPhase::Decoding,
            ExtractionPhase::Requesting,
        ] {
            assert!(!ExtractionPhase::Done.can_transition_to(next));
            assert!(!ExtractionPhase::Failed.can_transition_to(next));
        }
        assert!(ExtractionPhase::Done.is_terminal());
        assert!(ExtractionPhase::Failed.is_terminal());
        assert!(!ExtractionPhase::Requesting.is_terminal());
    }

    #[test]
    fn test_serialize_snake_case() {
        let json = serde_json::to_string(&ExtractionPhase::Requesting).unwrap();
        assert_eq!(json, "\"requesting\"");
    }
}
