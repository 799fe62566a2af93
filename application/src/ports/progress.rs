//! Progress notification port
//!
//! Defines the interface for reporting phase changes during one upload
//! interaction.

use mom_domain::ExtractionPhase;

/// Callback for progress updates during an extraction
///
/// Implementations live in the presentation layer (console spinner, etc.)
pub trait ExtractionProgress: Send + Sync {
    /// Called each time the interaction enters a new phase
    fn on_phase(&self, phase: ExtractionPhase);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ExtractionProgress for NoProgress {
    fn on_phase(&self, _phase: ExtractionPhase) {}
}
