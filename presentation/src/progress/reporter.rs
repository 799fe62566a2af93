//! Progress reporting for a single extraction

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use mom_application::ExtractionProgress;
use mom_domain::ExtractionPhase;
use std::sync::Mutex;
use std::time::Duration;

pub const LOADING_MESSAGE: &str = "Extracting and analyzing the image...";

/// Shows a spinner while the model request is in flight
pub struct SpinnerProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn finish(&self) {
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_and_clear();
        }
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionProgress for SpinnerProgress {
    fn on_phase(&self, phase: ExtractionPhase) {
        match phase {
            ExtractionPhase::Requesting => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(Self::spinner_style());
                pb.set_message(LOADING_MESSAGE);
                pb.enable_steady_tick(Duration::from_millis(100));
                if let Ok(mut guard) = self.spinner.lock() {
                    *guard = Some(pb);
                }
            }
            phase if phase.is_terminal() => self.finish(),
            _ => {}
        }
    }
}

impl Drop for SpinnerProgress {
    fn drop(&mut self) {
        self.finish();
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ExtractionProgress for SimpleProgress {
    fn on_phase(&self, phase: ExtractionPhase) {
        match phase {
            ExtractionPhase::Decoding => eprintln!("{} Decoding image", "->".cyan()),
            ExtractionPhase::Requesting => eprintln!("{} {}", "->".cyan(), LOADING_MESSAGE),
            ExtractionPhase::Done => eprintln!("  {} done", "v".green()),
            ExtractionPhase::Failed => eprintln!("  {} failed", "x".red()),
            ExtractionPhase::Idle => {}
        }
    }
}
