//! Extraction interaction domain
//!
//! One upload event walks through [`phase::ExtractionPhase`] and ends in a
//! single [`outcome::UploadOutcome`].

pub mod outcome;
pub mod phase;
