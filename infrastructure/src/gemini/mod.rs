//! Gemini adapter
//!
//! Implements the [`ExtractionClient`](mom_application::ExtractionClient)
//! port against the `generateContent` REST endpoint.

pub mod client;
pub mod error;
pub mod protocol;
