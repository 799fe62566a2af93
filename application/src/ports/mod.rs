//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod extraction_client;
pub mod extraction_logger;
pub mod image_decoder;
pub mod progress;
