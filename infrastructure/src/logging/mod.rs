//! Structured extraction logging
//!
//! [`JsonlExtractionLogger`] implements the
//! [`ExtractionLogger`](mom_application::ExtractionLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlExtractionLogger;
