//! Prompt domain
//!
//! The fixed instruction sent alongside every uploaded image.

mod minutes;

pub use minutes::{InstructionPrompt, MOM_TABLE_HEADER};
