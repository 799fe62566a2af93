//! Output formatting for extraction outcomes

pub mod console;
pub mod markdown;
