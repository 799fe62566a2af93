//! Console shell: run one extraction on a local file

pub mod runner;

pub use runner::ExtractCommand;
