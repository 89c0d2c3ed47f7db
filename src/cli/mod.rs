//! CLI interface for levenshtein
//!
//! Usage text and logging setup for the `levenshtein` binary.

pub mod args;
pub mod logging;

pub use args::{render_usage, usage_command};
pub use logging::init_tracing;
