//! Error types for argument interpretation.

use thiserror::Error;

/// Errors that end an interpretation run.
///
/// Output already written before the error stands; nothing further is
/// written once one of these is returned.
#[derive(Debug, Error)]
pub enum InterpretError {
    /// The token following `--cutoff` is not a non-negative base-10 integer.
    #[error("Expected a non-negative number as parameter to --cutoff, got '{0}'")]
    MalformedCutoffValue(String),

    /// A second action flag was given after one had already been chosen.
    #[error("Please specify at most one action")]
    ConflictingAction,

    /// End of input was reached without a SOURCE and at least one TARGET.
    #[error("Expecting a SOURCE and at least one TARGET")]
    InsufficientArguments,

    /// Writing results to the output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InterpretError {
    /// Whether the error stems from how the program was invoked, in which
    /// case the usage text should accompany it.
    pub fn is_usage_error(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

/// A specialized `Result` type for argument interpretation.
pub type Result<T> = std::result::Result<T, InterpretError>;
