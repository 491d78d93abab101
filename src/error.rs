//! Error types for the censoring transform.

use thiserror::Error;

/// Result type alias for censoring operations
pub type Result<T> = std::result::Result<T, CensorError>;

/// Errors that can occur while censoring a digit sequence.
#[derive(Error, Debug)]
pub enum CensorError {
    /// Input does not begin with the `3.` prefix. Raised before any output is written.
    #[error("Invalid input: digits must start with '3.', found {found:?}")]
    InvalidInput { found: String },

    /// Failed to write to the output sink, or to read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The caller cancelled an in-flight transform
    #[error("Censoring was cancelled")]
    Cancelled,

    /// Rejected configuration value
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// CSV report serialization error
    #[error("CSV report error: {0}")]
    Csv(#[from] csv::Error),

    /// Two strategies disagreed on the same input
    #[error("Strategy {strategy} disagrees: expected {expected}, found {found}")]
    StrategyMismatch {
        strategy: String,
        expected: String,
        found: String,
    },
}

impl CensorError {
    /// Builds an `InvalidInput` error from the offending input, keeping at most
    /// the first two characters for the message.
    pub(crate) fn invalid_input(input: &[u8]) -> Self {
        let head = &input[..input.len().min(2)];
        CensorError::InvalidInput {
            found: String::from_utf8_lossy(head).into_owned(),
        }
    }
}
