//! Error types for the CLI application.
//!
//! ## Batch Validation Errors
//!
//! The `BatchValidationError<T>` type collects per-item failures of a batch
//! (one hand-history file that cannot be read, one record that cannot be
//! parsed) so that a single bad file never aborts a whole generation run.

use std::fmt;
use thiserror::Error;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A record could not be turned into examples
    #[error("Engine error: {0}")]
    Engine(String),
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        CliError::Io(error.into())
    }
}

impl From<phhforge_engine::errors::HandError> for CliError {
    fn from(error: phhforge_engine::errors::HandError) -> Self {
        CliError::Engine(error.to_string())
    }
}

/// Per-item failure inside a batch.
///
/// # Type Parameters
///
/// * `T` - Context type identifying the failed item (e.g. `usize` for an index,
///   `String` for a file path). Must implement `Display` for error formatting.
///
/// # Examples
///
/// ```rust
/// use phhforge_cli::BatchValidationError;
///
/// let error = BatchValidationError {
///     item_context: "30/hand_0001.phh".to_string(),
///     message: "Record has no key = value lines".to_string(),
/// };
/// assert_eq!(error.to_string(), "30/hand_0001.phh: Record has no key = value lines");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchValidationError<T> {
    /// Context identifying the item that failed validation
    pub item_context: T,
    /// Descriptive error message
    pub message: String,
}

impl<T: fmt::Display> fmt::Display for BatchValidationError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item_context, self.message)
    }
}

impl<T: fmt::Debug + fmt::Display> std::error::Error for BatchValidationError<T> {}
