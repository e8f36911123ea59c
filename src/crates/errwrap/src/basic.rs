//! Terminal, message-only errors.

use thiserror::Error;

/// A leaf error carrying only a message.
///
/// A `BasicError` never has a cause, so it always terminates a chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct BasicError {
    message: String,
}

impl BasicError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message this error was created with.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Create a new [`BasicError`] from a message.
pub fn new_basic_error(message: impl Into<String>) -> BasicError {
    BasicError::new(message)
}
