//! Error types for the crate's own fallible operations.

use thiserror::Error;

/// Result type for errwrap operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading render configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A boolean variable held something other than a recognised boolean.
    #[error("Invalid boolean value for '{key}': {value}")]
    InvalidBool { key: String, value: String },

    /// A variable was set but is not valid unicode.
    #[error("Environment variable '{0}' is not valid unicode")]
    NotUnicode(String),
}
