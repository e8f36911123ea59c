//! Wrapping straight off a `Result`.
//!
//! ```rust
//! use errwrap::{BasicError, ResultExt};
//!
//! fn parse_port(raw: &str) -> Result<u16, BasicError> {
//!     raw.parse().map_err(|_| BasicError::new(format!("not a port: {raw}")))
//! }
//!
//! let err = parse_port("http").wrap_err("reading listener config").unwrap_err();
//! assert_eq!(err.to_string(), "reading listener config: not a port: http");
//!
//! assert_eq!(parse_port("8080").wrap_err("reading listener config").unwrap(), 8080);
//! ```

use crate::wrapped::{BoxedCause, WrappedError};

/// Extension methods for annotating the error side of a `Result`.
///
/// `Ok` values pass through untouched.
pub trait ResultExt<T> {
    /// Wrap the error, if any, with `message`.
    fn wrap_err(self, message: impl Into<String>) -> Result<T, WrappedError>;

    /// Wrap the error, if any, with a message built only when needed.
    fn wrap_err_with<M, F>(self, f: F) -> Result<T, WrappedError>
    where
        M: Into<String>,
        F: FnOnce() -> M;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxedCause>,
{
    fn wrap_err(self, message: impl Into<String>) -> Result<T, WrappedError> {
        self.map_err(|cause| WrappedError::new(cause, message))
    }

    fn wrap_err_with<M, F>(self, f: F) -> Result<T, WrappedError>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        self.map_err(|cause| WrappedError::new(cause, f()))
    }
}
