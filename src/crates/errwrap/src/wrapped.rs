//! Contextual errors that own the failure they annotate.
//!
//! A [`WrappedError`] pairs a message with exactly one cause. Rendering is
//! recursive and comes in two shapes, selected by the `Display` alternate flag:
//!
//! ```text
//! {}   -> "c: b: a"      outermost context first, single line
//! {:#} -> "a\nb\nc"      innermost first, one message per line
//! ```

use std::error::Error;
use std::fmt;

/// Owned, thread-safe cause of a [`WrappedError`].
pub type BoxedCause = Box<dyn Error + Send + Sync + 'static>;

/// An error that adds a message to an underlying cause.
#[derive(Debug)]
pub struct WrappedError {
    message: String,
    cause: BoxedCause,
}

impl WrappedError {
    /// Wrap `cause` with `message`.
    ///
    /// Prefer [`wrap`] when the cause may be absent.
    pub fn new(cause: impl Into<BoxedCause>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: cause.into(),
        }
    }

    /// The context added at this level, without the cause.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error this one wraps.
    pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.cause
    }

    /// Discard this level's message and hand back ownership of the cause.
    pub fn into_cause(self) -> BoxedCause {
        self.cause
    }
}

impl fmt::Display for WrappedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{:#}\n{}", self.cause, self.message)
        } else {
            write!(f, "{}: {}", self.message, self.cause)
        }
    }
}

impl Error for WrappedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        let cause: &(dyn Error + 'static) = &*self.cause;
        Some(cause)
    }
}

/// Annotate `cause` with `message`.
///
/// Returns `None` when there is no cause, so wrapping can be applied
/// unconditionally after an operation that may or may not have failed.
///
/// # Example
///
/// ```rust
/// use errwrap::{wrap, BasicError};
///
/// let err = wrap(Some(BasicError::new("connection reset")), "fetching index").unwrap();
/// assert_eq!(err.to_string(), "fetching index: connection reset");
///
/// assert!(wrap(None::<BasicError>, "fetching index").is_none());
/// ```
pub fn wrap<E>(cause: Option<E>, message: impl Into<String>) -> Option<WrappedError>
where
    E: Into<BoxedCause>,
{
    let cause = cause?;
    Some(WrappedError::new(cause, message))
}

/// Annotate `cause` with a message built from format arguments.
///
/// The arguments are only formatted when a cause is present. Most callers want
/// the [`wrapf!`](crate::wrapf) macro rather than calling this directly.
pub fn wrap_with_format<E>(cause: Option<E>, args: fmt::Arguments<'_>) -> Option<WrappedError>
where
    E: Into<BoxedCause>,
{
    let cause = cause?;
    Some(WrappedError::new(cause, fmt::format(args)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BasicError;
    use std::cell::Cell;

    fn abc() -> WrappedError {
        let b = WrappedError::new(BasicError::new("a"), "b");
        WrappedError::new(b, "c")
    }

    #[test]
    fn test_render_outermost_first() {
        assert_eq!(abc().to_string(), "c: b: a");
    }

    #[test]
    fn test_render_verbose_innermost_first() {
        assert_eq!(format!("{:#}", abc()), "a\nb\nc");
    }

    #[test]
    fn test_wrap_none_is_none() {
        assert!(wrap(None::<BasicError>, "context").is_none());
    }

    #[test]
    fn test_wrap_some() {
        let err = wrap(Some(BasicError::new("root")), "context").unwrap();
        assert_eq!(err.message(), "context");
        assert_eq!(err.cause().to_string(), "root");
        assert_eq!(err.to_string(), "context: root");
    }

    #[test]
    fn test_wrap_empty_message() {
        let err = wrap(Some(BasicError::new("root")), "").unwrap();
        assert_eq!(err.to_string(), ": root");
    }

    #[test]
    fn test_cause_is_same_allocation() {
        let boxed: BoxedCause = Box::new(BasicError::new("root"));
        let addr = &*boxed as *const (dyn Error + Send + Sync) as *const u8;

        let err = wrap(Some(boxed), "context").unwrap();
        let cause_addr = err.cause() as *const (dyn Error + Send + Sync) as *const u8;
        assert_eq!(addr, cause_addr);

        let unwrapped = err.into_cause();
        assert_eq!(
            addr,
            &*unwrapped as *const (dyn Error + Send + Sync) as *const u8
        );
    }

    #[test]
    fn test_source_matches_cause() {
        let err = abc();
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "b: a");
        assert!(source.downcast_ref::<WrappedError>().is_some());
    }

    #[test]
    fn test_wrap_with_format() {
        let err = wrap_with_format(
            Some(BasicError::new("root")),
            format_args!("failed {} at {}", "x", 3),
        )
        .unwrap();
        assert_eq!(err.message(), "failed x at 3");
    }

    #[test]
    fn test_wrap_with_format_none_skips_formatting() {
        struct Counted<'a>(&'a Cell<u32>);

        impl fmt::Display for Counted<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.set(self.0.get() + 1);
                f.write_str("counted")
            }
        }

        let calls = Cell::new(0);
        let result = wrap_with_format(
            None::<BasicError>,
            format_args!("{}", Counted(&calls)),
        );
        assert!(result.is_none());
        assert_eq!(calls.get(), 0);

        let result = wrap_with_format(
            Some(BasicError::new("root")),
            format_args!("{}", Counted(&calls)),
        );
        assert_eq!(result.unwrap().message(), "counted");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_wrap_external_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = wrap(Some(io), "opening config").unwrap();
        assert_eq!(err.to_string(), "opening config: no such file");
        assert_eq!(format!("{err:#}"), "no such file\nopening config");
        assert!(err.cause().downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn test_render_is_repeatable() {
        let err = abc();
        assert_eq!(err.to_string(), err.to_string());
        assert_eq!(format!("{err:#}"), format!("{err:#}"));
    }
}
