//! Error annotation with message chaining.
//!
//! This crate wraps an underlying failure with a human-readable message while
//! keeping the original error reachable. It has two error types:
//!
//! - [`BasicError`] - a message with no cause, the end of every chain we build
//! - [`WrappedError`] - a message plus exactly one owned cause, which can be
//!   any `std::error::Error + Send + Sync + 'static`
//!
//! Causes are exposed through `std::error::Error::source`, so generic chain
//! walkers (including the ones in [`chain`]) see through a `WrappedError`
//! without special handling.
//!
//! # Example
//!
//! ```rust
//! use errwrap::{new_basic_error, render, render_verbose, wrap, wrapf};
//!
//! let err = wrap(Some(new_basic_error("a")), "b");
//! let err = wrapf!(err, "{}", "c").unwrap();
//!
//! assert_eq!(render(&err), "c: b: a");
//! assert_eq!(render_verbose(&err), "a\nb\nc");
//!
//! // Wrapping "no error" is still no error.
//! let nothing = wrapf!(None::<errwrap::BasicError>, "step {} failed", 3);
//! assert!(nothing.is_none());
//! ```
//!
//! # Rendering
//!
//! `Display` gives the compact form, outermost context first. The alternate
//! flag (`{:#}`) gives the detailed form, root cause first with one message per
//! line. [`render_with`] walks the chain with a configurable separator and
//! order, see [`RenderOptions`].
//!
//! # Logging
//!
//! Nothing here logs on its own. [`log_chain`] reports a chain through
//! `tracing` when the caller asks for it.

pub mod basic;
pub mod chain;
pub mod config;
pub mod context;
pub mod error;
pub mod render;
pub mod report;
pub mod wrapped;

// Re-export commonly used types
pub use basic::{new_basic_error, BasicError};
pub use chain::{any_cause, cause, chain, depth, find_cause, root_cause, Chain};
pub use config::{ChainOrder, RenderOptions};
pub use context::ResultExt;
pub use error::{ConfigError, Result};
pub use render::{render, render_verbose, render_with};
pub use report::log_chain;
pub use wrapped::{wrap, wrap_with_format, BoxedCause, WrappedError};

/// Wrap an optional cause with a formatted message.
///
/// Expands to [`wrap_with_format`]; the message is only formatted when the
/// cause is `Some`.
///
/// ```rust
/// use errwrap::{wrapf, BasicError};
///
/// let err = wrapf!(Some(BasicError::new("eof")), "failed {} at {}", "x", 3).unwrap();
/// assert_eq!(err.message(), "failed x at 3");
/// assert_eq!(err.to_string(), "failed x at 3: eof");
/// ```
#[macro_export]
macro_rules! wrapf {
    ($cause:expr, $($arg:tt)+) => {
        $crate::wrap_with_format($cause, ::core::format_args!($($arg)+))
    };
}
