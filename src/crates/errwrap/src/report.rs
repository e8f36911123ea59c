//! Emitting a cause chain as `tracing` events.

use crate::chain::{chain, depth};
use crate::WrappedError;
use std::error::Error;
use tracing::{debug, error};

/// Log `err` and each of its causes.
///
/// Emits one `ERROR` event with the single-line rendering and chain depth,
/// then one `DEBUG` event per link, outermost first. Nothing else in this
/// crate logs; callers decide when a chain is worth reporting.
pub fn log_chain(err: &(dyn Error + 'static)) {
    error!(error = %err, depth = depth(err), "error chain");

    for (index, link) in chain(err).enumerate() {
        match link.downcast_ref::<WrappedError>() {
            Some(wrapped) => debug!(index, link = %wrapped.message(), "cause"),
            None => debug!(index, link = %link, "cause"),
        }
    }
}
