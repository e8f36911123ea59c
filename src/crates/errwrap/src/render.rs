//! Turning a chain into text.

use crate::config::{ChainOrder, RenderOptions};
use crate::WrappedError;
use std::error::Error;

/// Single-line rendering, outermost context first: `"c: b: a"`.
pub fn render<E>(err: &E) -> String
where
    E: Error + ?Sized,
{
    err.to_string()
}

/// Multi-line rendering, root cause first: `"a\nb\nc"`.
pub fn render_verbose<E>(err: &E) -> String
where
    E: Error + ?Sized,
{
    format!("{err:#}")
}

/// Render `err` according to `options`.
///
/// Walks [`WrappedError`] links by their own messages. The first link that is
/// not a `WrappedError` is rendered whole and ends the walk, so foreign errors
/// that already print their own causes are not repeated.
pub fn render_with(err: &(dyn Error + 'static), options: &RenderOptions) -> String {
    let mut segments = Vec::new();
    let mut current = err;
    while let Some(wrapped) = current.downcast_ref::<WrappedError>() {
        segments.push(wrapped.message().to_string());
        let cause: &(dyn Error + 'static) = wrapped.cause();
        current = cause;
    }

    let terminal = match options.order {
        ChainOrder::OutermostFirst => current.to_string(),
        ChainOrder::InnermostFirst => format!("{current:#}"),
    };
    segments.push(terminal);

    if options.order == ChainOrder::InnermostFirst {
        segments.reverse();
    }

    segments.join(&options.separator)
}
