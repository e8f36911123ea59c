//! Render configuration.
//!
//! [`RenderOptions`] drives [`render_with`](crate::render_with). The defaults
//! reproduce the plain `Display` rendering; [`RenderOptions::verbose`]
//! reproduces the alternate one. Options can also be read from environment
//! variables:
//!
//! ```rust,ignore
//! // APP_VERBOSE=yes APP_SEPARATOR=" <- "
//! let options = RenderOptions::from_env("APP")?;
//! ```

use crate::error::{ConfigError, Result};
use std::env::{self, VarError};

/// Default separator between messages.
pub const DEFAULT_SEPARATOR: &str = ": ";

/// Separator used by the verbose preset.
pub const VERBOSE_SEPARATOR: &str = "\n";

/// Which end of the chain is written first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChainOrder {
    /// Outermost context first, the root cause last.
    #[default]
    OutermostFirst,
    /// Root cause first, like a stack trace.
    InnermostFirst,
}

/// Options for rendering a cause chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Text placed between consecutive messages (default: `": "`)
    pub separator: String,
    /// Order in which messages are written
    pub order: ChainOrder,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            order: ChainOrder::OutermostFirst,
        }
    }
}

impl RenderOptions {
    /// One message per line, root cause first.
    pub fn verbose() -> Self {
        Self {
            separator: VERBOSE_SEPARATOR.to_string(),
            order: ChainOrder::InnermostFirst,
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_order(mut self, order: ChainOrder) -> Self {
        self.order = order;
        self
    }

    /// Load options from `{prefix}_VERBOSE` and `{prefix}_SEPARATOR`.
    ///
    /// Unset variables keep their defaults. `{prefix}_VERBOSE` selects the
    /// [`verbose`](Self::verbose) preset; the separator, when set, overrides
    /// whichever preset was chosen.
    pub fn from_env(prefix: &str) -> Result<Self> {
        let verbose_key = format!("{}_VERBOSE", prefix);
        let separator_key = format!("{}_SEPARATOR", prefix);

        let mut options = match get_env(&verbose_key)? {
            Some(value) if parse_bool(&verbose_key, &value)? => Self::verbose(),
            _ => Self::default(),
        };

        if let Some(separator) = get_env(&separator_key)? {
            options.separator = separator;
        }

        Ok(options)
    }
}

fn get_env(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(key.to_string())),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
