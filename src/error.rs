//! Error taxonomy for registry and selection operations
//!
//! Every variant is recoverable: callers surface the message and the user
//! re-issues a corrected intent. Nothing here aborts the process.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Add with an identifier already taken by a built-in or custom entry.
    #[error("identifier '{0}' is already in use")]
    DuplicateIdentifier(String),

    /// Remove referencing an id that is not a custom entry. Built-ins land
    /// here too: they are never removable.
    #[error("no removable custom entry with identifier '{0}'")]
    NotFound(String),

    /// Custom node endpoint URL failed validation.
    #[error("invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// Custom node references a network that does not exist.
    #[error("unknown network '{0}'")]
    UnknownNetwork(String),
}
