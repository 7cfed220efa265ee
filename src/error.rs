//! Error types for `fly`.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use thiserror::Error;

/// Errors that can occur while creating a logger or loading its settings.
///
/// Everything here is raised at construction time; nothing is registered
/// when one of them is returned. Problems that happen while logging (unknown
/// colors, empty message lists) are reported as `log::warn!` diagnostics
/// instead.
///
/// The binary maps [`Io`](Self::Io) to exit 2 and everything else to exit 1.
#[derive(Debug, Error)]
pub enum FlyError {
    /// The logger identifier was empty.
    #[error("id is required")]
    MissingIdentifier,

    /// A logger with this identifier is already registered.
    #[error("logger with id '{0}' already exists")]
    DuplicateIdentifier(String),

    /// The merged level set is empty.
    #[error("no levels defined for logger with id '{0}'")]
    NoLevelsDefined(String),

    /// Two or more level names share a numeric value.
    #[error("duplicate level values found in logger '{id}': {}", join_values(.values))]
    DuplicateLevelValue { id: String, values: Vec<u32> },

    /// The threshold names a level that does not exist.
    #[error("level '{level}' not found while setting threshold of logger '{id}'")]
    InvalidThresholdLevel { id: String, level: String },

    /// Configuration error (unreadable config file, bad flag value).
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),
}

fn join_values(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
