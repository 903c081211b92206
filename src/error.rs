//! Error types for the `sift` application.
//!
//! Uses [`thiserror`] for ergonomic error derivation. The core pipeline
//! never surfaces errors — a line that fails to decode passes through as
//! plain text — so these cover only the binary's setup and I/O.

use thiserror::Error;

/// Errors that can occur in `sift`.
///
/// Maps to exit codes: [`Config`](Self::Config) → exit 1,
/// [`Io`](Self::Io) → exit 2.
#[derive(Debug, Error)]
pub enum SiftError {
    /// Configuration error (invalid flag value, unreadable config file).
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),
}
