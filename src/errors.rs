use std::io;

use thiserror::Error;

/// Error raised when a persisted record line cannot be decoded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("expected 5 comma-separated fields, found {0}")]
    FieldCount(usize),
    #[error("invalid date `{0}`: expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid amount `{0}`")]
    InvalidAmount(String),
}

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Format error: {0}")]
    Format(#[from] FormatError),
}

/// Error raised while loading or saving the user configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
