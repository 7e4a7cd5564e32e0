//! Core error types for goaltracker-core.
//!
//! Date parsing and index selection are recoverable: the caller flags the
//! line or re-prompts. Everything else bubbles up through [`CoreError`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for goaltracker-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A date line could not be turned into a milestone
    #[error("Date error: {0}")]
    Date(#[from] DateParseError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a `year|month|day|hour|minute|second` line was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("expected 6 '|'-separated fields, found {found}")]
    FieldCount { found: usize },

    #[error("{field} is not an integer: '{value}'")]
    InvalidField { field: &'static str, value: String },

    #[error(
        "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02} \
         is not a valid date/time"
    )]
    InvalidCalendar {
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
    },
}

/// Rejected index choice at the selection prompt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("The index chosen is in the incorrect format.")]
    NotANumber(String),

    #[error("The index is out of range.")]
    OutOfRange { index: usize, len: usize },

    #[error("The date at index {index} could not be parsed.")]
    InvalidDate { index: usize },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Could not locate the configuration directory
    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
