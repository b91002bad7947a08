//! Core error types for studymatch-core.
//!
//! Failures are local to a single operation and never leave partial state
//! behind. Most of them are user-recoverable; see [`CoreError::is_recoverable`].

use std::path::PathBuf;
use thiserror::Error;

use crate::session::SessionId;

/// Core error type for studymatch-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Malformed input: a missing profile field, a value outside the
    /// catalog, or a group size out of range.
    #[error("Invalid value for '{field}': {message}")]
    InvalidInput { field: String, message: String },

    /// The operation needs a saved profile as identity.
    #[error("Save a profile first")]
    RequiresProfile,

    /// No session with this id.
    #[error("Session #{session_id} not found")]
    NotFound { session_id: SessionId },

    /// No capacity left.
    #[error("Session #{session_id} is full")]
    SessionFull { session_id: SessionId },

    /// A thread panicked while holding the shared registry lock.
    #[error("Session registry lock poisoned")]
    LockPoisoned,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CoreError {
    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether the caller can fix the situation and retry, e.g. by saving a
    /// profile or picking another session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CoreError::RequiresProfile
                | CoreError::NotFound { .. }
                | CoreError::SessionFull { .. }
                | CoreError::InvalidInput { .. }
        )
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
