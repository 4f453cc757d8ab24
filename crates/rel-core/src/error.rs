//! Error types for rel-core

use thiserror::Error;

/// Core error type for release metadata lookups
#[derive(Error, Debug)]
pub enum CoreError {
    /// R001: Configuration file not found
    #[error("[R001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// R002: Invalid configuration value
    #[error("[R002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// R003: Identifier rejected before it reaches the metadata store
    #[error("[R003] Invalid {kind} '{value}': {reason}")]
    InvalidIdentifier {
        kind: &'static str,
        value: String,
        reason: String,
    },

    /// R004: Unknown release file category
    #[error("[R004] Unknown release file category '{0}'")]
    UnknownFileCategory(String),

    /// R005: IO error with file path context
    #[error("[R005] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// R006: YAML parse error
    #[error("[R006] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
