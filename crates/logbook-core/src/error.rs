//! Error types for Logbook

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using LogbookError
pub type Result<T> = std::result::Result<T, LogbookError>;

/// Main error type for Logbook operations
#[derive(Debug, Error)]
pub enum LogbookError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Release source errors
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Rendering and output errors
    #[error(transparent)]
    Render(#[from] RenderError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while fetching releases
#[derive(Debug, Error)]
pub enum SourceError {
    /// Repository identifier could not be understood
    #[error("Invalid repository identifier: {0}")]
    InvalidRepository(String),

    /// No authentication token available
    #[error("Missing credentials: set {0} or pass --token")]
    MissingToken(String),

    /// API returned a non-success status
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Rate limited by the hosting API
    #[error("Rate limited by the release API")]
    RateLimited,

    /// Release filter could not be compiled
    #[error("Invalid tag pattern: {0}")]
    InvalidFilter(String),

    /// Release tag not found
    #[error("Release not found: {0}")]
    ReleaseNotFound(String),

    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(String),

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Errors raised while rendering or writing the changelog
#[derive(Debug, Error)]
pub enum RenderError {
    /// Failed to write changelog
    #[error("Failed to write changelog to {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LogbookError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}
