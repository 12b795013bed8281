//! Error types for changelogen

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ChangelogenError
pub type Result<T> = std::result::Result<T, ChangelogenError>;

/// Main error type for changelogen operations
#[derive(Debug, Error)]
pub enum ChangelogenError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Commit input errors
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// Unsupported file extension
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(PathBuf),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Commit input errors
#[derive(Debug, Error)]
pub enum InputError {
    /// Commit file not found
    #[error("Commit file not found at {0}")]
    NotFound(PathBuf),

    /// Unsupported file extension
    #[error("Unsupported commit file format: {0}")]
    UnsupportedFormat(PathBuf),

    /// JSON parsing error
    #[error("Failed to parse commits as JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("Failed to parse commits as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error
    #[error("IO error reading commits: {0}")]
    Io(#[from] std::io::Error),
}
