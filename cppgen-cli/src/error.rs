//! Error types for the CLI.
//!
//! This module defines all error types used throughout the CLI,
//! providing detailed error messages with context for debugging.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error loading configuration.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// Error loading the schema document.
    #[error("Failed to load schema: {0}")]
    Load(#[from] LoadError),

    /// Error rendering an artifact.
    #[error("Failed to render artifact: {0}")]
    Render(#[from] cppgen::RenderError),

    /// Error writing output files.
    #[error("Failed to write output: {0}")]
    Write(#[from] WriteError),

    /// Error during file watching.
    #[error("Watch error: {0}")]
    Watch(#[from] WatchError),

    /// One or more artifacts failed while the rest completed.
    #[error("{failed} artifact(s) failed to generate")]
    Artifacts { failed: usize },

    /// Validation failed (artifacts out of date).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid TOML syntax.
    #[error("Invalid TOML in {path}: {message}")]
    InvalidToml { path: PathBuf, message: String },

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// IO error reading config.
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error loading the schema document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Schema file does not exist.
    #[error("Schema file not found: {path}")]
    NotFound { path: PathBuf },

    /// Malformed JSON in the schema document.
    #[error("Invalid JSON in {path}: {message}")]
    Json { path: PathBuf, message: String },

    /// Structurally invalid schema (duplicate names).
    #[error(transparent)]
    Invalid(#[from] cppgen::SchemaError),

    /// IO error reading the schema document.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error writing output files.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create directory.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("Failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error during file watching.
#[derive(Debug, Error)]
pub enum WatchError {
    /// Failed to initialize watcher.
    #[error("Failed to initialize file watcher: {0}")]
    Init(String),

    /// Error from notify crate.
    #[error("Watch notification error: {0}")]
    Notify(String),
}

impl ConfigError {
    /// Create an invalid TOML error.
    pub fn invalid_toml(path: PathBuf, message: impl Into<String>) -> Self {
        Self::InvalidToml {
            path,
            message: message.into(),
        }
    }

    /// Create an invalid value error.
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl LoadError {
    /// Create a not found error.
    pub fn not_found(path: PathBuf) -> Self {
        Self::NotFound { path }
    }

    /// Create an invalid JSON error.
    pub fn json(path: PathBuf, message: impl Into<String>) -> Self {
        Self::Json {
            path,
            message: message.into(),
        }
    }
}
