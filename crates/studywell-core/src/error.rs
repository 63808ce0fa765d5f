//! Core error types for studywell-core.
//!
//! Validation failures are deliberately *not* errors -- they are ordinary
//! values (see [`crate::validator::Validation`]) because a rejected answer is
//! part of the wizard's normal control flow. The types here cover the
//! fallible edges of the crate: the HTTP backend and the config file.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studywell-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Backend API errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors from the backend API clients.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The async runtime backing a client could not be created
    #[error("Failed to start client runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// The configured base URL does not parse
    #[error("Invalid base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    /// The request never produced a response
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body could not be decoded
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
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

    /// Dotted-path key does not exist
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Value cannot be coerced to the key's type
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
