//! Error types for AppForge

use std::time::Duration;
use thiserror::Error;

/// Result type alias for AppForge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Prompt(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}

/// Errors from the structure generation service
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Run `appforge init` to set up your Groq API key.")]
    Unauthorized,

    #[error("Access denied. Your API key cannot use this model.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded. Retry after {0:?}")]
    RateLimit(Duration),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Description cannot be empty")]
    EmptyDescription,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `appforge init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("API key not configured. Run `appforge init` or set GROQ_API_KEY.")]
    MissingApiKey,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Saved-application store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("App not found: {0}. Run `appforge app list` to see saved apps.")]
    NotFound(String),

    #[error("App already exists: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("App store schema v{0} is not supported (expected v{1}). Upgrade appforge or use --store.")]
    UnsupportedSchema(i32, i32),

    #[error("Stored app {0} is corrupt: {1}")]
    Corrupt(String, String),

    #[error("Store I/O error: {0}")]
    Io(String),

    #[error("Could not determine data directory")]
    NoHome,
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}
