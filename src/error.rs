//! Error types for chatrelay
//!
//! `AppError` covers configuration and startup failures. Failures of a
//! completion call never surface as `AppError`: they are masked by the
//! component's error policy (see [`crate::completion`]).

use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read config file {path}: {source}")]
    ConfigFileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration in {path}: {reason}")]
    ConfigValidationFailed { path: String, reason: String },

    #[error("API key not found: environment variable {var} is unset or empty")]
    MissingApiKey { var: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Failed to register metrics: {0}")]
    Metrics(#[from] prometheus::Error),
}

/// Convenience type alias for Results
pub type AppResult<T> = Result<T, AppError>;
