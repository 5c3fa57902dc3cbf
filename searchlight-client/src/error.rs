//! Client-side error types

use thiserror::Error;

/// Errors that can occur while building or dispatching a request
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Missing required option: {0}")]
    MissingRequiredOption(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request failed with status {status}: {reason}")]
    Api { status: u16, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl ClientError {
    /// Get the error type as a string for metrics labeling
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::MissingRequiredOption(_) => "missing_required_option",
            Self::Http(_) => "http",
            Self::Api { .. } => "api",
            Self::Json(_) => "json",
            Self::Config(_) => "config",
            Self::Transport(_) => "transport",
        }
    }
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
