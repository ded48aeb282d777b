//! Error types for the networking module.

use thiserror::Error;

/// Network-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// HTTP request failed.
    #[error("HTTP request error: {0}")]
    Request(String),
    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// Request timed out.
    #[error("Request timed out")]
    Timeout,
    /// Connection refused or failed.
    #[error("Connection error: {0}")]
    Connection(String),
    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(String),
    /// The body parsed but does not describe a usable result.
    #[error("Invalid response body: {0}")]
    InvalidBody(String),
    /// HTTP error status (4xx or 5xx).
    #[error("HTTP {status}{}", message_suffix(.message))]
    HttpStatus {
        /// The HTTP status code.
        status: u16,
        /// Error message from the response body, if any.
        message: Option<String>,
    },
    /// Redirect limit exceeded.
    #[error("Too many redirects")]
    TooManyRedirects,
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl NetworkError {
    /// The message a user should see for this error.
    ///
    /// Server-provided messages are passed through; everything else uses the
    /// error's display text.
    pub fn user_message(&self) -> String {
        match self {
            Self::HttpStatus {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else if err.is_redirect() {
            Self::TooManyRedirects
        } else {
            Self::Request(err.to_string())
        }
    }
}

impl From<url::ParseError> for NetworkError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for NetworkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// A specialized Result type for network operations.
pub type Result<T> = std::result::Result<T, NetworkError>;
