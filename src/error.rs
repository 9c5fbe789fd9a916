//! Error types for JiffyBox API operations.

use thiserror::Error;
use url::Url;

/// Errors that can occur during JiffyBox API operations.
#[derive(Debug, Error)]
pub enum JiffyError {
    /// Configuration is missing or incomplete.
    #[error("JiffyBox configuration required: {0}")]
    ConfigMissing(String),

    /// Request parameters failed local validation. No request was sent.
    #[error("Invalid parameters: {0}")]
    Validation(String),

    /// The API answered with a status other than 200.
    #[error(
        "Returned status code was {status} (expected 200) on {path}{}",
        describe_message(.message)
    )]
    ApiError {
        status: u16,
        /// The full request URL. It contains the API token.
        url: Url,
        /// The resource path relative to the versioned base URL.
        path: String,
        /// Error text reported by the provider, if the body carried any.
        message: Option<String>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

impl JiffyError {
    /// HTTP status code of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error was raised locally, before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

fn describe_message(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

/// Result type alias for JiffyBox operations.
pub type Result<T> = core::result::Result<T, JiffyError>;
