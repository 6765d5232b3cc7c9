//! # API Errors
//!
//! Error types for API operations.

use thiserror::Error;

/// Errors that can occur during API operations.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network or HTTP error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Server returned a non-2xx response.
    #[error("server error: {status} - {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Error message from the server.
        message: String,
    },

    /// Server answered 2xx but reported `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// Failed to deserialize response.
    #[error("invalid response format: {0}")]
    InvalidResponse(String),

    /// A protected endpoint was called without a stored session token.
    #[error("not authenticated")]
    Unauthenticated,

    /// Request body failed client-side validation.
    #[error("invalid input: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl ApiError {
    /// Text suitable for an inline error message or toast.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, status } if message.is_empty() => {
                format!("Request failed with status {status}")
            }
            ApiError::Server { message, .. } | ApiError::Rejected(message) => message.clone(),
            ApiError::Unauthenticated => "You are not logged in. Please log in and try again.".to_string(),
            other => other.to_string(),
        }
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
