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

    /// The API returned an error response.
    #[error("server error: {status} - {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// Failed to deserialize response.
    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Returns true when the API refused the credentials.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Server { status: 401 | 403, .. })
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
