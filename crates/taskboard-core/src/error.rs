//! Error types for the core crate.

use thiserror::Error;

/// Errors raised by persistent key/value storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored entries could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while decoding an access token locally.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The token is not made of three dot-separated parts.
    #[error("malformed token")]
    Malformed,

    /// The payload segment is not valid base64url.
    #[error("invalid token encoding: {0}")]
    Encoding(String),

    /// The payload is not a JSON claims object.
    #[error("invalid token claims: {0}")]
    Claims(String),

    /// The claims carry no `exp` entry.
    #[error("token has no expiry claim")]
    MissingExpiry,
}

/// Reasons a persisted token was not accepted by the backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The backend refused the token or could not be reached.
    #[error("token rejected: {0}")]
    Rejected(String),

    /// No answer arrived before the validation timeout.
    #[error("token validation timed out")]
    TimedOut,
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
