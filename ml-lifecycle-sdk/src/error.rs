//! SDK error types
//!
//! Errors raised by the service client. Status-code interpretation is left
//! to the caller: a non-2xx response is data, not an error, until the caller
//! decides otherwise.

use thiserror::Error;

/// The main error type for the SDK
#[derive(Error, Debug)]
pub enum SdkError {
    /// Request failed at the network layer
    #[error("Transport error: {0}")]
    Transport(reqwest::Error),

    /// Request exceeded the configured timeout
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Body could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Response carried something other than what the caller asked for
    #[error("Unexpected payload: {0}")]
    UnexpectedPayload(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// URL parsing error
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Local file could not be read (dataset upload)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for SDK operations
pub type SdkResult<T> = Result<T, SdkError>;
