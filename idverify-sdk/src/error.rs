//! Error types for the identity-verification SDK

use thiserror::Error;

/// Result type for SDK operations
pub type SdkResult<T> = Result<T, SdkError>;

/// Errors that can occur while building, sending or parsing API requests
#[derive(Error, Debug)]
pub enum SdkError {
    /// Connection, DNS or TLS failure before a status was received
    #[error("{0}")]
    Transport(#[from] reqwest_middleware::Error),

    /// The API answered with a non-2xx status
    #[error("{message}")]
    Http {
        /// Numeric HTTP status
        status: u16,
        /// Upstream status text, e.g. `Bad Request`
        message: String,
    },

    /// A non-buffered response body was not valid JSON
    #[error("Failed to parse response body: {0}")]
    Json(#[from] serde_json::Error),

    /// A response field is missing or has the wrong type
    #[error("{0}")]
    Schema(String),

    /// The private key could not be loaded
    #[error("Invalid key material: {0}")]
    Credential(String),

    /// A token, receipt key or profile could not be decrypted
    #[error("{0}")]
    Decryption(String),

    /// Decrypted profile content was not a valid attribute list
    #[error("Failed to decode profile content: {0}")]
    Protobuf(#[from] prost::DecodeError),

    /// The user did not complete the share
    #[error("The share was not successful: {0}")]
    ShareFailed(String),

    /// A builder was given a value it cannot encode
    #[error("{0}")]
    InvalidValue(String),

    /// A builder was asked to build without a required value
    #[error("{0} must be provided")]
    MissingField(&'static str),

    /// The request URL could not be assembled
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl SdkError {
    /// HTTP status of the failed call, if the API answered at all
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SdkError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(reqwest_middleware::Error::Reqwest(error))
    }
}
