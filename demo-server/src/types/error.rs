//! Universal error handling for the demo routes

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use idverify_sdk::SdkError;
use serde::Serialize;

use crate::media_storage::MediaStorageError;

/// Error envelope returned by every route
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    /// Whether the client should retry the request
    pub allow_retry: bool,
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

/// Application error type that wraps the API error response
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    inner: ApiErrorResponse,
}

impl AppError {
    /// Create a new application error
    #[must_use]
    pub fn new(
        status: StatusCode,
        code: &'static str,
        message: impl Into<String>,
        retry: bool,
    ) -> Self {
        Self {
            status,
            inner: ApiErrorResponse {
                allow_retry: retry,
                error: ErrorBody {
                    code,
                    message: message.into(),
                },
            },
        }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.inner.error.code
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.status.as_u16() {
            400..=499 => tracing::warn!(
                "Client error: {} - {}",
                self.inner.error.code,
                self.inner.error.message
            ),
            500..=599 => tracing::error!(
                "Server error: {} - {}",
                self.inner.error.code,
                self.inner.error.message
            ),
            _ => {}
        }

        (self.status, Json(self.inner)).into_response()
    }
}

/// Map SDK failures onto gateway-style responses
impl From<SdkError> for AppError {
    fn from(err: SdkError) -> Self {
        match &err {
            SdkError::Http { status: 404, message } => {
                Self::new(StatusCode::NOT_FOUND, "not_found", message.clone(), false)
            }
            SdkError::Http { status, message } => Self::new(
                StatusCode::BAD_GATEWAY,
                "upstream_error",
                message.clone(),
                *status >= 500,
            ),
            SdkError::Transport(_) => Self::new(
                StatusCode::SERVICE_UNAVAILABLE,
                "upstream_unavailable",
                "Verification service unavailable",
                true,
            ),
            SdkError::Decryption(_) => Self::new(
                StatusCode::BAD_REQUEST,
                "invalid_token",
                err.to_string(),
                false,
            ),
            SdkError::ShareFailed(_) => {
                Self::new(StatusCode::BAD_REQUEST, "share_failed", err.to_string(), false)
            }
            SdkError::Json(_) | SdkError::Schema(_) | SdkError::Protobuf(_) => {
                tracing::error!("Unexpected response from verification service: {err}");
                Self::new(
                    StatusCode::BAD_GATEWAY,
                    "invalid_upstream_response",
                    err.to_string(),
                    false,
                )
            }
            SdkError::Credential(_)
            | SdkError::InvalidValue(_)
            | SdkError::MissingField(_)
            | SdkError::InvalidUrl(_) => {
                tracing::error!("Request could not be built: {err}");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error",
                    false,
                )
            }
        }
    }
}

impl From<MediaStorageError> for AppError {
    fn from(err: MediaStorageError) -> Self {
        match &err {
            MediaStorageError::InvalidName(name) => Self::new(
                StatusCode::BAD_REQUEST,
                "invalid_input",
                format!("Invalid media id: {name}"),
                false,
            ),
            MediaStorageError::Io(io) => {
                tracing::error!("Failed to persist media: {io}");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error",
                    true,
                )
            }
        }
    }
}
