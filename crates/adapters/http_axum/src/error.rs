//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hamock_domain::error::MockError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

/// Maps [`MockError`] and extractor rejections to an HTTP response.
///
/// | Error | Status | `code` |
/// |-------|--------|--------|
/// | validation | 400 | `invalid_request` |
/// | not found | 404 | `not_found` |
/// | anything else | 500 | `internal_error` |
#[derive(Debug)]
pub enum ApiError {
    /// Failure reported by the application layer.
    Mock(MockError),
    /// The request could not be extracted (body too large, undecodable path, …).
    Rejected(String),
}

impl From<MockError> for ApiError {
    fn from(err: MockError) -> Self {
        Self::Mock(err)
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        Self::Rejected(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Rejected(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::Mock(MockError::Validation(err)) => {
                tracing::debug!(error = %err, "rejected request");
                (StatusCode::BAD_REQUEST, "invalid_request", err.to_string())
            }
            Self::Mock(MockError::NotFound(err)) => {
                (StatusCode::NOT_FOUND, "not_found", err.to_string())
            }
            Self::Mock(MockError::Payload(err)) => {
                tracing::error!(error = %err, "error in service call");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    err.to_string(),
                )
            }
            Self::Rejected(message) => {
                tracing::error!(error = %message, "failed to extract request");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
            }
        };

        (status, Json(ErrorBody { code, message })).into_response()
    }
}
