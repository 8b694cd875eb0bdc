use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{error, warn};
use uuid::Uuid;

use streakcard_domain::shared::{DomainError, ErrorCode};

/// JSON error body returned by every endpoint
///
/// `error` carries the human-readable message; `code` the numeric error code.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,

    pub error: String,

    pub code: u16,

    pub request_id: String,
}

impl ApiError {
    pub fn new(status: StatusCode, error_code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status,
            error: message.into(),
            code: error_code.code(),
            request_id: Uuid::new_v4().to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorCode::ValidationError, message)
    }

    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorCode::MissingRequiredField, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ErrorCode::UnsupportedPlatform, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::InfrastructureError,
            message,
        )
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let status = match &err {
            DomainError::Validation(_) | DomainError::MissingField(_) => StatusCode::BAD_REQUEST,
            DomainError::UnsupportedPlatform(_) => StatusCode::NOT_FOUND,
            DomainError::UpstreamUnavailable(_) | DomainError::MalformedCalendar(_) => {
                StatusCode::BAD_GATEWAY
            }
            DomainError::Serialization(_) | DomainError::Infrastructure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self::new(status, err.code(), err.message())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.error)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(request_id = %self.request_id, code = self.code, status = self.status.as_u16(), "{}", self.error);
        } else {
            warn!(request_id = %self.request_id, code = self.code, status = self.status.as_u16(), "{}", self.error);
        }
        (self.status, Json(self)).into_response()
    }
}
