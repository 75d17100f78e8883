//! Typed API error for HTTP handlers.
//!
//! Converts service errors into JSON responses with matching status codes.
//! Handlers return `Result<Json<T>, ApiError>`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use frn_console_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
///
/// `Internal` variant logs the real error server-side and returns
/// a static message to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: invalid input from caller.
    BadRequest(String),
    /// 404 Not Found: unknown session or endpoint.
    NotFound(String),
    /// 409 Conflict: a simulated request is already pending.
    Conflict(String),
    /// 500 Internal Server Error. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        if err.is_not_found() {
            return Self::NotFound(err.to_string());
        }
        if err.is_conflict() {
            return Self::Conflict(err.to_string());
        }
        match err {
            ServiceError::NoEndpointSelected | ServiceError::InvalidInput(_) => {
                Self::BadRequest(err.to_string())
            },
            _ => Self::Internal(err.into()),
        }
    }
}
