//! Maps domain `AppError` to HTTP responses.
//!
//! This is the single responder: every handler returns `Result<_, ApiError>`
//! and all domain errors funnel through here. Stack traces and error
//! sources never reach the client; server-side failures are logged and
//! reported with a generic message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use devhub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    /// Always `false`.
    pub success: bool,
    /// HTTP status code, repeated in the body.
    pub status_code: u16,
    /// Human-readable message.
    pub message: String,
}

/// Newtype carrying an [`AppError`] across the Axum boundary.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// HTTP status for each error kind. Note the asymmetry: a missing
/// credential is 401 while an invalid or expired one is 403.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Authentication | ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization
        | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.0.kind);

        let message = if status.is_server_error() {
            tracing::error!(error = %self.0, "Internal server error");
            "Internal Server Error".to_string()
        } else {
            self.0.message
        };

        let body = ApiErrorBody {
            success: false,
            status_code: status.as_u16(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ErrorKind::Validation), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(ErrorKind::Unauthenticated),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_for(ErrorKind::Authentication),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(status_for(ErrorKind::Forbidden), StatusCode::FORBIDDEN);
        assert_eq!(status_for(ErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorKind::Conflict), StatusCode::CONFLICT);
        assert_eq!(
            status_for(ErrorKind::Database),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_body_wire_shape() {
        let body = ApiErrorBody {
            success: false,
            status_code: 403,
            message: "Only admins can delete posts".to_string(),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["statusCode"], 403);
        assert_eq!(json["message"], "Only admins can delete posts");
    }
}
