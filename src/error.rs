use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use crate::app::MessageResponse;

/// Errors returned by the request handlers.
///
/// Client-side failures map to 400, everything else to 500. Every variant is
/// rendered as `{ "message": "..." }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    /// `context` is the operation-level prefix shown to the caller,
    /// e.g. "Error creating user".
    #[error("{context}: {cause}")]
    Internal {
        context: &'static str,
        cause: anyhow::Error,
    },
}

impl AppError {
    pub fn missing_fields() -> Self {
        AppError::BadRequest("Missing required fields".into())
    }

    pub fn internal(context: &'static str, cause: impl Into<anyhow::Error>) -> Self {
        AppError::Internal {
            context,
            cause: cause.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_)
            | AppError::Conflict(_)
            | AppError::NotFound(_)
            | AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(status = %rejection.status(), "request body rejected");
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let AppError::Internal { context, cause } = &self {
            error!(error = %cause, context, "request failed");
        }
        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_bad_request() {
        assert_eq!(AppError::missing_fields().status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Conflict("User already exists".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("User not found".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::InvalidCredentials.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_error_carries_context_and_cause() {
        let err = AppError::internal("Error creating user", anyhow::anyhow!("pool timed out"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Error creating user: pool timed out");
    }

    #[test]
    fn into_response_uses_status() {
        let res = AppError::InvalidCredentials.into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let res = AppError::internal("Error logging in", anyhow::anyhow!("boom")).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
