use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl From<ServiceError> for AppErrorHttp {
    fn from(err: ServiceError) -> Self {
        AppErrorHttp(err)
    }
}

const INTERNAL: &str = "Internal server error";

impl AppErrorHttp {
    /// Status, stable error code and client-facing message.
    pub fn parts(&self) -> (StatusCode, &'static str, String) {
        match &self.0 {
            ServiceError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                format!("Validation failed: {}", errors.join(", ")),
            ),
            ServiceError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),

            ServiceError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                "Invalid credentials".to_string(),
            ),
            ServiceError::TokenExpired => (
                StatusCode::UNAUTHORIZED,
                "TOKEN_EXPIRED",
                "Token has expired".to_string(),
            ),
            ServiceError::InvalidToken(msg) => {
                (StatusCode::UNAUTHORIZED, "INVALID_TOKEN", msg.clone())
            }
            ServiceError::Jwt(_) => (
                StatusCode::UNAUTHORIZED,
                "INVALID_TOKEN",
                "Invalid token".to_string(),
            ),
            ServiceError::Unauthenticated(msg) => {
                (StatusCode::UNAUTHORIZED, "AUTH_REQUIRED", msg.clone())
            }
            ServiceError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
            ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", "Not found".to_string())
                }
                RepositoryError::AlreadyExists(msg) | RepositoryError::Conflict(msg) => {
                    (StatusCode::CONFLICT, "CONFLICT", msg.clone())
                }
                RepositoryError::ForeignKey(msg) => (
                    StatusCode::BAD_REQUEST,
                    "BAD_REQUEST",
                    format!("Foreign key violation: {msg}"),
                ),
                RepositoryError::Sqlx(_) | RepositoryError::Custom(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL.to_string(),
                ),
            },

            ServiceError::Bcrypt(_) | ServiceError::InternalServerError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                INTERNAL.to_string(),
            ),
        }
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, code, msg) = self.parts();

        if status.is_server_error() {
            error!("❌ Request failed: {:?}", self.0);
        }

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: msg,
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}
