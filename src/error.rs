use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::auth::jwt::TokenError;

/// Everything a handler can fail with. Each variant maps to one HTTP
/// status and a `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(&'static str),

    #[error("User already exists")]
    AlreadyExists,

    /// Unknown email and wrong password produce this same variant so a
    /// login response never reveals whether the account exists.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Old password incorrect")]
    IncorrectOldPassword,

    #[error("No token provided")]
    MissingToken,

    /// The inner variant is kept for logging; the response body is the
    /// same for all token failures.
    #[error("Invalid token")]
    InvalidToken(#[from] TokenError),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidInput(_) | ApiError::AlreadyExists | ApiError::IncorrectOldPassword => {
                StatusCode::BAD_REQUEST
            }
            ApiError::InvalidCredentials | ApiError::MissingToken | ApiError::InvalidToken(_) => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match &self {
            ApiError::InvalidToken(reason) => warn!(%reason, "token rejected"),
            ApiError::Internal(e) => error!(error = %e, "internal error"),
            _ => {}
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
