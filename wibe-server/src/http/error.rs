use crate::token::TokenError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use wibe_protocol::http::ErrorResponse;

/// Error body for requests missing the room or the participant name.
pub const INVALID_REQUEST_MESSAGE: &str = "room and name are required";
/// Error body for failures while signing a token. Never carries details about the key material.
pub const SIGNING_FAILURE_MESSAGE: &str = "failed to issue token";
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request")]
    InvalidRequest,
    #[error("signing failure: {0}")]
    SigningFailure(#[source] TokenError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(_) | TokenError::ExpiryOutOfRange => {
                AppError::SigningFailure(err)
            }
            other => AppError::Internal(other.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidRequest => {
                tracing::debug!("Rejecting invalid token request");
                (StatusCode::BAD_REQUEST, INVALID_REQUEST_MESSAGE)
            }
            AppError::SigningFailure(err) => {
                tracing::error!(?err, "Failed to sign access token");
                (StatusCode::INTERNAL_SERVER_ERROR, SIGNING_FAILURE_MESSAGE)
            }
            AppError::Internal(err) => {
                tracing::error!(?err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
