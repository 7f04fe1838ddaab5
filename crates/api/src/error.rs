use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ssp_core::error::CoreError;

use crate::response::{Envelope, Message};

/// Message returned for any failure whose detail must not reach the caller.
pub const MSG_SERVER_ERROR: &str = "Server error. Please try again later.";

/// Message returned when stored contacts cannot be listed.
pub const MSG_LIST_ERROR: &str = "Server error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{ "success": false, "message" }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `ssp_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A storage failure reported to the caller with a fixed message.
    #[error("{message}: {source}")]
    Store {
        message: &'static str,
        source: sqlx::Error,
    },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error. The message is logged, never returned.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Core(CoreError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_SERVER_ERROR.to_string())
            }
            AppError::Store { message, source } => {
                tracing::error!(error = %source, "Store error");
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_SERVER_ERROR.to_string())
            }
        };

        (status, axum::Json(Envelope::failure(Message { message }))).into_response()
    }
}
