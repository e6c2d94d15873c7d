//! Standardized error handling for the Tally API
//!
//! Every non-200 response carries the same `{"error": "..."}` body shape.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tally_shared::ErrorBody;

/// Application error type that can be converted to HTTP responses
#[derive(Debug)]
pub enum AppError {
    /// Caller input is structurally or semantically invalid
    Validation(String),

    /// Input was valid but the aggregation matched no rows
    NotFound(String),

    /// Store-level failure. Detail is logged server-side, never echoed
    Database(sqlx::Error),
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message sent to the caller
    pub fn message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::NotFound(msg) => msg.clone(),
            Self::Database(err) => {
                tracing::error!("Database error: {}", err);
                "Internal server error".to_string()
            }
            Self::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err)
    }
}

/// Result type alias for handlers
pub type ApiResult<T> = Result<T, AppError>;
