//! Custom error types for the calculator service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::evaluator::EvaluateError;

/// Custom error type for the calculator service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing, malformed, or expired token on a protected route
    #[error("Unauthorized")]
    Unauthorized,

    /// Login failure; one generic message regardless of which field was wrong
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Evaluation failure (unsupported tag or overflow)
    #[error(transparent)]
    Evaluate(#[from] EvaluateError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] common::error::DatabaseError),

    /// Internal server error
    #[error("Internal server error")]
    InternalServerError,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Login failures use the `detail` body the clients expect; every
        // other error uses the `error` body.
        let (status, body) = match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({"error": "Unauthorized"}),
            ),
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                json!({"detail": "Invalid credentials"}),
            ),
            ApiError::Evaluate(e) => (StatusCode::BAD_REQUEST, json!({"error": e.to_string()})),
            ApiError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": "Database error"}),
            ),
            ApiError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": "Internal server error"}),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
