//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::store::StoreError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Pokemon not found: {0}")]
    PokemonNotFound(i32),

    #[error("Review not found: {0}")]
    ReviewNotFound(i32),

    #[error("Review {review_id} does not belong to pokemon {pokemon_id}")]
    ReviewNotOwned { review_id: i32, pokemon_id: i32 },

    // Server errors (5xx)
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, details) = match &self {
            // 400 Bad Request
            AppError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", Some(msg.clone()))
            }
            AppError::ReviewNotOwned {
                review_id,
                pokemon_id,
            } => (
                StatusCode::BAD_REQUEST,
                "review_not_owned",
                Some(format!("review {} vs pokemon {}", review_id, pokemon_id)),
            ),

            // 404 Not Found
            AppError::PokemonNotFound(id) => {
                (StatusCode::NOT_FOUND, "pokemon_not_found", Some(id.to_string()))
            }
            AppError::ReviewNotFound(id) => {
                (StatusCode::NOT_FOUND, "review_not_found", Some(id.to_string()))
            }

            // 500 Internal Server Error
            AppError::Store(e) => {
                tracing::error!("Storage error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "storage_error", None)
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
            error_code: error_code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}
