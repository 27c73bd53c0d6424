//! Error handling module for the Pulse backend.
//!
//! Provides centralized error types with mapping to HTTP status codes and
//! response envelopes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::models::TopicStatus;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const FORBIDDEN: &str = "FORBIDDEN";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const INVALID_TRANSITION: &str = "INVALID_TRANSITION";
    pub const ALREADY_VOTED: &str = "ALREADY_VOTED";
    pub const NO_SUCH_VOTE: &str = "NO_SUCH_VOTE";
    pub const EXPIRED: &str = "EXPIRED";
    pub const CONFLICT: &str = "CONFLICT";
    pub const BULK_VALIDATION: &str = "BULK_VALIDATION";
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Missing caller identity or admin key
    Unauthorized(String),
    /// Caller identity present but not allowed
    Forbidden(String),
    /// Resource not found
    NotFound(String),
    /// Validation error on input
    Validation(String),
    /// Status machine violation
    InvalidTransition(String),
    /// Duplicate vote for the same (topic, user) pair
    AlreadyVoted(String),
    /// Retraction of a vote that does not exist
    NoSuchVote(String),
    /// Voting deadline has passed
    Expired(String),
    /// State conflict, e.g. topic already converted
    Conflict(String),
    /// Bulk operation aborted; no target was mutated
    BulkValidation {
        message: String,
        failed_ids: Vec<String>,
    },
    /// Database error
    Database(String),
}

impl AppError {
    /// Build an `InvalidTransition` for a concrete topic and attempted move.
    pub fn invalid_transition(topic_id: &str, from: TopicStatus, to: TopicStatus) -> Self {
        AppError::InvalidTransition(format!(
            "Topic {} cannot move from {} to {}",
            topic_id, from, to
        ))
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidTransition(_) => StatusCode::CONFLICT,
            AppError::AlreadyVoted(_) => StatusCode::CONFLICT,
            AppError::NoSuchVote(_) => StatusCode::NOT_FOUND,
            AppError::Expired(_) => StatusCode::GONE,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::BulkValidation { .. } => StatusCode::CONFLICT,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Unauthorized(_) => codes::UNAUTHORIZED,
            AppError::Forbidden(_) => codes::FORBIDDEN,
            AppError::NotFound(_) => codes::NOT_FOUND,
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::InvalidTransition(_) => codes::INVALID_TRANSITION,
            AppError::AlreadyVoted(_) => codes::ALREADY_VOTED,
            AppError::NoSuchVote(_) => codes::NO_SUCH_VOTE,
            AppError::Expired(_) => codes::EXPIRED,
            AppError::Conflict(_) => codes::CONFLICT,
            AppError::BulkValidation { .. } => codes::BULK_VALIDATION,
            AppError::Database(_) => codes::DATABASE_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg)
            | AppError::Validation(msg)
            | AppError::InvalidTransition(msg)
            | AppError::AlreadyVoted(msg)
            | AppError::NoSuchVote(msg)
            | AppError::Expired(msg)
            | AppError::Conflict(msg)
            | AppError::Database(msg) => msg.clone(),
            AppError::BulkValidation { message, .. } => message.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AppError::Database(format!("Database error: {}", err))
    }
}

/// Error details in the response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetails,
}

impl ErrorResponse {
    pub fn new(error: &AppError) -> Self {
        let details = match error {
            AppError::BulkValidation { failed_ids, .. } => {
                Some(serde_json::json!({ "failedIds": failed_ids }))
            }
            _ => None,
        };

        Self {
            success: false,
            error: ErrorDetails {
                code: error.error_code().to_string(),
                message: error.message(),
                details,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::new(&self);
        (status, Json(body)).into_response()
    }
}
