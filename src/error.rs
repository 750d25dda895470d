//! Error types for the library API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sqlx::error::ErrorKind;
use thiserror::Error;

/// SQLSTATE for foreign_key_violation
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Persistence failures, classified before they reach a handler
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0} does not exist")]
    NotFound(&'static str),

    #[error("foreign key violation: {0}")]
    ForeignKeyViolation(#[source] sqlx::Error),

    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),

    #[error("row decoding failed: {0}")]
    Decode(#[source] sqlx::Error),
}

impl StoreError {
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self, StoreError::ForeignKeyViolation(_))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if violates_foreign_key(&e) {
            StoreError::ForeignKeyViolation(e)
        } else {
            StoreError::Query(e)
        }
    }
}

/// Detect a foreign key violation from driver data, falling back to the message text
fn violates_foreign_key(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if matches!(db_err.kind(), ErrorKind::ForeignKeyViolation) {
        return true;
    }
    if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) {
        return true;
    }
    db_err.message().contains("violates foreign key constraint")
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Handler-level error; each variant fixes the status code and the JSON key of the body
#[derive(Error, Debug)]
pub enum AppError {
    /// 400, reported under `error`
    #[error("Bad request: {0}")]
    BadRequest(&'static str),

    /// 404, reported under `error`
    #[error("Not found: {0}")]
    NotFound(&'static str),

    /// 404, reported under `message`
    #[error("Empty result: {0}")]
    Empty(&'static str),

    /// 400 for rows that still have dependents, reported under `message`
    #[error("Referenced: {0}")]
    Referenced(&'static str),

    /// 500, reported under `error`
    #[error("Internal server error: {0}")]
    Internal(&'static str),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Plain message body, used for successes and a few client-facing failures
#[derive(Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => error_body(StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => error_body(StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => error_body(StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Empty(msg) => {
                (StatusCode::NOT_FOUND, Json(MessageResponse::new(msg))).into_response()
            }
            AppError::Referenced(msg) => {
                (StatusCode::BAD_REQUEST, Json(MessageResponse::new(msg))).into_response()
            }
        }
    }
}

fn error_body(status: StatusCode, msg: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: msg.to_string(),
        }),
    )
        .into_response()
}

/// Result type alias for handler operations
pub type AppResult<T> = Result<T, AppError>;
