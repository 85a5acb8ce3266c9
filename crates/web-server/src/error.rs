use analyzer::error::ContractViolation;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::DbError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Contract(#[from] ContractViolation),
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Database error: {0}")]
    Database(DbError),
}

impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound => AppError::NotFound("Range not found".to_string()),
            DbError::CodecError(codec) => AppError::MalformedInput(codec.to_string()),
            other => AppError::Database(other),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedInput(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::MalformedInput(rejection.body_text())
    }
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Contract(violation) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": violation.to_string(), "kind": violation.kind() }),
            ),
            AppError::MalformedInput(message) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": message, "kind": "MalformedInput" }),
            ),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, json!({ "error": message })),
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "An internal database error occurred" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
