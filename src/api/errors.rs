use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::errors::QueryUseCaseError;
use crate::application::ports::StoreError;
use crate::domain::errors::DomainError;

/// API error response
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    field: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            field: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn unprocessable(field: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            field: field.map(str::to_string),
            ..Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.field {
            Some(field) => json!({ "error": self.message, "field": field }),
            None => json!({ "error": self.message }),
        };

        (self.status, Json(body)).into_response()
    }
}

/// Sanitize database error messages to prevent information leakage
pub fn sanitize_db_error(error: &sqlx::Error) -> &'static str {
    match error {
        sqlx::Error::Configuration(_) => "Database configuration error",
        sqlx::Error::Database(_) => "Database operation error",
        sqlx::Error::Io(_) => "Database connection error",
        sqlx::Error::RowNotFound => "Record not found",
        sqlx::Error::ColumnIndexOutOfBounds { .. } | sqlx::Error::ColumnNotFound(_) => {
            "Database column error"
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => "Database decode error",
        sqlx::Error::PoolTimedOut => "Database timeout",
        sqlx::Error::PoolClosed => "Database connection closed",
        sqlx::Error::WorkerCrashed => "Database worker error",
        _ => "Database error",
    }
}

fn sanitize_store_error(error: &StoreError) -> &'static str {
    match error {
        StoreError::Database(e) => sanitize_db_error(e),
        StoreError::Decode(_) => "Stored data could not be decoded",
    }
}

// Convert use case errors to API errors

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let message = match &err {
            DomainError::ValidationError { message, .. } => message.clone(),
            other => other.to_string(),
        };
        ApiError::unprocessable(err.field(), message)
    }
}

impl From<QueryUseCaseError> for ApiError {
    fn from(err: QueryUseCaseError) -> Self {
        match err {
            QueryUseCaseError::NotFound(msg) => ApiError::not_found(msg),
            QueryUseCaseError::Validation(e) => e.into(),
            QueryUseCaseError::Store(e) => {
                tracing::error!(error = %e, "store failure");
                ApiError::internal_error(sanitize_store_error(&e))
            }
        }
    }
}
