//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! Client errors render as `{"error": {"message": ...}}`. Server errors render a
//! generic body and carry their detail in an [`ErrorDetail`] response extension,
//! which the error detail middleware exposes outside production.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message returned for every 500 response in production mode
pub const GENERIC_SERVER_ERROR: &str = "server error";

/// Application-level error types
///
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required field was missing from a create or update payload
    #[error("{0}")]
    Validation(String),

    /// Folder with the given ID was not found
    #[error("Folder does not exist")]
    FolderNotFound,

    /// Note with the given ID was not found
    #[error("Note does not exist")]
    NoteNotFound,

    /// Error surfaced by the relational store
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status code this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::FolderNotFound | AppError::NoteNotFound => StatusCode::NOT_FOUND,
            AppError::Store(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Detailed description of a server error, attached to 500 responses
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

/// Build the `{"error": {"message": ...}}` body shared by every error response
pub fn error_body(message: &str) -> serde_json::Value {
    json!({ "error": { "message": message } })
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            let detail = self.to_string();
            tracing::error!(error = %detail, "Unhandled error while serving request");

            let mut response = (status, Json(error_body(GENERIC_SERVER_ERROR))).into_response();
            response.extensions_mut().insert(ErrorDetail(detail));
            return response;
        }

        (status, Json(error_body(&self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::Validation("Missing title".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::FolderNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NoteNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Store(sqlx::Error::RowNotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_messages() {
        assert_eq!(AppError::FolderNotFound.to_string(), "Folder does not exist");
        assert_eq!(AppError::NoteNotFound.to_string(), "Note does not exist");
    }

    #[test]
    fn test_server_error_hides_detail_in_body() {
        let response = AppError::Internal(anyhow::anyhow!("disk on fire")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let detail = response
            .extensions()
            .get::<ErrorDetail>()
            .expect("500 responses carry their detail");
        assert!(detail.0.contains("disk on fire"));
    }

    #[test]
    fn test_client_error_has_no_detail_extension() {
        let response = AppError::NoteNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.extensions().get::<ErrorDetail>().is_none());
    }
}
