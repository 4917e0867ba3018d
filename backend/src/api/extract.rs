//! Request extractors
//!
//! Wrap axum's body and path extraction so every rejection is reported as an
//! `AppError` with the usual JSON error body.

use crate::error::AppError;
use crate::store::RowId;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// JSON request body
///
/// An empty body reads as `{}`, so it reaches field validation and gets the
/// resource's own message. The content type is not checked.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(request, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;

        parse_body(&bytes).map(JsonBody)
    }
}

/// Deserialize a request body, treating blank input as an empty object
pub fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let bytes: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        bytes
    };

    serde_json::from_slice(bytes)
        .map_err(|e| AppError::Validation(format!("Invalid request body: {}", e)))
}

/// Numeric `:id` path segment
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub RowId);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<RowId>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::Validation(format!("Invalid id: {}", e.body_text())))?;

        Ok(IdPath(id))
    }
}
