//! Folder API handlers
//!
//! Contains HTTP request handlers for folder CRUD operations.

use crate::api::extract::{IdPath, JsonBody};
use crate::api::location;
use crate::api::serializer::FolderResponse;
use crate::error::AppError;
use crate::services::FolderFields;
use crate::state::AppState;
use axum::{
    extract::{OriginalUri, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};

/// GET /api/folders - List all folders
pub async fn list_folders(
    State(state): State<AppState>,
) -> Result<Json<Vec<FolderResponse>>, AppError> {
    let folders = state.folders.list().await?;
    Ok(Json(folders.iter().map(FolderResponse::from).collect()))
}

/// POST /api/folders - Create a new folder
pub async fn create_folder(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    JsonBody(request): JsonBody<FolderFields>,
) -> Result<impl IntoResponse, AppError> {
    let folder = state.folders.create(request).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location(&uri, folder.id))],
        Json(FolderResponse::from(&folder)),
    ))
}

/// GET /api/folders/:id - Get a specific folder
pub async fn get_folder(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<FolderResponse>, AppError> {
    let folder = state
        .folders
        .get(id)
        .await?
        .ok_or(AppError::FolderNotFound)?;

    Ok(Json(FolderResponse::from(&folder)))
}

/// DELETE /api/folders/:id - Delete a folder and, through the store, its notes
pub async fn delete_folder(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    if !state.folders.delete(id).await? {
        return Err(AppError::FolderNotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/folders/:id - Rename a folder
pub async fn update_folder(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<FolderFields>,
) -> Result<StatusCode, AppError> {
    if !state.folders.update(id, request).await? {
        return Err(AppError::FolderNotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
