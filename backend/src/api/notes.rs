//! Note API handlers
//!
//! Contains HTTP request handlers for note CRUD operations.

use crate::api::extract::{IdPath, JsonBody};
use crate::api::location;
use crate::api::serializer::NoteResponse;
use crate::error::AppError;
use crate::services::NoteFields;
use crate::state::AppState;
use axum::{
    extract::{OriginalUri, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};

/// GET /api/notes - List all notes
pub async fn list_notes(
    State(state): State<AppState>,
) -> Result<Json<Vec<NoteResponse>>, AppError> {
    let notes = state.notes.list().await?;
    Ok(Json(notes.iter().map(NoteResponse::from).collect()))
}

/// POST /api/notes - Create a new note
pub async fn create_note(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    JsonBody(request): JsonBody<NoteFields>,
) -> Result<impl IntoResponse, AppError> {
    let note = state.notes.create(request).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location(&uri, note.id))],
        Json(NoteResponse::from(&note)),
    ))
}

/// GET /api/notes/:id - Get a specific note
pub async fn get_note(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<NoteResponse>, AppError> {
    let note = state
        .notes
        .get(id)
        .await?
        .ok_or(AppError::NoteNotFound)?;

    Ok(Json(NoteResponse::from(&note)))
}

/// DELETE /api/notes/:id - Delete a note
pub async fn delete_note(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    if !state.notes.delete(id).await? {
        return Err(AppError::NoteNotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/notes/:id - Update any subset of title, content and folder
pub async fn update_note(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<NoteFields>,
) -> Result<StatusCode, AppError> {
    if !state.notes.update(id, request).await? {
        return Err(AppError::NoteNotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
