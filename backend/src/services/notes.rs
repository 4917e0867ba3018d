//! Note service
//!
//! CRUD over the `notes` table. Every successful update refreshes
//! `date_modified` to the current time.

use crate::error::AppError;
use crate::store::{NewNote, Note, NotePatch, RowId, Store};
use crate::validation::{Fields, NOTE_CREATE, NOTE_PATCH};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Note request body, shared by create and update
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteFields {
    /// Note title
    pub title: Option<String>,
    /// Note body
    pub content: Option<String>,
    /// Owning folder
    pub folder_id: Option<RowId>,
    /// Explicit timestamp for a new note; ignored on update
    pub date_modified: Option<DateTime<Utc>>,
}

impl Fields for NoteFields {
    fn is_present(&self, field: &str) -> bool {
        match field {
            "title" => self.title.is_some(),
            "content" => self.content.is_some(),
            "folder_id" => self.folder_id.is_some(),
            "date_modified" => self.date_modified.is_some(),
            _ => false,
        }
    }
}

/// Note service
#[derive(Clone, Debug)]
pub struct NoteService {
    store: Store,
}

impl NoteService {
    /// Create a service backed by `store`
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// All notes; empty when none exist
    pub async fn list(&self) -> Result<Vec<Note>, AppError> {
        self.store.list_notes().await
    }

    /// The note with `id`, or `None`
    pub async fn get(&self, id: RowId) -> Result<Option<Note>, AppError> {
        self.store.get_note(id).await
    }

    /// Validate and insert a note
    ///
    /// `date_modified` defaults to now. The folder reference is checked by the
    /// store, so an unknown `folder_id` surfaces as a store error.
    ///
    /// # Returns
    /// * `Ok(Note)` - The persisted note, including its generated id
    /// * `Err(AppError::Validation)` - Names the first missing of title, content, folder_id
    pub async fn create(&self, fields: NoteFields) -> Result<Note, AppError> {
        NOTE_CREATE.check(&fields)?;

        let new_note = NewNote {
            title: fields.title.unwrap_or_default(),
            content: fields.content.unwrap_or_default(),
            folder_id: fields.folder_id.unwrap_or_default(),
            date_modified: fields.date_modified.unwrap_or_else(Utc::now),
        };
        self.store.insert_note(&new_note).await
    }

    /// Delete by id; `false` when no note matched
    pub async fn delete(&self, id: RowId) -> Result<bool, AppError> {
        Ok(self.store.delete_note(id).await? > 0)
    }

    /// Validate and apply a partial update; `false` when no note matched
    pub async fn update(&self, id: RowId, fields: NoteFields) -> Result<bool, AppError> {
        NOTE_PATCH.check(&fields)?;

        let patch = NotePatch {
            title: fields.title,
            content: fields.content,
            folder_id: fields.folder_id,
            date_modified: Utc::now(),
        };
        Ok(self.store.update_note(id, &patch).await? > 0)
    }
}
