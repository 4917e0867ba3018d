//! Store data models
//!
//! Rows of the `folders` and `notes` tables plus the write-side shapes the
//! store accepts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Unique identifier assigned by the store
pub type RowId = i64;

/// A named container that notes may belong to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Store-generated identifier
    pub id: RowId,
    /// Folder title, stored verbatim
    pub title: String,
}

/// A titled text entry, optionally filed under a folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Note {
    /// Store-generated identifier
    pub id: RowId,
    /// Note title, stored verbatim
    pub title: String,
    /// Note body, stored verbatim
    pub content: String,
    /// When the note was created or last updated
    pub date_modified: DateTime<Utc>,
    /// Owning folder, if any
    pub folder_id: Option<RowId>,
}

/// Values for a note insert
#[derive(Debug, Clone)]
pub struct NewNote {
    /// Note title
    pub title: String,
    /// Note body
    pub content: String,
    /// Owning folder (must exist, enforced by the foreign key)
    pub folder_id: RowId,
    /// Modification timestamp to record
    pub date_modified: DateTime<Utc>,
}

/// Partial note update; `None` fields are left untouched
#[derive(Debug, Clone)]
pub struct NotePatch {
    /// Replacement title
    pub title: Option<String>,
    /// Replacement body
    pub content: Option<String>,
    /// Replacement folder
    pub folder_id: Option<RowId>,
    /// Always written, so an update refreshes the timestamp
    pub date_modified: DateTime<Utc>,
}
