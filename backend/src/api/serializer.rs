//! Response serialization
//!
//! Client-safe representations of stored rows. Free-text fields are HTML
//! escaped on the way out; identifiers and timestamps are copied verbatim.

use crate::store::{Folder, Note, RowId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Escape markup in user-supplied text
pub fn escape_text(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Folder response type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderResponse {
    /// Folder identifier
    pub id: RowId,
    /// Escaped title
    pub title: String,
}

impl From<&Folder> for FolderResponse {
    fn from(folder: &Folder) -> Self {
        Self {
            id: folder.id,
            title: escape_text(&folder.title),
        }
    }
}

/// Note response type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteResponse {
    /// Note identifier
    pub id: RowId,
    /// Escaped title
    pub title: String,
    /// Escaped body
    pub content: String,
    /// Last modification time
    pub date_modified: DateTime<Utc>,
    /// Owning folder, if any
    pub folder_id: Option<RowId>,
}

impl From<&Note> for NoteResponse {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            title: escape_text(&note.title),
            content: escape_text(&note.content),
            date_modified: note.date_modified,
            folder_id: note.folder_id,
        }
    }
}
