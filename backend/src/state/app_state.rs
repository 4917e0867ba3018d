// Router state
// Composed once at startup from the store handle; cloned into each handler

use crate::services::{FolderService, NoteService};
use crate::store::Store;

/// State shared by all HTTP handlers
///
/// Holds no mutable data: each field wraps the pooled store handle.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Folder operations
    pub folders: FolderService,
    /// Note operations
    pub notes: NoteService,
}

impl AppState {
    /// Build the services around a single store handle
    pub fn new(store: Store) -> Self {
        Self {
            folders: FolderService::new(store.clone()),
            notes: NoteService::new(store),
        }
    }
}
