//! Folder service
//!
//! CRUD over the `folders` table with payload validation.

use crate::error::AppError;
use crate::store::{Folder, RowId, Store};
use crate::validation::{Fields, FOLDER_CREATE, FOLDER_PATCH};
use serde::Deserialize;

/// Folder request body, shared by create and update
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FolderFields {
    /// Folder title
    pub title: Option<String>,
}

impl Fields for FolderFields {
    fn is_present(&self, field: &str) -> bool {
        match field {
            "title" => self.title.is_some(),
            _ => false,
        }
    }
}

/// Folder service
#[derive(Clone, Debug)]
pub struct FolderService {
    store: Store,
}

impl FolderService {
    /// Create a service backed by `store`
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// All folders; empty when none exist
    pub async fn list(&self) -> Result<Vec<Folder>, AppError> {
        self.store.list_folders().await
    }

    /// The folder with `id`, or `None`
    pub async fn get(&self, id: RowId) -> Result<Option<Folder>, AppError> {
        self.store.get_folder(id).await
    }

    /// Validate and insert a folder
    ///
    /// # Returns
    /// * `Ok(Folder)` - The persisted folder, including its generated id
    /// * `Err(AppError::Validation)` - `title` is missing
    pub async fn create(&self, fields: FolderFields) -> Result<Folder, AppError> {
        FOLDER_CREATE.check(&fields)?;
        let title = fields.title.unwrap_or_default();
        self.store.insert_folder(&title).await
    }

    /// Delete by id; `false` when no folder matched
    pub async fn delete(&self, id: RowId) -> Result<bool, AppError> {
        Ok(self.store.delete_folder(id).await? > 0)
    }

    /// Validate and apply a partial update; `false` when no folder matched
    pub async fn update(&self, id: RowId, fields: FolderFields) -> Result<bool, AppError> {
        FOLDER_PATCH.check(&fields)?;
        let title = fields.title.unwrap_or_default();
        Ok(self.store.update_folder(id, &title).await? > 0)
    }
}
