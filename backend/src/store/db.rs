//! Store database operations
//!
//! Handles all database interactions for folders and notes. Every operation
//! issues a single statement against the pool; nothing is cached between calls.

use crate::error::AppError;
use crate::store::models::{Folder, NewNote, Note, NotePatch, RowId};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

const MIGRATION_SQL: &str = include_str!("../../migrations/001_create_noteful.sql");

/// Handle to the relational store
///
/// Cloning is cheap: clones share the same connection pool.
#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open the connection pool and apply the schema
    ///
    /// # Arguments
    /// * `database_url` - `sqlite:` connection string or plain path to the database file
    /// * `max_connections` - Upper bound on pooled connections
    ///
    /// # Returns
    /// * `Ok(Store)` if successful
    /// * `Err(AppError)` if connection or migration failed
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let connection_string = if database_url.starts_with("sqlite:") {
            database_url.to_string()
        } else {
            format!("sqlite:{}", database_url)
        };

        let file = database_file(&connection_string);

        // Ensure parent directory exists for file-backed databases
        if let Some(parent) = file.and_then(|p| p.parent()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Internal(anyhow::anyhow!("Failed to create db directory: {}", e))
            })?;
        }

        let options = SqliteConnectOptions::from_str(&connection_string)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid database url: {}", e)))?
            .create_if_missing(true)
            .foreign_keys(true);

        // Each connection to an in-memory database sees its own empty database,
        // so the pool holds exactly one and never recycles it.
        let pool_options = if file.is_none() {
            debug!(
                "In-memory database, ignoring max_connections={}",
                max_connections
            );
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| {
                AppError::Internal(anyhow::anyhow!("Failed to connect to database: {}", e))
            })?;

        info!("Connected to SQLite database at: {}", connection_string);

        let store = Self { pool };
        store.run_migrations().await?;

        Ok(store)
    }

    /// Run database migrations
    async fn run_migrations(&self) -> Result<(), AppError> {
        info!("Running database migrations...");

        for statement in migration_statements(MIGRATION_SQL) {
            sqlx::query(&statement)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::Internal(anyhow::anyhow!(
                        "Migration failed: {} - Statement: {}",
                        e,
                        statement.chars().take(100).collect::<String>()
                    ))
                })?;
        }

        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Close every pooled connection. Pending operations finish first.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connections closed");
    }

    /// Get all folders, in insertion order
    pub async fn list_folders(&self) -> Result<Vec<Folder>, AppError> {
        let folders = sqlx::query_as::<_, Folder>("SELECT id, title FROM folders ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(folders)
    }

    /// Get a folder by ID
    pub async fn get_folder(&self, id: RowId) -> Result<Option<Folder>, AppError> {
        let folder = sqlx::query_as::<_, Folder>("SELECT id, title FROM folders WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(folder)
    }

    /// Insert a folder and return the persisted row
    pub async fn insert_folder(&self, title: &str) -> Result<Folder, AppError> {
        let folder = sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (title) VALUES (?) RETURNING id, title",
        )
        .bind(title)
        .fetch_one(&self.pool)
        .await?;

        debug!("Created folder: {}", folder.id);
        Ok(folder)
    }

    /// Rename a folder, returning the number of rows affected
    pub async fn update_folder(&self, id: RowId, title: &str) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE folders SET title = ? WHERE id = ?")
            .bind(title)
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!("Updated folder {} ({} rows)", id, result.rows_affected());
        Ok(result.rows_affected())
    }

    /// Delete a folder (cascades to its notes), returning the number of rows affected
    pub async fn delete_folder(&self, id: RowId) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM folders WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!("Deleted folder {} ({} rows)", id, result.rows_affected());
        Ok(result.rows_affected())
    }

    /// Get all notes, in insertion order
    pub async fn list_notes(&self) -> Result<Vec<Note>, AppError> {
        let notes = sqlx::query_as::<_, Note>(
            "SELECT id, title, content, date_modified, folder_id FROM notes ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }

    /// Get a note by ID
    pub async fn get_note(&self, id: RowId) -> Result<Option<Note>, AppError> {
        let note = sqlx::query_as::<_, Note>(
            "SELECT id, title, content, date_modified, folder_id FROM notes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(note)
    }

    /// Insert a note and return the persisted row
    ///
    /// A `folder_id` without a matching folder is rejected by the foreign key.
    pub async fn insert_note(&self, new_note: &NewNote) -> Result<Note, AppError> {
        let note = sqlx::query_as::<_, Note>(
            "INSERT INTO notes (title, content, date_modified, folder_id) VALUES (?, ?, ?, ?) \
             RETURNING id, title, content, date_modified, folder_id",
        )
        .bind(&new_note.title)
        .bind(&new_note.content)
        .bind(new_note.date_modified)
        .bind(new_note.folder_id)
        .fetch_one(&self.pool)
        .await?;

        debug!("Created note {} in folder {:?}", note.id, note.folder_id);
        Ok(note)
    }

    /// Apply a partial update to a note, returning the number of rows affected
    pub async fn update_note(&self, id: RowId, patch: &NotePatch) -> Result<u64, AppError> {
        let mut query = QueryBuilder::<Sqlite>::new("UPDATE notes SET ");
        let mut assignments = query.separated(", ");

        if let Some(title) = &patch.title {
            assignments.push("title = ");
            assignments.push_bind_unseparated(title.clone());
        }
        if let Some(content) = &patch.content {
            assignments.push("content = ");
            assignments.push_bind_unseparated(content.clone());
        }
        if let Some(folder_id) = patch.folder_id {
            assignments.push("folder_id = ");
            assignments.push_bind_unseparated(folder_id);
        }
        assignments.push("date_modified = ");
        assignments.push_bind_unseparated(patch.date_modified);

        query.push(" WHERE id = ");
        query.push_bind(id);

        let result = query.build().execute(&self.pool).await?;

        debug!("Updated note {} ({} rows)", id, result.rows_affected());
        Ok(result.rows_affected())
    }

    /// Delete a note, returning the number of rows affected
    pub async fn delete_note(&self, id: RowId) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!("Deleted note {} ({} rows)", id, result.rows_affected());
        Ok(result.rows_affected())
    }
}

/// File path behind a `sqlite:` connection string, if it names one
fn database_file(connection_string: &str) -> Option<&Path> {
    let rest = connection_string
        .strip_prefix("sqlite://")
        .or_else(|| connection_string.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();

    if path.is_empty() || path == ":memory:" {
        None
    } else {
        Some(Path::new(path))
    }
}

/// Split a migration script into executable statements
///
/// Comment-only lines and trailing `--` comments are dropped.
fn migration_statements(sql: &str) -> Vec<String> {
    let mut cleaned_sql = String::new();
    for line in sql.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("--") {
            continue;
        }
        let without_comments = match trimmed.find("--") {
            Some(comment_pos) => &trimmed[..comment_pos],
            None => trimmed,
        };
        cleaned_sql.push_str(without_comments.trim());
        cleaned_sql.push(' ');
    }

    cleaned_sql
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
