//! Store module
//!
//! Relational persistence for folders and notes using a SQLite database.

pub mod db;
pub mod models;

pub use db::Store;
pub use models::{Folder, NewNote, Note, NotePatch, RowId};
