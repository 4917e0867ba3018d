//! Service layer for business logic
//!
//! This module contains service abstractions that separate business logic
//! from HTTP handlers, making the code more modular and testable. Services
//! receive the store handle at construction and hold no other state.

pub mod folders;
pub mod notes;

pub use folders::{FolderFields, FolderService};
pub use notes::{NoteFields, NoteService};
