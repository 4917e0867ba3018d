//! Noteful Backend Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
/// Router state shared by the HTTP handlers
pub mod state;
pub mod store;
pub mod validation;
