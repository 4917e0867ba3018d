// State management module
// Holds the services shared by every request handler

pub mod app_state;

pub use app_state::AppState;
