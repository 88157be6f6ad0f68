//! # Relay TUI
//!
//! A minimal terminal-based REST client, similar to Postman/Insomnia.
//!
//! ## Features
//! - HTTP methods: GET, POST, PUT, PATCH, DELETE
//! - Request body editor
//! - Custom headers
//! - Saved collections (one JSON file per request definition)
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod models;
pub mod storage;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;
pub mod constants;

// Re-export commonly used types
pub use models::{CollectionEntry, Header, HttpMethod, Request, Response};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use storage::CollectionStore;
pub use app::{AppActor, AppState};
pub use network::NetworkActor;
