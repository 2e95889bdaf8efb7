//! # urlhop
//!
//! A small URL alias and redirect service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Storage** ([`storage`]) - Repository trait and SQLite implementation
//! - **API** ([`api`]) - HTTP handlers, DTOs, and middleware
//! - **Router** ([`routes`]) - Route composition and middleware stack
//! - **Server** ([`server`]) - Bootstrap and lifecycle
//!
//! ## Endpoints
//!
//! - `GET  /{alias}`            - Redirect to the stored URL (public)
//! - `POST /modify/save-url`    - Create a mapping (basic auth)
//! - `POST /modify/update-url`  - Replace the URL behind an alias (basic auth)
//! - `POST /modify/delete-url`  - Remove a mapping (basic auth)
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_PATH="./urlhop.db"
//! export ADMIN_USER="admin"
//! export ADMIN_PASSWORD="change-me"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod config;
pub mod error;
pub mod state;
pub mod storage;
pub mod utils;

pub mod routes;
pub mod server;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::error::AppError;
    pub use crate::state::{AdminCredentials, AppState};
    pub use crate::storage::{SqliteUrlRepository, StorageError, UrlRepository};
}
