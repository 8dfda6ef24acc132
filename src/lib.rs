//! # Alias Shortener
//!
//! A small URL shortening service built with Axum and SQLite: save a URL under
//! a chosen or generated alias, redirect requests for the alias, delete it.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The URL record and storage capability traits
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite storage
//! - **API Layer** ([`api`]) - Handlers, DTOs, and middleware
//!
//! Handlers depend on one narrow trait each ([`domain::repositories::UrlDeleter`]
//! for delete, and so on), so storage can be swapped for a test double.
//!
//! ## Response Contract
//!
//! Every handler answers with the envelope `{"status":"OK"|"Error","error"?:...}`
//! and HTTP 200 for domain outcomes; clients branch on `status`, not on the
//! HTTP status code.
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_PATH="./storage/storage.db"
//! export HTTP_USER="admin" HTTP_PASSWORD="secret"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{ErrorKind, StorageError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::dto::{Response, SaveResponse, Status};
    pub use crate::domain::entities::UrlRecord;
    pub use crate::domain::repositories::{HealthProbe, UrlDeleter, UrlGetter, UrlSaver};
    pub use crate::error::{ErrorKind, StorageError};
    pub use crate::infrastructure::persistence::SqliteStorage;
    pub use crate::routes::{RouterOptions, app_router, router};
}
