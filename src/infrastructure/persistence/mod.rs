//! SQLite storage implementation.
//!
//! [`SqliteStorage`] implements every capability trait from
//! [`crate::domain::repositories`] using SQLx runtime-checked queries.

pub mod sqlite_storage;

pub use sqlite_storage::{DEFAULT_MAX_CONNECTIONS, SqliteStorage};
