//! HTTP request handlers for API endpoints.
//!
//! Each handler is generic over the one storage capability it needs, so tests
//! can mount it with a mock and the server mounts it with [`crate::infrastructure::persistence::SqliteStorage`].

pub mod delete;
pub mod health;
pub mod redirect;
pub mod save;

pub use delete::delete_url_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use save::save_url_handler;
