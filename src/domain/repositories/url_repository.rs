//! Capability traits for alias→URL storage.
//!
//! Each HTTP handler depends on exactly one of these traits, so any backend
//! (or a test double) that provides the single operation can be plugged in.

use crate::error::StorageError;
use async_trait::async_trait;

/// Persists new alias→URL mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteStorage`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlSaver: Send + Sync {
    /// Stores `target_url` under `alias` and returns the assigned identity.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UrlExists`] if the alias is already taken; the
    /// existing record is left untouched.
    /// Returns [`StorageError::Database`] on any other failure.
    async fn save_url(&self, target_url: &str, alias: &str) -> Result<i64, StorageError>;
}

/// Resolves aliases to their target URLs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlGetter: Send + Sync {
    /// # Errors
    ///
    /// Returns [`StorageError::UrlNotFound`] if no record matches `alias`.
    /// Returns [`StorageError::Database`] on any other failure.
    async fn get_url(&self, alias: &str) -> Result<String, StorageError>;
}

/// Removes alias→URL mappings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlDeleter: Send + Sync {
    /// Deletes the record matching `alias`.
    ///
    /// Deleting an alias that does not exist is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Database`] on connection or statement failures.
    async fn delete_url(&self, alias: &str) -> Result<(), StorageError>;
}

/// Reports whether the backing store is reachable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// # Errors
    ///
    /// Returns [`StorageError::Database`] if the store does not answer.
    async fn ping(&self) -> Result<(), StorageError>;
}

/// Everything the HTTP router needs from one storage backend.
pub trait UrlStorage: UrlSaver + UrlGetter + UrlDeleter + HealthProbe + 'static {}

impl<T> UrlStorage for T where T: UrlSaver + UrlGetter + UrlDeleter + HealthProbe + 'static {}
