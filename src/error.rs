//! Storage error taxonomy shared by the persistence layer and HTTP handlers.
//!
//! Every variant carries the operation tag of the call site that produced it
//! (for example `storage.sqlite.SaveURL`), so a logged error reads as a call
//! trail while callers still match on the variant or on [`ErrorKind`].

use thiserror::Error;

/// Coarse classification of a [`StorageError`], for matching without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Schema or connection setup failed.
    Init,
    /// The alias is already taken.
    UrlExists,
    /// No record matches the alias.
    UrlNotFound,
    /// Any other driver or I/O failure.
    Database,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{op}: {source}")]
    Init {
        op: &'static str,
        source: sqlx::Error,
    },

    #[error("{op}: url exists")]
    UrlExists { op: &'static str },

    #[error("{op}: url not found")]
    UrlNotFound { op: &'static str },

    #[error("{op}: {source}")]
    Database {
        op: &'static str,
        source: sqlx::Error,
    },
}

impl StorageError {
    pub fn init(op: &'static str, source: sqlx::Error) -> Self {
        Self::Init { op, source }
    }

    pub fn url_exists(op: &'static str) -> Self {
        Self::UrlExists { op }
    }

    pub fn url_not_found(op: &'static str) -> Self {
        Self::UrlNotFound { op }
    }

    pub fn database(op: &'static str, source: sqlx::Error) -> Self {
        Self::Database { op, source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            StorageError::Init { .. } => ErrorKind::Init,
            StorageError::UrlExists { .. } => ErrorKind::UrlExists,
            StorageError::UrlNotFound { .. } => ErrorKind::UrlNotFound,
            StorageError::Database { .. } => ErrorKind::Database,
        }
    }

    /// Operation tag of the call site that failed.
    pub fn op(&self) -> &'static str {
        match self {
            StorageError::Init { op, .. }
            | StorageError::UrlExists { op }
            | StorageError::UrlNotFound { op }
            | StorageError::Database { op, .. } => op,
        }
    }

    pub fn is_url_exists(&self) -> bool {
        self.kind() == ErrorKind::UrlExists
    }

    pub fn is_url_not_found(&self) -> bool {
        self.kind() == ErrorKind::UrlNotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_carries_op_tag() {
        let err = StorageError::url_exists("storage.sqlite.SaveURL");
        assert_eq!(err.to_string(), "storage.sqlite.SaveURL: url exists");

        let err = StorageError::url_not_found("storage.sqlite.GetURL");
        assert_eq!(err.to_string(), "storage.sqlite.GetURL: url not found");
    }

    #[test]
    fn test_kind_survives_wrapping() {
        let err = StorageError::url_exists("storage.sqlite.SaveURL");
        assert!(err.is_url_exists());
        assert!(!err.is_url_not_found());
        assert_eq!(err.op(), "storage.sqlite.SaveURL");

        let wrapped = anyhow::Error::new(err).context("handlers.url.save");
        let inner = wrapped.downcast_ref::<StorageError>().unwrap();
        assert_eq!(inner.kind(), ErrorKind::UrlExists);
    }

    #[test]
    fn test_database_error_keeps_source() {
        let err = StorageError::database("storage.sqlite.DeleteURL", sqlx::Error::PoolClosed);

        assert_eq!(err.kind(), ErrorKind::Database);
        assert!(err.to_string().starts_with("storage.sqlite.DeleteURL: "));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_init_error_kind() {
        let err = StorageError::init("storage.sqlite.New", sqlx::Error::PoolTimedOut);
        assert_eq!(err.kind(), ErrorKind::Init);
        assert_eq!(err.op(), "storage.sqlite.New");
    }
}
