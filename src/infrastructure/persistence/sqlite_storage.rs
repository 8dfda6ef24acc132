//! SQLite implementation of the alias→URL storage.

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{HealthProbe, UrlDeleter, UrlGetter, UrlSaver};
use crate::error::StorageError;
use crate::utils::db_error::is_unique_violation_on_alias;

/// Pool size used by [`SqliteStorage::new`].
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS url(
        id INTEGER PRIMARY KEY,
        alias TEXT NOT NULL UNIQUE,
        url TEXT NOT NULL)
"#;

const CREATE_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_alias ON url(alias)";

/// SQLite storage owning the `url` table.
///
/// The pool is shared by all request handlers; SQLite serializes conflicting
/// writes itself, so no in-process locking is added. Cloning is cheap and
/// shares the same pool.
#[derive(Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Opens (or creates) the database at `location` with the default pool size.
    ///
    /// See [`Self::open`].
    pub async fn new(location: &str) -> Result<Self, StorageError> {
        Self::open(location, DEFAULT_MAX_CONNECTIONS).await
    }

    /// Opens (or creates) the database at `location` and ensures the schema exists.
    ///
    /// `location` is either a filesystem path or a `sqlite:` URL such as
    /// `sqlite::memory:`. Missing parent directories of a plain path are created.
    /// Safe to call against an already initialized database.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Init`] if the database cannot be opened or the
    /// schema statements fail.
    pub async fn open(location: &str, max_connections: u32) -> Result<Self, StorageError> {
        const OP: &str = "storage.sqlite.New";

        let options = connect_options(location)
            .map_err(|e| StorageError::init(OP, e))?
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::init(OP, e))?;

        Self::init_schema(&pool)
            .await
            .map_err(|e| StorageError::init(OP, e))?;

        tracing::debug!(location, "Storage initialized");

        Ok(Self { pool })
    }

    /// Wraps an existing pool, ensuring the schema exists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Init`] if the schema statements fail.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, StorageError> {
        Self::init_schema(&pool)
            .await
            .map_err(|e| StorageError::init("storage.sqlite.FromPool", e))?;

        Ok(Self { pool })
    }

    async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_TABLE).execute(pool).await?;
        sqlx::query(CREATE_INDEX).execute(pool).await?;
        Ok(())
    }

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Database`] if the query fails.
    pub async fn count(&self) -> Result<i64, StorageError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StorageError::database("storage.sqlite.Count", e))
    }

    /// Loads the full record for `alias`, including its identity.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UrlNotFound`] if no record matches.
    /// Returns [`StorageError::Database`] on other failures.
    pub async fn get_record(&self, alias: &str) -> Result<UrlRecord, StorageError> {
        const OP: &str = "storage.sqlite.GetRecord";

        let row = sqlx::query("SELECT id, alias, url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::database(OP, e))?
            .ok_or_else(|| StorageError::url_not_found(OP))?;

        let record = UrlRecord::new(
            row.try_get("id").map_err(|e| StorageError::database(OP, e))?,
            row.try_get("alias").map_err(|e| StorageError::database(OP, e))?,
            row.try_get("url").map_err(|e| StorageError::database(OP, e))?,
        );

        Ok(record)
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl UrlSaver for SqliteStorage {
    async fn save_url(&self, target_url: &str, alias: &str) -> Result<i64, StorageError> {
        const OP: &str = "storage.sqlite.SaveURL";

        let result = sqlx::query("INSERT INTO url(url, alias) VALUES(?, ?)")
            .bind(target_url)
            .bind(alias)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation_on_alias(&e) {
                    StorageError::url_exists(OP)
                } else {
                    StorageError::database(OP, e)
                }
            })?;

        Ok(result.last_insert_rowid())
    }
}

#[async_trait]
impl UrlGetter for SqliteStorage {
    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        const OP: &str = "storage.sqlite.GetURL";

        sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::database(OP, e))?
            .ok_or_else(|| StorageError::url_not_found(OP))
    }
}

#[async_trait]
impl UrlDeleter for SqliteStorage {
    async fn delete_url(&self, alias: &str) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::database("storage.sqlite.DeleteURL", e))?;

        Ok(())
    }
}

#[async_trait]
impl HealthProbe for SqliteStorage {
    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::database("storage.sqlite.Ping", e))?;

        Ok(())
    }
}

/// Builds connect options from a path or a `sqlite:` URL.
fn connect_options(location: &str) -> Result<SqliteConnectOptions, sqlx::Error> {
    if location.starts_with("sqlite:") {
        return Ok(SqliteConnectOptions::from_str(location)?.create_if_missing(true));
    }

    if let Some(parent) = Path::new(location).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    Ok(SqliteConnectOptions::new()
        .filename(location)
        .create_if_missing(true))
}
