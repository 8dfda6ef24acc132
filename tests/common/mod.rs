#![allow(dead_code)]

use alias_shortener::api::middleware::auth::BasicCredentials;
use alias_shortener::infrastructure::persistence::SqliteStorage;
use alias_shortener::routes::{RouterOptions, router};
use axum_test::TestServer;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

pub const TEST_USER: &str = "admin";
pub const TEST_PASSWORD: &str = "secret";

/// Storage backed by a fresh database file; the directory lives as long as
/// the returned guard.
pub async fn create_test_storage() -> (Arc<SqliteStorage>, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.db");

    let storage = SqliteStorage::new(path.to_str().unwrap()).await.unwrap();

    (Arc::new(storage), dir)
}

pub async fn create_test_link(storage: &SqliteStorage, alias: &str, url: &str) -> i64 {
    use alias_shortener::domain::repositories::UrlSaver;

    storage.save_url(url, alias).await.unwrap()
}

pub fn test_credentials() -> BasicCredentials {
    BasicCredentials::new(TEST_USER, TEST_PASSWORD)
}

pub fn create_test_server(storage: Arc<SqliteStorage>, options: RouterOptions) -> TestServer {
    TestServer::new(router(storage, options)).unwrap()
}

pub fn create_open_server(storage: Arc<SqliteStorage>) -> TestServer {
    create_test_server(storage, RouterOptions::default())
}

pub fn create_protected_server(storage: Arc<SqliteStorage>) -> TestServer {
    let options = RouterOptions {
        credentials: Some(test_credentials()),
        ..RouterOptions::default()
    };

    create_test_server(storage, options)
}

/// In-memory sink for log lines written by [`capture_logs`].
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Parsed JSON log lines written so far.
    pub fn lines(&self) -> Vec<serde_json::Value> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes)
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    /// Log lines whose `op` field equals `op`.
    pub fn lines_for_op(&self, op: &str) -> Vec<serde_json::Value> {
        self.lines()
            .into_iter()
            .filter(|line| line["op"] == op)
            .collect()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Installs a JSON subscriber for the current thread, filtered by `directives`.
///
/// Tests using it must stay on the current-thread runtime (plain
/// `#[tokio::test]`) so every handler runs under the returned guard.
pub fn capture_logs(directives: &str) -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();

    let subscriber = tracing_subscriber::fmt()
        .json()
        .flatten_event(true)
        .with_current_span(false)
        .with_span_list(false)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::new(directives))
        .with_writer(move || writer.clone())
        .finish();

    let guard = tracing::subscriber::set_default(subscriber);

    (buffer, guard)
}
