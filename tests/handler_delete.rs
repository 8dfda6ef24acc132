mod common;

use alias_shortener::domain::repositories::UrlGetter;
use serde_json::json;

#[tokio::test]
async fn test_delete_existing_alias() {
    let (storage, _dir) = common::create_test_storage().await;
    common::create_test_link(&storage, "test_alias", "https://www.google.com/").await;
    let server = common::create_open_server(storage.clone());

    let response = server.delete("/test_alias").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "OK" }));
    assert!(
        storage
            .get_url("test_alias")
            .await
            .unwrap_err()
            .is_url_not_found()
    );
}

#[tokio::test]
async fn test_delete_unknown_alias_reports_ok() {
    let (storage, _dir) = common::create_test_storage().await;
    let server = common::create_open_server(storage);

    let response = server.delete("/unknown").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "OK" }));
}

#[tokio::test]
async fn test_delete_empty_alias() {
    let (storage, _dir) = common::create_test_storage().await;
    common::create_test_link(&storage, "untouched", "https://keep.example").await;
    let server = common::create_open_server(storage.clone());

    let response = server.delete("/").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "Error", "error": "invalid request" }));
    assert_eq!(storage.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_twice() {
    let (storage, _dir) = common::create_test_storage().await;
    common::create_test_link(&storage, "twice", "https://twice.example").await;
    let server = common::create_open_server(storage);

    server.delete("/twice").await.assert_json(&json!({ "status": "OK" }));
    server.delete("/twice").await.assert_json(&json!({ "status": "OK" }));
}

#[tokio::test]
async fn test_delete_then_redirect_not_found() {
    let (storage, _dir) = common::create_test_storage().await;
    common::create_test_link(&storage, "short", "https://short.example").await;
    let server = common::create_open_server(storage);

    server.delete("/short").await.assert_json(&json!({ "status": "OK" }));

    let response = server.get("/short").await;
    response.assert_json(&json!({ "status": "Error", "error": "not found" }));
}

#[tokio::test]
async fn test_delete_storage_closed() {
    let (storage, _dir) = common::create_test_storage().await;
    let server = common::create_open_server(storage.clone());
    storage.close().await;

    let response = server.delete("/whatever").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "Error", "error": "internal error" }));
}

#[tokio::test]
async fn test_delete_reserved_paths_use_envelope() {
    let (storage, _dir) = common::create_test_storage().await;
    let server = common::create_open_server(storage);

    for path in ["/health", "/url"] {
        let response = server.delete(path).await;

        assert_eq!(response.status_code(), 405, "DELETE {path}");
        response.assert_json(&json!({ "status": "Error", "error": "method not allowed" }));
    }
}

#[tokio::test]
async fn test_delete_undecodable_alias() {
    let (storage, _dir) = common::create_test_storage().await;
    common::create_test_link(&storage, "kept", "https://kept.example").await;
    let server = common::create_open_server(storage.clone());

    let response = server.delete("/%FF").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "Error", "error": "invalid request" }));
    assert_eq!(storage.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_nested_path_not_found() {
    let (storage, _dir) = common::create_test_storage().await;
    let server = common::create_open_server(storage);

    let response = server.delete("/a/b").await;

    assert_eq!(response.status_code(), 404);
    response.assert_json(&json!({ "status": "Error", "error": "not found" }));
}
