mod common;

use alias_shortener::domain::repositories::UrlGetter;
use alias_shortener::routes::RouterOptions;
use alias_shortener::state::AliasPolicy;
use serde_json::{Value, json};

#[tokio::test]
async fn test_save_with_alias() {
    let (storage, _dir) = common::create_test_storage().await;
    let server = common::create_open_server(storage.clone());

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com/a", "alias": "promo" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "OK", "alias": "promo" }));
    assert_eq!(
        storage.get_url("promo").await.unwrap(),
        "https://example.com/a"
    );
}

#[tokio::test]
async fn test_save_generates_alias_of_configured_length() {
    let (storage, _dir) = common::create_test_storage().await;
    let options = RouterOptions {
        alias_policy: AliasPolicy {
            length: 10,
            ..AliasPolicy::default()
        },
        ..RouterOptions::default()
    };
    let server = common::create_test_server(storage.clone(), options);

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com/generated" }))
        .await;

    let body = response.json::<Value>();
    assert_eq!(body["status"], "OK");

    let alias = body["alias"].as_str().unwrap();
    assert_eq!(alias.len(), 10);
    assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(
        storage.get_url(alias).await.unwrap(),
        "https://example.com/generated"
    );
}

#[tokio::test]
async fn test_save_existing_alias() {
    let (storage, _dir) = common::create_test_storage().await;
    common::create_test_link(&storage, "taken", "https://first.example").await;
    let server = common::create_open_server(storage.clone());

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://second.example", "alias": "taken" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "Error", "error": "url already exists" }));
    assert_eq!(
        storage.get_url("taken").await.unwrap(),
        "https://first.example"
    );
}

#[tokio::test]
async fn test_save_rejects_missing_url() {
    let (storage, _dir) = common::create_test_storage().await;
    let server = common::create_open_server(storage.clone());

    let response = server
        .post("/url")
        .json(&json!({ "alias": "nourl" }))
        .await;

    response.assert_json(&json!({
        "status": "Error",
        "error": "field url is a required field"
    }));
    assert_eq!(storage.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_save_rejects_invalid_alias() {
    let (storage, _dir) = common::create_test_storage().await;
    let server = common::create_open_server(storage);

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "has space" }))
        .await;

    response.assert_json(&json!({
        "status": "Error",
        "error": "alias contains invalid characters"
    }));
}

#[tokio::test]
async fn test_save_then_redirect() {
    let (storage, _dir) = common::create_test_storage().await;
    let server = common::create_open_server(storage);

    server
        .post("/url")
        .json(&json!({ "url": "https://example.com/target", "alias": "go" }))
        .await
        .assert_json(&json!({ "status": "OK", "alias": "go" }));

    let response = server.get("/go").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}
