//! Handler for alias deletion.

use axum::{Json, extract::State};
use std::sync::Arc;
use tracing::{error, info};

use crate::api::dto::Response;
use crate::domain::repositories::UrlDeleter;
use crate::utils::extract::{Alias, RequestContext};

/// Deletes the mapping for an alias.
///
/// # Endpoint
///
/// `DELETE /{alias}`
///
/// # Responses
///
/// Always `200 OK`; the outcome is in the envelope:
///
/// - `{"status":"OK"}` - deleted, or there was nothing to delete
/// - `{"status":"Error","error":"invalid request"}` - empty alias, storage untouched
/// - `{"status":"Error","error":"internal error"}` - storage failure (details only in logs)
pub async fn delete_url_handler<D>(
    State(deleter): State<Arc<D>>,
    ctx: RequestContext,
    Alias(alias): Alias,
) -> Json<Response>
where
    D: UrlDeleter + ?Sized,
{
    const OP: &str = "handlers.url.delete";

    if alias.is_empty() {
        info!(op = OP, request_id = %ctx.request_id, "alias is empty");
        return Json(Response::error("invalid request"));
    }

    if let Err(err) = deleter.delete_url(&alias).await {
        error!(op = OP, request_id = %ctx.request_id, error = %err, "failed to delete url");
        return Json(Response::error("internal error"));
    }

    info!(op = OP, request_id = %ctx.request_id, alias = %alias, "url deleted");

    Json(Response::ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlDeleter;
    use crate::error::StorageError;
    use axum::{Router, routing::delete};
    use axum_test::TestServer;
    use serde_json::json;

    fn make_server(mock: MockUrlDeleter) -> TestServer {
        let app = Router::new()
            .route("/", delete(delete_url_handler::<MockUrlDeleter>))
            .route("/{alias}", delete(delete_url_handler::<MockUrlDeleter>))
            .with_state(Arc::new(mock));

        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_delete_success() {
        let mut mock = MockUrlDeleter::new();
        mock.expect_delete_url()
            .withf(|alias| alias == "test_alias")
            .times(1)
            .returning(|_| Ok(()));

        let response = make_server(mock).delete("/test_alias").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "status": "OK" }));
    }

    #[tokio::test]
    async fn test_delete_storage_error() {
        let mut mock = MockUrlDeleter::new();
        mock.expect_delete_url()
            .withf(|alias| alias == "test_alias")
            .times(1)
            .returning(|_| {
                Err(StorageError::database(
                    "storage.sqlite.DeleteURL",
                    sqlx::Error::Protocol("unexpected error".to_string()),
                ))
            });

        let response = make_server(mock).delete("/test_alias").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "status": "Error", "error": "internal error" }));
    }

    #[tokio::test]
    async fn test_delete_not_found_is_not_distinguished() {
        let mut mock = MockUrlDeleter::new();
        mock.expect_delete_url()
            .times(1)
            .returning(|_| Err(StorageError::url_not_found("storage.sqlite.DeleteURL")));

        let response = make_server(mock).delete("/missing").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "status": "Error", "error": "internal error" }));
    }

    #[tokio::test]
    async fn test_delete_empty_alias() {
        let mut mock = MockUrlDeleter::new();
        mock.expect_delete_url().times(0);

        let response = make_server(mock).delete("/").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "status": "Error", "error": "invalid request" }));
    }

    #[tokio::test]
    async fn test_delete_twice_succeeds() {
        let mut mock = MockUrlDeleter::new();
        mock.expect_delete_url()
            .withf(|alias| alias == "again")
            .times(2)
            .returning(|_| Ok(()));

        let server = make_server(mock);

        server.delete("/again").await.assert_json(&json!({ "status": "OK" }));
        server.delete("/again").await.assert_json(&json!({ "status": "OK" }));
    }
}
